use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    client::traits::DocumentService,
    error::RemoteError,
    types::{
        comparison::ComparisonPayload,
        document::{Category, DocumentDescriptor},
    },
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/documents";

/// `DocumentService` backed by the document comparison REST API.
#[derive(Debug, Clone)]
pub struct HttpDocumentService {
    base_url: String,
    client: Client,
}

/// Body of a non-success response.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpDocumentService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value, RemoteError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, ?query, "document service request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(error) => {
                    tracing::debug!(%error, "could not read error response body");
                    String::new()
                }
            };
            let message = serde_json::from_str::<ErrorBody>(&body)
                .unwrap_or_default()
                .error;
            tracing::debug!(status = status.as_u16(), ?message, "document service error");
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn list(
        &self,
        category: Category,
        folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, RemoteError> {
        let body = self
            .get(category.endpoint(), &[("folderPath", folder_path)])
            .await?;

        serde_json::from_value(body).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DocumentService for HttpDocumentService {
    async fn list_trade_agreements(
        &self,
        folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, RemoteError> {
        self.list(Category::TradeAgreements, folder_path).await
    }

    async fn list_term_sheets(
        &self,
        folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, RemoteError> {
        self.list(Category::TermSheets, folder_path).await
    }

    async fn compare(
        &self,
        trade_agreement_path: &str,
        term_sheet_path: &str,
    ) -> Result<ComparisonPayload, RemoteError> {
        let body = self
            .get(
                "compare",
                &[
                    ("tradeAgreementPath", trade_agreement_path),
                    ("termSheetPath", term_sheet_path),
                ],
            )
            .await?;

        Ok(ComparisonPayload::from_value(body))
    }
}
