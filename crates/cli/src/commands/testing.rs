use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tradecmp_core::{ComparisonPayload, DocumentDescriptor, DocumentService, RemoteError};

/// Lists the same documents for any folder and records what was compared.
pub(crate) struct FixedService {
    pub agreements: Vec<DocumentDescriptor>,
    pub term_sheets: Vec<DocumentDescriptor>,
    pub compared: Mutex<Option<(String, String)>>,
}

impl FixedService {
    pub fn new(agreements: &[&str], term_sheets: &[&str]) -> Self {
        let docs = |paths: &[&str]| -> Vec<DocumentDescriptor> {
            paths.iter().map(|p| DocumentDescriptor::new(*p)).collect()
        };
        Self {
            agreements: docs(agreements),
            term_sheets: docs(term_sheets),
            compared: Mutex::new(None),
        }
    }
}

#[async_trait]
impl DocumentService for FixedService {
    async fn list_trade_agreements(
        &self,
        _folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, RemoteError> {
        Ok(self.agreements.clone())
    }

    async fn list_term_sheets(
        &self,
        _folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, RemoteError> {
        Ok(self.term_sheets.clone())
    }

    async fn compare(
        &self,
        trade_agreement_path: &str,
        term_sheet_path: &str,
    ) -> Result<ComparisonPayload, RemoteError> {
        *self.compared.lock().unwrap() =
            Some((trade_agreement_path.into(), term_sheet_path.into()));
        Ok(ComparisonPayload::Structured(json!({"notional": {"match": true}})))
    }
}
