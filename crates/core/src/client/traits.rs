use async_trait::async_trait;

use crate::{
    error::RemoteError,
    types::{comparison::ComparisonPayload, document::DocumentDescriptor},
};

/// Remote side of the workflow: folder scanning and document comparison.
#[async_trait]
pub trait DocumentService: Send + Sync {
    async fn list_trade_agreements(
        &self,
        folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, RemoteError>;

    async fn list_term_sheets(
        &self,
        folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, RemoteError>;

    async fn compare(
        &self,
        trade_agreement_path: &str,
        term_sheet_path: &str,
    ) -> Result<ComparisonPayload, RemoteError>;
}
