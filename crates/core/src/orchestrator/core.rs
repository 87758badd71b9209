use std::sync::{Mutex, PoisonError};

use crate::{
    client::DocumentService,
    error::{Error, RemoteError},
    types::{
        comparison::ComparisonResult,
        document::{Category, DocumentDescriptor},
        state::SessionState,
    },
    validation,
};

pub const COMPARE_FALLBACK_MESSAGE: &str = "Failed to compare documents";

/// Drives the list / select / compare workflow for one session.
///
/// Every operation records its outcome in the session state, so the latest
/// user-facing message is always `state().error()`. The state lock is never
/// held across a service call: overlapping calls on the same orchestrator all
/// reach the service, and whichever response settles last wins.
pub struct Orchestrator<S>
where
    S: DocumentService,
{
    service: S,
    state: Mutex<SessionState>,
}

impl<S> Orchestrator<S>
where
    S: DocumentService,
{
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Mutex::new(SessionState::new()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn state(&self) -> SessionState {
        self.with_state(|state| state.clone())
    }

    pub fn select_agreement(&self, path: impl Into<String>) {
        let path = path.into();
        self.with_state(|state| state.selected_agreement = Some(path));
    }

    pub fn select_term_sheet(&self, path: impl Into<String>) {
        let path = path.into();
        self.with_state(|state| state.selected_term_sheet = Some(path));
    }

    pub async fn list_agreements(
        &self,
        folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, Error> {
        self.list(Category::TradeAgreements, folder_path).await
    }

    pub async fn list_term_sheets(
        &self,
        folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, Error> {
        self.list(Category::TermSheets, folder_path).await
    }

    /// Lists `category` under `folder_path`, replacing the held list on success.
    /// An empty listing succeeds but leaves an informational message behind.
    pub async fn list(
        &self,
        category: Category,
        folder_path: &str,
    ) -> Result<Vec<DocumentDescriptor>, Error> {
        self.with_state(|state| {
            state.clear_error();
            state.set_folder(category, folder_path);
        });

        if let Err(error) = validation::validate_folder_path(category, folder_path) {
            self.record_error(error.to_string());
            return Err(error.into());
        }

        let response = match category {
            Category::TradeAgreements => self.service.list_trade_agreements(folder_path).await,
            Category::TermSheets => self.service.list_term_sheets(folder_path).await,
        };

        match response {
            Ok(documents) => {
                tracing::info!(
                    category = category.label(),
                    count = documents.len(),
                    "listed documents"
                );
                self.with_state(|state| {
                    state.replace_documents(category, documents.clone());
                    if documents.is_empty() {
                        state.set_error(category.empty_message());
                    }
                });
                Ok(documents)
            }
            Err(error) => {
                self.record_remote_error(&error, category.fallback_message());
                Err(error.into())
            }
        }
    }

    /// Compares the current selections.
    pub async fn compare_selected(&self) -> Result<ComparisonResult, Error> {
        let (agreement, term_sheet) = self.with_state(|state| {
            (
                state.selected_agreement.clone(),
                state.selected_term_sheet.clone(),
            )
        });

        self.compare(agreement.as_deref(), term_sheet.as_deref())
            .await
    }

    pub async fn compare(
        &self,
        agreement_path: Option<&str>,
        term_sheet_path: Option<&str>,
    ) -> Result<ComparisonResult, Error> {
        self.with_state(|state| {
            state.clear_error();
            state.clear_comparison();
        });

        let (agreement, term_sheet) =
            match validation::validate_selection(agreement_path, term_sheet_path) {
                Ok(paths) => paths,
                Err(error) => {
                    self.record_error(error.to_string());
                    return Err(error.into());
                }
            };

        let payload = match self.service.compare(agreement, term_sheet).await {
            Ok(payload) => payload,
            Err(error) => {
                self.record_remote_error(&error, COMPARE_FALLBACK_MESSAGE.to_string());
                return Err(error.into());
            }
        };

        match payload.normalize() {
            Ok(result) => {
                tracing::info!(agreement, term_sheet, "comparison received");
                self.with_state(|state| state.set_comparison(result.clone()));
                Ok(result)
            }
            Err(error) => {
                tracing::debug!(%error, "comparison payload could not be decoded");
                self.record_error(COMPARE_FALLBACK_MESSAGE);
                Err(error.into())
            }
        }
    }

    fn record_remote_error(&self, error: &RemoteError, fallback: String) {
        tracing::debug!(%error, "document service call failed");
        let message = error
            .server_message()
            .map(str::to_owned)
            .unwrap_or(fallback);
        self.record_error(message);
    }

    fn record_error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "session error");
        self.with_state(|state| state.set_error(message));
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *state)
    }
}
