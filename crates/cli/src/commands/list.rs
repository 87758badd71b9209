use tradecmp_core::{Category, DocumentService, Orchestrator};

use super::CommandOutput;
use crate::render::render_documents;

pub async fn list<S: DocumentService>(
    orchestrator: &Orchestrator<S>,
    category: Category,
    folder: &str,
) -> CommandOutput {
    let result = orchestrator.list(category, folder).await;
    let state = orchestrator.state();

    CommandOutput {
        rendered: match &result {
            Ok(documents) if !documents.is_empty() => vec![render_documents(category, documents)],
            _ => Vec::new(),
        },
        message: state.error().map(str::to_owned),
        failed: result.is_err(),
    }
}
