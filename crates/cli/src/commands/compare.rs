use tradecmp_core::{DocumentService, Orchestrator};

use super::CommandOutput;
use crate::render::render_comparison;

pub async fn compare<S: DocumentService>(
    orchestrator: &Orchestrator<S>,
    agreement: Option<String>,
    term_sheet: Option<String>,
) -> CommandOutput {
    if let Some(agreement) = agreement {
        orchestrator.select_agreement(agreement);
    }
    if let Some(term_sheet) = term_sheet {
        orchestrator.select_term_sheet(term_sheet);
    }

    let result = orchestrator.compare_selected().await;

    CommandOutput {
        rendered: result.iter().map(render_comparison).collect(),
        message: orchestrator.state().error().map(str::to_owned),
        failed: result.is_err(),
    }
}
