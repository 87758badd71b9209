use tradecmp_core::{Category, DocumentDescriptor, DocumentService, Orchestrator, file_name_of};

use super::CommandOutput;
use crate::render::{render_comparison, render_documents};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    pub agreements_folder: String,
    pub term_sheets_folder: String,
    pub agreement: Option<String>,
    pub term_sheet: Option<String>,
}

/// Lists both folders, picks one document of each kind and compares them.
/// Stops at the first step that leaves the session in error.
pub async fn run<S: DocumentService>(
    orchestrator: &Orchestrator<S>,
    args: RunArgs,
) -> CommandOutput {
    let mut output = CommandOutput::default();

    let steps = [
        (Category::TradeAgreements, &args.agreements_folder, &args.agreement),
        (Category::TermSheets, &args.term_sheets_folder, &args.term_sheet),
    ];

    for (category, folder, wanted) in steps {
        let documents = match orchestrator.list(category, folder).await {
            Ok(documents) => documents,
            Err(_) => return finish(orchestrator, output, true),
        };
        if documents.is_empty() {
            return finish(orchestrator, output, true);
        }
        output.rendered.push(render_documents(category, &documents));

        match pick(&documents, wanted.as_deref()) {
            Some(document) => match category {
                Category::TradeAgreements => orchestrator.select_agreement(document.path.clone()),
                Category::TermSheets => orchestrator.select_term_sheet(document.path.clone()),
            },
            None => tracing::warn!(
                category = category.label(),
                wanted = wanted.as_deref().unwrap_or_default(),
                "no listed document matches"
            ),
        }
    }

    let result = orchestrator.compare_selected().await;
    if let Ok(comparison) = &result {
        output.rendered.push(render_comparison(comparison));
    }
    finish(orchestrator, output, result.is_err())
}

/// Matches on file name or full path; without a wish the first listed document wins.
pub fn pick<'a>(
    documents: &'a [DocumentDescriptor],
    wanted: Option<&str>,
) -> Option<&'a DocumentDescriptor> {
    match wanted {
        None => documents.first(),
        Some(wanted) => documents.iter().find(|document| {
            document.path == wanted || file_name_of(Some(document.path.as_str())) == wanted
        }),
    }
}

fn finish<S: DocumentService>(
    orchestrator: &Orchestrator<S>,
    mut output: CommandOutput,
    failed: bool,
) -> CommandOutput {
    output.message = orchestrator.state().error().map(str::to_owned);
    output.failed = failed;
    output
}
