use serde_json::Value;
use tradecmp_core::{
    Category, ComparisonReport, ComparisonResult, DocumentDescriptor, file_name_of,
    format_field_name,
};

pub fn render_documents(category: Category, documents: &[DocumentDescriptor]) -> String {
    let mut lines = vec![format!("{} ({})", category.heading(), documents.len())];
    lines.extend(documents.iter().enumerate().map(|(index, document)| {
        format!(
            "  [{}] {}  ({})",
            index + 1,
            file_name_of(Some(document.path.as_str())),
            document.path
        )
    }));
    lines.join("\n")
}

/// Uses the report layout when the service sent one, otherwise lists the
/// fields of whatever structure arrived.
pub fn render_comparison(result: &ComparisonResult) -> String {
    match result.report() {
        Some(report) => render_report(&report),
        None => render_fields(result.as_value(), 0).join("\n"),
    }
}

fn render_report(report: &ComparisonReport) -> String {
    let mut lines = vec![
        format!(
            "Trade agreement: {}",
            file_name_of(Some(report.trade_agreement_file.as_str()))
        ),
        format!(
            "Term sheet: {}",
            file_name_of(Some(report.term_sheet_file.as_str()))
        ),
        format!("Match: {:.2}%", report.match_percentage),
    ];

    if report.differences.is_empty() {
        lines.push("No differences".to_string());
        return lines.join("\n");
    }

    lines.push(format!("Differences ({})", report.differences.len()));
    for difference in &report.differences {
        let field = format_field_name(Some(difference.field.as_str()));
        lines.push(format!("  {field}"));
        lines.push(format!("    trade agreement: {}", difference.trade_agreement_value));
        lines.push(format!("    term sheet:      {}", difference.term_sheet_value));
    }
    lines.join("\n")
}

fn render_fields(value: &Value, depth: usize) -> Vec<String> {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(fields) => fields
            .iter()
            .flat_map(|(name, field)| {
                let label = format_field_name(Some(name.as_str()));
                match field {
                    Value::Object(_) | Value::Array(_) => {
                        let mut lines = vec![format!("{indent}{label}")];
                        lines.extend(render_fields(field, depth + 1));
                        lines
                    }
                    scalar => vec![format!("{indent}{label}: {}", scalar_text(scalar))],
                }
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| match item {
                Value::Object(_) | Value::Array(_) => {
                    let mut lines = vec![format!("{indent}- #{}", index + 1)];
                    lines.extend(render_fields(item, depth + 1));
                    lines
                }
                scalar => vec![format!("{indent}- {}", scalar_text(scalar))],
            })
            .collect(),
        scalar => vec![format!("{indent}{}", scalar_text(scalar))],
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}
