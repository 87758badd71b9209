use crate::{error::ValidationError, types::document::Category};

/// Only an empty path is rejected; whitespace is forwarded as-is.
pub fn validate_folder_path(category: Category, folder: &str) -> Result<(), ValidationError> {
    if folder.is_empty() {
        return Err(ValidationError::MissingFolderPath(category));
    }

    Ok(())
}

pub fn validate_selection<'a>(
    agreement: Option<&'a str>,
    term_sheet: Option<&'a str>,
) -> Result<(&'a str, &'a str), ValidationError> {
    match (agreement, term_sheet) {
        (Some(agreement), Some(term_sheet)) if !agreement.is_empty() && !term_sheet.is_empty() => {
            Ok((agreement, term_sheet))
        }
        _ => Err(ValidationError::MissingSelection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_folder_is_rejected_per_category() {
        assert_eq!(
            validate_folder_path(Category::TradeAgreements, ""),
            Err(ValidationError::MissingFolderPath(Category::TradeAgreements))
        );
        assert!(validate_folder_path(Category::TermSheets, "C:\\sheets").is_ok());
        assert!(validate_folder_path(Category::TermSheets, "  ").is_ok());
    }

    #[test]
    fn selection_needs_both_non_empty_paths() {
        assert_eq!(
            validate_selection(Some("a.pdf"), Some("t.xlsx")),
            Ok(("a.pdf", "t.xlsx"))
        );
        assert_eq!(
            validate_selection(Some("a.pdf"), None),
            Err(ValidationError::MissingSelection)
        );
        assert_eq!(
            validate_selection(None, Some("t.xlsx")),
            Err(ValidationError::MissingSelection)
        );
        assert_eq!(
            validate_selection(Some(""), Some("t.xlsx")),
            Err(ValidationError::MissingSelection)
        );
    }
}
