use super::{
    comparison::ComparisonResult,
    document::{Category, DocumentDescriptor},
};

/// Everything one comparison session remembers between user actions.
///
/// `comparison` and `error` are mutually exclusive; they are only reachable
/// through the setters below so that writing one always clears the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub agreement_folder: String,
    pub term_sheet_folder: String,
    pub trade_agreements: Vec<DocumentDescriptor>,
    pub term_sheets: Vec<DocumentDescriptor>,
    pub selected_agreement: Option<String>,
    pub selected_term_sheet: Option<String>,
    comparison: Option<ComparisonResult>,
    error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparison(&self) -> Option<&ComparisonResult> {
        self.comparison.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.comparison = None;
        self.error = Some(message.into());
    }

    pub fn set_comparison(&mut self, result: ComparisonResult) {
        self.error = None;
        self.comparison = Some(result);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn clear_comparison(&mut self) {
        self.comparison = None;
    }

    pub fn folder(&self, category: Category) -> &str {
        match category {
            Category::TradeAgreements => &self.agreement_folder,
            Category::TermSheets => &self.term_sheet_folder,
        }
    }

    pub fn set_folder(&mut self, category: Category, folder: impl Into<String>) {
        match category {
            Category::TradeAgreements => self.agreement_folder = folder.into(),
            Category::TermSheets => self.term_sheet_folder = folder.into(),
        }
    }

    pub fn documents(&self, category: Category) -> &[DocumentDescriptor] {
        match category {
            Category::TradeAgreements => &self.trade_agreements,
            Category::TermSheets => &self.term_sheets,
        }
    }

    /// Replaces, never merges, the held list for `category`.
    pub fn replace_documents(&mut self, category: Category, documents: Vec<DocumentDescriptor>) {
        match category {
            Category::TradeAgreements => self.trade_agreements = documents,
            Category::TermSheets => self.term_sheets = documents,
        }
    }
}
