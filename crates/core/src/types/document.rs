use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The two kinds of documents a session lists and compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TradeAgreements,
    TermSheets,
}

impl Category {
    /// Path segment under the service base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::TradeAgreements => "trade-agreements",
            Self::TermSheets => "term-sheets",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TradeAgreements => "trade agreements",
            Self::TermSheets => "term sheets",
        }
    }

    /// Sentence-case form of [`Category::label`] for headings.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::TradeAgreements => "Trade agreements",
            Self::TermSheets => "Term sheets",
        }
    }

    pub fn missing_folder_message(&self) -> String {
        format!("Please enter a folder path for {}", self.label())
    }

    pub fn empty_message(&self) -> String {
        format!("No {} found in the specified folder", self.label())
    }

    pub fn fallback_message(&self) -> String {
        format!("Failed to fetch {}", self.label())
    }
}

/// One listed document. The service may send a bare path string or an object
/// carrying a `path`; anything else on the object is kept untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentDescriptor {
    pub path: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDescriptor {
    Path(String),
    Object {
        path: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl<'de> Deserialize<'de> for DocumentDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawDescriptor::deserialize(deserializer)? {
            RawDescriptor::Path(path) => Self::new(path),
            RawDescriptor::Object { path, extra } => Self { path, extra },
        })
    }
}
