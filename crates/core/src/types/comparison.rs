use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

/// Comparison body exactly as the service delivered it: either already a JSON
/// structure or a JSON document encoded inside a JSON string.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonPayload {
    Structured(Value),
    Encoded(String),
}

impl ComparisonPayload {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(encoded) => Self::Encoded(encoded),
            other => Self::Structured(other),
        }
    }

    pub fn normalize(self) -> Result<ComparisonResult, DecodeError> {
        match self {
            Self::Structured(value) => Ok(ComparisonResult(value)),
            Self::Encoded(encoded) => Ok(ComparisonResult(serde_json::from_str(&encoded)?)),
        }
    }
}

/// Field-by-field outcome of comparing one trade agreement with one term sheet.
/// The shape is owned by the service; this only guarantees it is structured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonResult(Value);

impl ComparisonResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn report(&self) -> Option<ComparisonReport> {
        ComparisonReport::deserialize(&self.0).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub trade_agreement_file: String,
    pub term_sheet_file: String,
    pub match_percentage: f64,
    #[serde(default)]
    pub differences: Vec<FieldDifference>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDifference {
    pub field: String,
    pub trade_agreement_value: String,
    pub term_sheet_value: String,
}
