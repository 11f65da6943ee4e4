//! The runner's stdout contract.

use serde::{Deserialize, Serialize};

/// The runner's entire stdout payload: one key, the OCR-produced Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Markdown text as returned by the OCR endpoint, unmodified.
    pub markdown: String,
}

impl OcrOutput {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }

    /// Serialise as a compact, single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
