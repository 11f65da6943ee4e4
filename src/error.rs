//! Error types for the typhoon-ocr-runner library.
//!
//! The failure surface is deliberately flat: an invocation either never
//! reaches the endpoint (bad arguments, unreadable file) or the endpoint
//! call fails as a whole. There is no partial output to represent — the
//! runner emits JSON only after a fully successful call.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the typhoon-ocr-runner library.
#[derive(Debug, Error)]
pub enum OcrError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Document file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    /// The page argument is present but not a positive integer.
    #[error("Invalid page number '{value}': expected a positive integer")]
    InvalidPageNumber { value: String },

    // ── OCR errors ────────────────────────────────────────────────────────
    /// The OCR endpoint call failed — transport, authentication, rate limit,
    /// or server-side. The upstream message is preserved verbatim.
    #[error("OCR request failed: {message}")]
    OcrFailed { message: String },

    /// The endpoint answered but produced no content to return.
    #[error("OCR endpoint returned no content")]
    EmptyResponse,

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<async_openai::error::OpenAIError> for OcrError {
    fn from(e: async_openai::error::OpenAIError) -> Self {
        OcrError::OcrFailed {
            message: e.to_string(),
        }
    }
}
