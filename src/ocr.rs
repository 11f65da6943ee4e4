//! Single-document OCR entry points.
//!
//! One invocation is one [`OcrRequest`] driven through an [`OcrEngine`].
//! [`ocr_document`] is the convenience path the CLI uses (production Typhoon
//! client); [`run_ocr`] takes any engine so callers and tests can substitute
//! their own.

use crate::client::{OcrEngine, TyphoonClient};
use crate::config::RunnerConfig;
use crate::error::OcrError;
use std::path::PathBuf;
use tracing::info;

/// One OCR invocation: the document to convert and an optional page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrRequest {
    /// Path to the PDF or image file.
    pub pdf_or_image_path: PathBuf,

    /// 1-indexed page within a multi-page document. `None` lets the endpoint
    /// pick its default page.
    pub page_num: Option<u32>,
}

impl OcrRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            pdf_or_image_path: path.into(),
            page_num: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page_num = Some(page);
        self
    }

    /// Build a request from the runner's positional arguments.
    ///
    /// An empty page argument is treated as absent, not as page 0. A present
    /// page argument must parse as a positive integer.
    pub fn from_cli_parts(file_path: &str, page_arg: Option<&str>) -> Result<Self, OcrError> {
        let page_num = match page_arg {
            None | Some("") => None,
            Some(raw) => {
                let page: u32 =
                    raw.trim()
                        .parse()
                        .map_err(|_| OcrError::InvalidPageNumber {
                            value: raw.to_string(),
                        })?;
                if page == 0 {
                    return Err(OcrError::InvalidPageNumber {
                        value: raw.to_string(),
                    });
                }
                Some(page)
            }
        };

        Ok(Self {
            pdf_or_image_path: PathBuf::from(file_path),
            page_num,
        })
    }
}

/// Convert a document to Markdown via the production Typhoon engine.
pub async fn ocr_document(request: &OcrRequest, config: &RunnerConfig) -> Result<String, OcrError> {
    let engine = TyphoonClient::new(config);
    run_ocr(&engine, request).await
}

/// Convert a document to Markdown via any engine implementation.
pub async fn run_ocr(engine: &dyn OcrEngine, request: &OcrRequest) -> Result<String, OcrError> {
    info!("Starting OCR: {}", request.pdf_or_image_path.display());
    engine.ocr_document(request).await
}
