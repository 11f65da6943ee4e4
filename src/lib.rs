//! # typhoon-ocr-runner
//!
//! Convert PDF and image documents to Markdown through the Typhoon OCR API,
//! or any OpenAI-compatible vision endpoint.
//!
//! The hard part — document understanding, layout analysis, text extraction —
//! lives entirely on the remote endpoint. This crate is the orchestration
//! around it: resolve the invocation parameters, send the document, hand the
//! Markdown back.
//!
//! ## Flow
//!
//! ```text
//! argv / env
//!  │
//!  ├─ 1. Resolve  file path, page number, base URL, API key
//!  ├─ 2. Attach   document bytes → base64 data URL
//!  ├─ 3. OCR      one chat-completions call to the endpoint
//!  └─ 4. Output   {"markdown": …} on stdout
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use typhoon_ocr_runner::{ocr_document, OcrRequest, RunnerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Endpoint and credential resolved from OCR_BASE_URL, OCR_API_KEY, …
//!     let config = RunnerConfig::from_env();
//!     let request = OcrRequest::new("document.pdf").with_page(1);
//!     let markdown = ocr_document(&request, &config).await?;
//!     println!("{markdown}");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `typhoon-ocr-runner` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! typhoon-ocr-runner = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod client;
pub mod config;
pub mod error;
pub mod ocr;
pub mod output;
pub mod prompts;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use client::{OcrEngine, TyphoonClient};
pub use config::{RunnerConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::OcrError;
pub use ocr::{ocr_document, run_ocr, OcrRequest};
pub use output::OcrOutput;
