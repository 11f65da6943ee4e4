//! CLI binary for typhoon-ocr-runner.
//!
//! A thin shim over the library crate: resolve parameters from argv and the
//! environment, make one OCR call, print `{"markdown": …}` on stdout.
//! Every failure — usage or OCR — goes to stderr with exit code 1.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use typhoon_ocr_runner::{ocr_document, OcrOutput, OcrRequest, RunnerConfig};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a scanned document
  typhoon-ocr-runner invoice.pdf

  # Convert page 3 of a multi-page PDF
  typhoon-ocr-runner report.pdf 3

  # Against a self-hosted endpoint
  OCR_BASE_URL=http://localhost:8000/v1 typhoon-ocr-runner scan.png

ENVIRONMENT VARIABLES:
  OCR_BASE_URL         OCR endpoint base URL (checked first)
  OCR_ENDPOINT         Endpoint fallback variable
  OCR_API_KEY          API credential (checked first)
  TYPHOON_OCR_API_KEY  Credential fallback variable
  OPENAI_API_KEY       Last-resort credential variable

  Variables that are set but empty are skipped. Without any endpoint
  variable the runner talks to https://api.opentyphoon.ai/v1.

OUTPUT:
  stdout  a single JSON object: {"markdown": <string>}
  stderr  error messages and logs (RUST_LOG to adjust verbosity)
"#;

/// Convert a PDF or image document to Markdown via the Typhoon OCR API.
#[derive(Parser, Debug)]
#[command(
    name = "typhoon-ocr-runner",
    version,
    about = "Convert a PDF or image document to Markdown via the Typhoon OCR API",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the PDF or image file to convert.
    file_path: String,

    /// Page to convert (1-indexed). An empty value selects the default page.
    page_num: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print().context("Failed to print help")?;
            return Ok(());
        }
        Err(e) => {
            // Usage errors exit 1, before anything else runs.
            eprint!("{e}");
            std::process::exit(1);
        }
    };

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries exactly the JSON result; everything else goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // ── Resolve parameters ───────────────────────────────────────────────
    let request = OcrRequest::from_cli_parts(&cli.file_path, cli.page_num.as_deref())?;
    let config = RunnerConfig::from_env();

    // ── Run OCR ──────────────────────────────────────────────────────────
    let markdown = ocr_document(&request, &config).await?;

    let json = OcrOutput::new(markdown)
        .to_json()
        .context("Failed to serialise output")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(json.as_bytes())
        .context("Failed to write to stdout")?;
    handle.write_all(b"\n").ok();

    Ok(())
}
