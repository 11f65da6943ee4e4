//! OCR engine seam and the production Typhoon client.
//!
//! [`OcrEngine`] is the boundary to the external OCR capability: everything
//! behind it — protocol, authentication, server-side retry policy — belongs
//! to the endpoint, not to this crate. The runner and its tests only ever see
//! `request in, Markdown out`.
//!
//! [`TyphoonClient`] is the one production implementation. It speaks the
//! OpenAI-compatible chat-completions protocol through [`async_openai`],
//! attaching the document as a base64 `data:` URL. One request per
//! invocation, no retries, no timeout of our own.

use crate::config::RunnerConfig;
use crate::error::OcrError;
use crate::ocr::OcrRequest;
use crate::prompts;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessageContentPartImageArgs,
    ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContentPart, CreateChatCompletionRequestArgs, ImageDetail,
    ImageUrlArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;
use tracing::{debug, info};

/// Sampling parameters for the Typhoon OCR model. Near-zero temperature keeps
/// the transcription faithful to the page rather than creative.
const TEMPERATURE: f32 = 0.1;
const TOP_P: f32 = 0.6;
const MAX_COMPLETION_TOKENS: u32 = 16384;

/// The external OCR capability: one document (or one page of it) in,
/// Markdown out.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn ocr_document(&self, request: &OcrRequest) -> Result<String, OcrError>;
}

/// Production engine backed by an OpenAI-compatible chat-completions
/// endpoint.
#[derive(Debug)]
pub struct TyphoonClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl TyphoonClient {
    /// Build a client for the resolved endpoint and credential.
    ///
    /// When no credential was resolved, the underlying client falls back to
    /// its own default resolution (`OPENAI_API_KEY`), matching the
    /// behaviour of leaving `api_key` out of the call entirely.
    pub fn new(config: &RunnerConfig) -> Self {
        let mut client_config = OpenAIConfig::new().with_api_base(config.base_url.clone());
        if let Some(ref key) = config.api_key {
            client_config = client_config.with_api_key(key.clone());
        }

        Self {
            client: Client::with_config(client_config),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl OcrEngine for TyphoonClient {
    async fn ocr_document(&self, request: &OcrRequest) -> Result<String, OcrError> {
        let path = request.pdf_or_image_path.as_path();
        let bytes = read_document(path).await?;
        info!(
            "Sending {} ({} bytes) to the OCR endpoint",
            path.display(),
            bytes.len()
        );

        let image_url = ImageUrlArgs::default()
            .url(data_url(path, &bytes))
            .detail(ImageDetail::High)
            .build()?;
        let parts: Vec<ChatCompletionRequestUserMessageContentPart> = vec![
            ChatCompletionRequestMessageContentPartTextArgs::default()
                .text(prompts::task_prompt(request.page_num))
                .build()?
                .into(),
            ChatCompletionRequestMessageContentPartImageArgs::default()
                .image_url(image_url)
                .build()?
                .into(),
        ];
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(parts)
            .build()?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages(vec![message.into()])
            .temperature(TEMPERATURE)
            .top_p(TOP_P)
            .max_completion_tokens(MAX_COMPLETION_TOKENS)
            .build()?;

        let response = self.client.chat().create(chat_request).await?;

        if let Some(usage) = response.usage {
            debug!(
                "OCR tokens: {} in / {} out",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(OcrError::EmptyResponse)
    }
}

/// Read the document bytes, mapping I/O failures to path-carrying errors.
async fn read_document(path: &Path) -> Result<Vec<u8>, OcrError> {
    tokio::fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => OcrError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => OcrError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => OcrError::Internal(format!("Failed to read '{}': {}", path.display(), e)),
    })
}

/// Wrap the document bytes in a `data:` URL for the request body.
///
/// The MIME type is guessed from the file extension; the endpoint inspects
/// the payload itself, so `application/octet-stream` is an acceptable guess
/// for exotic extensions.
fn data_url(path: &Path, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}
