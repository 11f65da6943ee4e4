//! Task prompts sent to the Typhoon OCR model.
//!
//! Centralising the prompt text here keeps the request-building code in
//! [`crate::client`] free of prompt engineering, and lets unit tests inspect
//! the exact instructions without a live endpoint.

/// Default task prompt for converting an attached document to Markdown.
pub const DEFAULT_TASK_PROMPT: &str = "\
Convert the attached document to clean, well-structured Markdown.

Preserve all text content and the natural reading order. Render tables in \
GFM pipe format and mathematical expressions in LaTeX. Output only the \
Markdown content — no commentary and no surrounding code fences.";

/// Build the task prompt, naming the requested page when one was selected.
///
/// The chat-completions protocol has no page parameter, so the page selector
/// travels as part of the instruction text.
pub fn task_prompt(page_num: Option<u32>) -> String {
    match page_num {
        Some(page) => format!("{DEFAULT_TASK_PROMPT}\n\nProcess only page {page} of the document."),
        None => DEFAULT_TASK_PROMPT.to_string(),
    }
}
