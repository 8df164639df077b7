//! Console rendering of responses and errors.

use serde_json::json;
use tracing::debug;

use crate::assistant::AssistantResponse;
use crate::error::AppError;

/// Blank line, then the input echo and the response.
pub fn render_text(response: &AssistantResponse) -> String {
    format!(
        "\nText Input: {}\nImage Input: {}\nResponse: {}",
        response.text, response.image, response.response
    )
}

pub fn render_json(response: &AssistantResponse) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(response)
}

pub fn render_error(err: &AppError) -> String {
    format!("\nError: {}.", err)
}

pub fn render_error_json(err: &AppError) -> String {
    json!({ "error": err.to_string() }).to_string()
}

/// Render a handled failure for stdout. Logged at `debug` only, since the
/// rendered line already reports it.
pub fn render_failure(err: &AppError, json: bool) -> String {
    debug!("Request failed: {}", err);
    if json {
        render_error_json(err)
    } else {
        render_error(err)
    }
}
