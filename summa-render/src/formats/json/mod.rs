//! JSON payload format
//!
//! Summaries are usually stored as a string member of an API response. This format accepts
//! either a bare JSON string or an object, pulls the summary text out of it, and renders that
//! text with content detection (Markdown, HTML or plain text).
//!
//! Parameters:
//! - `field`: name of the member holding the text. Without it the first string member among
//!   `summary`, `content` and `report` is used.

use crate::display::render_content;
use crate::error::FormatError;
use crate::format::Format;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

const DEFAULT_FIELDS: &[&str] = &["summary", "content", "report"];

/// Format implementation for JSON transport payloads
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON payload carrying summary text"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        self.render_with_options(source, &HashMap::new())
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if let Some(unknown) = options.keys().find(|key| key.as_str() != "field") {
            return Err(FormatError::NotSupported(format!(
                "Format 'json' does not accept parameter '{unknown}'"
            )));
        }

        let payload: Value = serde_json::from_str(source)
            .map_err(|e| FormatError::InvalidPayload(format!("not valid JSON: {e}")))?;
        let text = extract_text(&payload, options.get("field").map(String::as_str))?;
        let (kind, html) = render_content(&text);
        debug!(%kind, "rendered json payload");
        Ok(html)
    }
}

fn extract_text(payload: &Value, field: Option<&str>) -> Result<String, FormatError> {
    match (payload, field) {
        (Value::String(text), _) => Ok(text.clone()),
        (Value::Object(map), Some(field)) => map
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                FormatError::InvalidPayload(format!("field '{field}' is missing or not a string"))
            }),
        (Value::Object(map), None) => DEFAULT_FIELDS
            .iter()
            .find_map(|name| map.get(*name).and_then(Value::as_str))
            .map(str::to_string)
            .ok_or_else(|| {
                FormatError::InvalidPayload(format!(
                    "no summary text found, expected one of: {}",
                    DEFAULT_FIELDS.join(", ")
                ))
            }),
        _ => Err(FormatError::InvalidPayload(
            "expected a JSON string or object".to_string(),
        )),
    }
}
