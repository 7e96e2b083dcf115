//! Output types from model responses.

use serde::{Deserialize, Serialize};

/// Supported output types from text-completion models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Structured JSON output, for providers running in JSON mode.
    Json(serde_json::Value),
}

impl Output {
    /// The text content, if this output is text.
    ///
    /// # Examples
    ///
    /// ```
    /// use kosh_core::Output;
    ///
    /// let output = Output::Text("SELECT 1;".to_string());
    /// assert_eq!(output.as_text(), Some("SELECT 1;"));
    ///
    /// let json = Output::Json(serde_json::json!({"rows": 3}));
    /// assert_eq!(json.as_text(), None);
    /// ```
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Json(_) => None,
        }
    }
}
