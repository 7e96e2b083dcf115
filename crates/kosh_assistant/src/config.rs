//! Assistant configuration.

/// Tuning knobs for the question-answering pipeline.
///
/// Constructed once at startup and passed into [`crate::Assistant::new`];
/// nothing is read from ambient globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Row limit the synthesis prompt instructs the model to apply.
    pub top_k: u32,
    /// Case-insensitive prefixes that mark a generated text as a refusal
    /// rather than a query. This is a heuristic over free-form model
    /// output; it stays configurable because tightening it would silently
    /// change which questions are accepted.
    pub refusal_prefixes: Vec<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            refusal_prefixes: vec![
                "i don't know".to_string(),
                "i cannot".to_string(),
                "sorry".to_string(),
            ],
        }
    }
}

impl AssistantConfig {
    /// Override the row limit.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }
}
