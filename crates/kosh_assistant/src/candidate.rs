//! Candidate query classification.

use crate::sentinel::UNRELATED_QUERY_ATTEMPT;

/// The synthesizer's raw output, whitespace-trimmed.
///
/// A candidate is one of three things: a SQL statement, the unrelated
/// sentinel, or free text the model produced instead of a query (including
/// nothing at all). Classification is by inspection; the text itself is
/// preserved untouched so downstream stages can pass it through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateQuery(String);

impl CandidateQuery {
    /// Create a candidate from raw model output, trimming whitespace.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// The candidate text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the model produced no text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the model judged the question out of domain.
    pub fn is_unrelated(&self) -> bool {
        self.0.eq_ignore_ascii_case(UNRELATED_QUERY_ATTEMPT)
    }

    /// Whether the text starts with one of the configured refusal prefixes.
    pub fn is_refusal(&self, prefixes: &[String]) -> bool {
        let lowered = self.0.to_lowercase();
        prefixes
            .iter()
            .any(|prefix| lowered.starts_with(&prefix.to_lowercase()))
    }
}

impl std::fmt::Display for CandidateQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> Vec<String> {
        crate::AssistantConfig::default().refusal_prefixes
    }

    #[test]
    fn trims_raw_output() {
        let candidate = CandidateQuery::new("  SELECT 1;  \n");
        assert_eq!(candidate.as_str(), "SELECT 1;");
    }

    #[test]
    fn classifies_empty() {
        assert!(CandidateQuery::new("   \n\t").is_empty());
        assert!(!CandidateQuery::new("SELECT 1").is_empty());
    }

    #[test]
    fn classifies_unrelated_case_insensitively() {
        assert!(CandidateQuery::new("UNRELATED_QUERY_ATTEMPT").is_unrelated());
        assert!(CandidateQuery::new("unrelated_query_attempt").is_unrelated());
        assert!(!CandidateQuery::new("SELECT 'UNRELATED_QUERY_ATTEMPT'").is_unrelated());
    }

    #[test]
    fn classifies_refusals() {
        assert!(CandidateQuery::new("I don't know the answer to that.").is_refusal(&prefixes()));
        assert!(CandidateQuery::new("Sorry, that is out of scope.").is_refusal(&prefixes()));
        assert!(CandidateQuery::new("I CANNOT answer that").is_refusal(&prefixes()));
        assert!(!CandidateQuery::new("SELECT \"BasicPay\" FROM t").is_refusal(&prefixes()));
    }
}
