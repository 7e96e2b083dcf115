//! Sentinel strings exchanged between pipeline stages.
//!
//! The composition prompt detects these exact values in its results text,
//! so they must be reproduced verbatim wherever outcomes are serialized.

/// Returned by the synthesizer when the question is out of domain.
pub const UNRELATED_QUERY_ATTEMPT: &str = "UNRELATED_QUERY_ATTEMPT";

/// Substituted for an empty result set.
pub const NO_RECORDS_FOUND: &str = "NO_RECORDS_FOUND";

/// Substituted when the synthesizer produced no query at all.
pub const COULD_NOT_GENERATE_QUERY: &str = "Could not generate query.";

/// Prefix for backend database failures.
pub const DATABASE_ERROR_PREFIX: &str = "DATABASE_ERROR:";

/// Prefix for all other execution failures.
pub const GENERAL_ERROR_PREFIX: &str = "GENERAL_ERROR:";

/// Fallback when the normalized results text is empty.
pub const NO_INFORMATION_RETRIEVED: &str = "No information was retrieved.";

/// Fixed apology when answer composition itself fails.
pub const COMPOSER_APOLOGY: &str =
    "Sorry, I encountered an error while formulating the final response.";
