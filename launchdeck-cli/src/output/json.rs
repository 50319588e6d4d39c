//! JSON output formatting.
//!
//! The wire models already serialize with their API field names, so JSON
//! output is a direct re-serialization of the decoded values.

use launchdeck_core::{Company, Launch};

/// JSON formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Serializes the company profile as pretty JSON.
    pub fn company(company: &Company) -> String {
        serde_json::to_string_pretty(company).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serializes the launch listing as a pretty JSON array.
    pub fn launches(launches: &[Launch]) -> String {
        serde_json::to_string_pretty(launches).unwrap_or_else(|_| "[]".to_string())
    }
}
