//! Error types for the chart pipeline.

use saju_time::TimeError;

/// Errors surfaced by chart computation, configuration, and content lookup.
///
/// `Input`, `LocationUnresolved`, and `ComputationUnavailable` abort a chart
/// request. `LookupMiss` only affects narrative text and is normally
/// absorbed by [`crate::content::lookup_or_placeholder`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Malformed or out-of-range birth moment or coordinates.
    #[error("invalid input: {0}")]
    Input(String),
    /// The birth place could not be resolved and no fallback is configured.
    #[error("location unresolved: {place}")]
    LocationUnresolved { place: String },
    /// The astronomical provider could not produce a value.
    #[error("computation unavailable: {0}")]
    ComputationUnavailable(String),
    /// A narrative content entry is missing.
    #[error("content missing: {category}/{key}")]
    LookupMiss { category: String, key: String },
    /// Configuration failed validation or could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::ComputationUnavailable(msg) => Self::ComputationUnavailable(msg),
            other => Self::Input(other.to_string()),
        }
    }
}
