//! Error types for calendar and astronomical computations.

/// Errors from civil-time validation, Julian Day arithmetic, or the solar
/// ephemeris.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The civil date or time does not exist (e.g. February 30, hour 24).
    #[error("invalid civil time: {0}")]
    InvalidCivilTime(String),
    /// The date precedes the supported epoch (1900-01-01).
    #[error("date outside supported range: {0}")]
    OutOfRange(String),
    /// Geographic coordinates are out of range or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The solar ephemeris could not produce a longitude.
    #[error("astronomical computation unavailable: {0}")]
    ComputationUnavailable(String),
}
