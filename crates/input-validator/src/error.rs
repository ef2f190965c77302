//! Validation Error Types

use thiserror::Error;

/// Errors during input validation
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// ZIP code is not five ASCII digits
    #[error("ZIP code {0:?} is not a five-digit code")]
    MalformedZip(String),
}
