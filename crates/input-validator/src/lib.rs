//! Input Validation
//!
//! Range checks for raw house attributes. These bounds play the role the
//! original form widgets played: the prompt loop re-asks on any violation.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
