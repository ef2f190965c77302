//! Price Model Runtime
//!
//! Loads a pre-fit ridge regression artifact and exposes its expected
//! feature columns and a `predict` operation.

mod model;

pub use model::{PriceModel, DEFAULT_MODEL_PATH};

use thiserror::Error;

/// Errors from model loading and prediction
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    ArtifactRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact: {0}")]
    ArtifactParse(#[from] serde_json::Error),
    #[error("artifact has {coefficients} coefficients for {features} feature names")]
    CoefficientArity {
        features: usize,
        coefficients: usize,
    },
    #[error("input row has {actual} values, model expects {expected}")]
    InputShape { expected: usize, actual: usize },
}
