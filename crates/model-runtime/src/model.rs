//! Price Model Implementation

use crate::ModelError;
use feature_row::{FeatureRow, FeatureSchema};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Fixed artifact path the estimator loads from.
pub const DEFAULT_MODEL_PATH: &str = "ml/model_ca_zip_ridge.json";

/// On-disk form of the trained model.
#[derive(Debug, Serialize, Deserialize)]
struct ModelArtifact {
    /// Column names the model was fit on, in training order
    feature_names: Vec<String>,
    /// One coefficient per feature name
    coefficients: Vec<f64>,
    /// Regression intercept
    intercept: f64,
}

/// A loaded ridge regression price model.
///
/// Read-only once constructed; a single instance is shared for the process
/// lifetime.
#[derive(Debug)]
pub struct PriceModel {
    schema: FeatureSchema,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl PriceModel {
    /// Load a model artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ModelError::ArtifactRead {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        let model = Self::from_artifact(artifact)?;

        info!(
            "loaded price model from {} ({} features)",
            path.display(),
            model.schema.len()
        );
        Ok(model)
    }

    /// Build a model directly from its parts. Arity-checked like `load`.
    pub fn from_parts(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ModelError> {
        Self::from_artifact(ModelArtifact {
            feature_names,
            coefficients,
            intercept,
        })
    }

    fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        if artifact.feature_names.len() != artifact.coefficients.len() {
            return Err(ModelError::CoefficientArity {
                features: artifact.feature_names.len(),
                coefficients: artifact.coefficients.len(),
            });
        }
        Ok(Self {
            schema: FeatureSchema::new(artifact.feature_names),
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }

    /// Columns the model expects, in training order.
    pub fn feature_names(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Predict a price for one feature row.
    ///
    /// The row must be aligned to [`feature_names`](Self::feature_names);
    /// rows built through `RowBuilder` always are.
    pub fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::InputShape {
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(&row.values)
            .map(|(coef, value)| coef * value)
            .sum();
        Ok(self.intercept + dot)
    }
}
