//! Feature Row Assembly

use crate::schema::FeatureSchema;
use crate::{COL_ACRE_LOT, COL_BATH, COL_BED, COL_HOUSE_SIZE, ZIP_COLUMN_PREFIX};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw house attributes as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Bedrooms (1 to 8)
    pub bed: u32,
    /// Bathrooms (1 to 5)
    pub bath: u32,
    /// House size in sqft (300 to 6000)
    pub sqft: u32,
    /// Lot size in acres (0.0 to 5.0)
    pub acre_lot: f64,
    /// ZIP code, matched against one-hot columns by name
    pub zip_code: String,
}

impl RawInput {
    /// Copy of this input with a different house size.
    pub fn with_sqft(&self, sqft: u32) -> Self {
        Self {
            sqft,
            ..self.clone()
        }
    }
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            bed: 3,
            bath: 2,
            sqft: 1450,
            acre_lot: 0.10,
            zip_code: "94582".to_string(),
        }
    }
}

/// Single-row feature vector, positionally aligned to a [`FeatureSchema`].
///
/// Built fresh per prediction and dropped after use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Feature values in schema order
    pub values: Vec<f64>,
}

impl FeatureRow {
    /// Number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builds feature rows aligned to a model's schema.
pub struct RowBuilder<'a> {
    schema: &'a FeatureSchema,
}

impl<'a> RowBuilder<'a> {
    /// Create a builder for the given schema.
    pub fn new(schema: &'a FeatureSchema) -> Self {
        Self { schema }
    }

    /// Build a feature row from raw input.
    ///
    /// Every column the input does not set stays 0. If the schema carries a
    /// `zip_code_<zip>` column for the given ZIP, that column is set to 1;
    /// otherwise the row is built without ZIP signal. A ZIP with no matching
    /// column is not an error.
    pub fn build(&self, input: &RawInput) -> FeatureRow {
        let mut values = vec![0.0; self.schema.len()];

        if let Some(idx) = self.schema.position(COL_BED) {
            values[idx] = f64::from(input.bed);
        }
        if let Some(idx) = self.schema.position(COL_BATH) {
            values[idx] = f64::from(input.bath);
        }
        if let Some(idx) = self.schema.position(COL_HOUSE_SIZE) {
            values[idx] = f64::from(input.sqft);
        }
        if let Some(idx) = self.schema.position(COL_ACRE_LOT) {
            values[idx] = input.acre_lot;
        }

        let zip_column = format!("{ZIP_COLUMN_PREFIX}{}", input.zip_code);
        match self.schema.position(&zip_column) {
            Some(idx) => values[idx] = 1.0,
            None => debug!("no one-hot column for ZIP {}", input.zip_code),
        }

        FeatureRow { values }
    }
}
