//! Feature Schema

use std::collections::HashMap;

/// Ordered set of column names a trained model expects.
///
/// Fixed at training time and discovered when the model artifact is loaded.
/// Column order is significant: a feature row is positionally aligned to it.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Create a schema from an ordered list of column names.
    pub fn new(columns: Vec<String>) -> Self {
        let positions = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self { columns, positions }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column by name, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl From<Vec<String>> for FeatureSchema {
    fn from(columns: Vec<String>) -> Self {
        Self::new(columns)
    }
}

impl FromIterator<String> for FeatureSchema {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
