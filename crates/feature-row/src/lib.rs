//! Feature Row Construction
//!
//! Maps raw house attributes into the exact column layout a trained
//! regression model expects, including one-hot ZIP encoding.

mod builder;
mod schema;

pub use builder::{FeatureRow, RawInput, RowBuilder};
pub use schema::FeatureSchema;

/// Bedroom count column name.
pub const COL_BED: &str = "bed";
/// Bathroom count column name.
pub const COL_BATH: &str = "bath";
/// House size (sqft) column name.
pub const COL_HOUSE_SIZE: &str = "house_size";
/// Lot size (acres) column name.
pub const COL_ACRE_LOT: &str = "acre_lot";
/// Prefix shared by all one-hot ZIP columns.
pub const ZIP_COLUMN_PREFIX: &str = "zip_code_";
