//! Renovation Scenario Evaluation
//!
//! Scores a property as-is and with a fixed 400 sqft addition, then reports
//! the value uplift, the renovation capex, and the resulting ROI.

mod evaluator;

pub use evaluator::{RenovationReport, ScenarioEvaluator, ADD_SQFT, CAPEX_PER_SQFT};
