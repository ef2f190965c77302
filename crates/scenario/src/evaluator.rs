//! Scenario Evaluator Implementation

use feature_row::{RawInput, RowBuilder};
use model_runtime::{ModelError, PriceModel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Square footage added by the renovation.
pub const ADD_SQFT: u32 = 400;
/// Assumed renovation cost per added sqft (USD).
pub const CAPEX_PER_SQFT: f64 = 350.0;

/// Outcome of evaluating the renovation scenario for one property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenovationReport {
    /// Predicted price as entered
    pub baseline_price: f64,
    /// Predicted price with the added square footage
    pub post_price: f64,
    /// post_price - baseline_price
    pub uplift: f64,
    /// Fixed renovation cost
    pub capex: f64,
    /// (uplift - capex) / capex
    pub roi: f64,
}

/// Evaluates the fixed renovation scenario against a loaded price model.
pub struct ScenarioEvaluator<'a> {
    model: &'a PriceModel,
}

impl<'a> ScenarioEvaluator<'a> {
    /// Create an evaluator for the given model.
    pub fn new(model: &'a PriceModel) -> Self {
        Self { model }
    }

    /// Score baseline and post-renovation variants of the input.
    ///
    /// Invokes the model exactly twice: once as entered, once with
    /// [`ADD_SQFT`] more square footage and every other field unchanged.
    pub fn evaluate(&self, input: &RawInput) -> Result<RenovationReport, ModelError> {
        let builder = RowBuilder::new(self.model.feature_names());

        let baseline_price = self.model.predict(&builder.build(input))?;
        let post_input = input.with_sqft(input.sqft + ADD_SQFT);
        let post_price = self.model.predict(&builder.build(&post_input))?;

        let uplift = post_price - baseline_price;
        let capex = f64::from(ADD_SQFT) * CAPEX_PER_SQFT;
        let roi = roi(uplift, capex);

        debug!(
            "scenario: baseline={:.0} post={:.0} uplift={:.0} roi={:.3}",
            baseline_price, post_price, uplift, roi
        );
        Ok(RenovationReport {
            baseline_price,
            post_price,
            uplift,
            capex,
            roi,
        })
    }
}

/// Return on investment for a given uplift and capex.
///
/// Zero capex yields 0.0 rather than dividing by zero. The capex here is a
/// fixed non-zero constant, so the branch is defensive only.
pub fn roi(uplift: f64, capex: f64) -> f64 {
    if capex == 0.0 {
        0.0
    } else {
        (uplift - capex) / capex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PriceModel {
        // price = 90_000 + 12_000*bed + 8_000*bath + 210*house_size
        //         + 0.5*acre_lot + 45_000*[zip=94582]
        PriceModel::from_parts(
            vec![
                "bed".to_string(),
                "bath".to_string(),
                "house_size".to_string(),
                "acre_lot".to_string(),
                "zip_code_94582".to_string(),
            ],
            vec![12_000.0, 8_000.0, 210.0, 0.5, 45_000.0],
            90_000.0,
        )
        .unwrap()
    }

    #[test]
    fn test_capex_is_fixed() {
        let model = model();
        let report = ScenarioEvaluator::new(&model)
            .evaluate(&RawInput::default())
            .unwrap();
        assert_eq!(report.capex, 140_000.0);
    }

    #[test]
    fn test_uplift_is_price_delta() {
        let model = model();
        let report = ScenarioEvaluator::new(&model)
            .evaluate(&RawInput::default())
            .unwrap();

        // Only house_size changes between the two rows, by exactly 400.
        assert_eq!(report.uplift, report.post_price - report.baseline_price);
        assert!((report.uplift - 400.0 * 210.0).abs() < 1e-6);
    }

    #[test]
    fn test_baseline_price_matches_model() {
        let model = model();
        let report = ScenarioEvaluator::new(&model)
            .evaluate(&RawInput::default())
            .unwrap();

        let expected = 90_000.0
            + 12_000.0 * 3.0
            + 8_000.0 * 2.0
            + 210.0 * 1450.0
            + 0.5 * 0.10
            + 45_000.0;
        assert!((report.baseline_price - expected).abs() < 1e-6);
    }

    #[test]
    fn test_roi_formula() {
        let model = model();
        let report = ScenarioEvaluator::new(&model)
            .evaluate(&RawInput::default())
            .unwrap();
        let expected = (report.uplift - report.capex) / report.capex;
        assert_eq!(report.roi, expected);
    }

    #[test]
    fn test_roi_zero_capex_guard() {
        assert_eq!(roi(10_000.0, 0.0), 0.0);
        assert_eq!(roi(84_000.0, 140_000.0), (84_000.0 - 140_000.0) / 140_000.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let model = model();
        let input = RawInput::default();
        ScenarioEvaluator::new(&model).evaluate(&input).unwrap();
        assert_eq!(input.sqft, 1450);
    }
}
