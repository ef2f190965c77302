//! ZIP Price Estimator - Main Entry Point

use anyhow::Context;
use app::{init_logging, render, Prompter};
use input_validator::Validator;
use model_runtime::{PriceModel, DEFAULT_MODEL_PATH};
use once_cell::sync::OnceCell;
use scenario::{ScenarioEvaluator, ADD_SQFT};
use std::io;
use tracing::info;

/// Process-wide model handle (initialized once, read-only afterwards)
static MODEL: OnceCell<PriceModel> = OnceCell::new();

fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== ZIP Price Estimator v{} ===", env!("CARGO_PKG_VERSION"));

    // No prediction is attempted unless the model loads.
    let loaded = PriceModel::load(DEFAULT_MODEL_PATH).with_context(|| {
        format!("model failed to load; make sure {DEFAULT_MODEL_PATH} exists")
    })?;
    let model = MODEL.get_or_init(|| loaded);

    println!("California ZIP House Price Predictor");
    println!();

    let validator = Validator::default();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), &validator);
    let evaluator = ScenarioEvaluator::new(model);

    loop {
        let input = prompter.collect_input()?;
        let report = evaluator.evaluate(&input)?;

        println!();
        println!("Estimated price: {}", render::usd(report.baseline_price));
        println!();
        println!("Renovation Scenario (+{ADD_SQFT} sqft)");
        println!("New estimated price: {}", render::usd(report.post_price));
        println!("Value uplift: {}", render::usd(report.uplift));
        println!("Capex (est.): {}", render::usd(report.capex));
        println!("ROI: {}", render::pct(report.roi));
        println!();

        if !prompter.confirm("Predict another price?")? {
            break;
        }
        println!();
    }

    Ok(())
}
