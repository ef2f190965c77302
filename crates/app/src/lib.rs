//! ZIP Price Estimator Front-End
//!
//! Terminal form over the loaded price model: bounded prompts for the house
//! attributes, prediction plus renovation scenario output.

pub mod prompt;
pub mod render;

pub use prompt::Prompter;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
