pub mod advisory;
pub mod config;
pub mod error;
pub mod features;
pub mod inputs;
pub mod model;
pub mod prediction;
pub mod provision;

use std::sync::Arc;

pub use advisory::{Advisory, Severity};
pub use config::AppConfig;
pub use error::{PredictorError, ProvisionError, Result};
pub use inputs::HouseholdInputs;
pub use model::{Model, Predictor};
pub use prediction::{Prediction, predict};

use provision::{HttpFetcher, provision};

/// Shared, read-only handle to the model loaded at startup.
pub type ModelHandle = Arc<Model>;

/// Downloads the model if needed and loads it, once, for the whole process.
///
/// # Errors
/// Returns `ModelUnavailable` if the artifact cannot be fetched or loaded.
pub fn start(config: &AppConfig) -> Result<ModelHandle> {
    let source = config.model_source();
    log::info!("provisioning model (cache: {})", source.path().display());

    let fetcher = HttpFetcher::new(config.connect_timeout(), config.fetch_timeout());
    let model = provision(&source, &fetcher)?;
    Ok(Arc::new(model))
}
