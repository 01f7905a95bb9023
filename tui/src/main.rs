use std::{env, path::PathBuf};

use anyhow::{anyhow, Result};
use predictor::AppConfig;

mod app;
mod state;
mod ui;

fn main() -> Result<()> {
    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref()).map_err(|e| anyhow!("config: {e}"))?;

    app::logging::init(&config.log_path)?;
    log::info!("starting with {config:?}");

    app::run::run(&config)
}
