use std::{fs::OpenOptions, path::Path};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Sends `RUST_LOG`-filtered logs (default `info`) to `path`, since the
/// terminal itself belongs to the UI.
///
/// # Errors
/// Returns an error if the log file cannot be opened.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();

    Ok(())
}
