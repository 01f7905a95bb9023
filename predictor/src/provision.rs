use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use log::{info, warn};
use reqwest::blocking::Client;

use crate::{error::ProvisionError, model::Model};

/// Where the model artifact lives remotely and where it is cached locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    url: String,
    path: PathBuf,
}

impl ModelSource {
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Downloads the raw bytes of a model artifact.
pub trait ArtifactFetcher {
    /// # Errors
    /// Returns a human-readable reason if the artifact could not be retrieved.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, String>;
}

/// Plain HTTP GET fetcher.
///
/// The client is built on each fetch, i.e. only when the artifact is not cached.
#[derive(Debug, Clone, Copy)]
pub struct HttpFetcher {
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }
}

impl ArtifactFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, String> {
        let client = Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .build()
            .map_err(|e| format!("cannot build HTTP client: {e}"))?;

        let response = client.get(url).send().map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("server answered {status}"));
        }

        let body = response.bytes().map_err(|e| e.to_string())?;
        Ok(body.to_vec())
    }
}

/// Makes the model available in memory, downloading it first if it is not
/// cached at the source's local path.
///
/// # Errors
/// Returns a `ProvisionError` if the download, the write or the load fails.
pub fn provision<F: ArtifactFetcher + ?Sized>(
    source: &ModelSource,
    fetcher: &F,
) -> Result<Model, ProvisionError> {
    if source.path.exists() {
        info!("using cached model artifact at {}", source.path.display());
    } else {
        download(source, fetcher)?;
    }

    load(&source.path)
}

/// Reads and validates a model artifact from disk.
///
/// # Errors
/// Returns `LoadFailure` if the file cannot be read or is not a valid model.
pub fn load(path: &Path) -> Result<Model, ProvisionError> {
    let load_failure = |reason: String| ProvisionError::LoadFailure {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = fs::read(path).map_err(|e| load_failure(e.to_string()))?;
    let model = Model::from_json(&bytes).map_err(load_failure)?;

    info!("loaded model from {}: {}", path.display(), model.summary());
    Ok(model)
}

fn download<F: ArtifactFetcher + ?Sized>(
    source: &ModelSource,
    fetcher: &F,
) -> Result<(), ProvisionError> {
    let fetch_failure = |reason: String| ProvisionError::FetchFailure {
        url: source.url.clone(),
        reason,
    };

    info!("downloading model artifact from {}", source.url);
    let bytes = fetcher.fetch(&source.url).map_err(fetch_failure)?;
    if bytes.is_empty() {
        return Err(fetch_failure("empty response body".into()));
    }

    info!(bytes = bytes.len(); "model artifact downloaded");
    persist(&source.path, &bytes)
}

/// Writes to a sibling `.part` file first so an interrupted write never
/// leaves a truncated artifact at `path`.
fn persist(path: &Path, bytes: &[u8]) -> Result<(), ProvisionError> {
    let io_failure = |source: std::io::Error| ProvisionError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_failure)?;
    }

    let mut part_name = path.file_name().map(OsString::from).unwrap_or_default();
    part_name.push(".part");
    let part = path.with_file_name(part_name);

    let written = fs::write(&part, bytes).and_then(|()| fs::rename(&part, path));
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&part) {
            warn!("could not remove {}: {cleanup}", part.display());
        }
        return Err(io_failure(e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persist_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models").join("nested").join("model.json");

        persist(&path, b"{}").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"{}");
        assert!(!dir.path().join("models/nested/model.json.part").exists());
    }

    #[test]
    fn load_reports_missing_file_as_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match load(&path) {
            Err(ProvisionError::LoadFailure { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected load failure, got {other:?}"),
        }
    }
}
