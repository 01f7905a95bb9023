use std::{error::Error, fmt, io, path::PathBuf};

/// The predictor crate's result type.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Failures while making the model artifact available in memory.
#[derive(Debug)]
pub enum ProvisionError {
    /// The remote artifact could not be downloaded.
    FetchFailure { url: String, reason: String },
    /// The local artifact is unreadable, corrupt or inconsistent.
    LoadFailure { path: PathBuf, reason: String },
    /// The downloaded artifact could not be persisted.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailure { url, reason } => {
                write!(f, "failed to fetch model from {url}: {reason}")
            }
            Self::LoadFailure { path, reason } => {
                write!(f, "failed to load model from {}: {reason}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "failed to write model to {}: {source}", path.display())
            }
        }
    }
}

impl Error for ProvisionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// All errors a prediction request can end with.
#[derive(Debug)]
pub enum PredictorError {
    /// The model could not be provisioned at startup.
    ModelUnavailable(ProvisionError),
    /// The model expects features the assembler does not produce.
    SchemaMismatch { missing: Vec<String> },
    /// A form value is outside its basic numeric range.
    InvalidInput { field: &'static str, reason: String },
    /// The model returned something that is not a usable number.
    PredictionFailure(String),
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelUnavailable(e) => write!(f, "model unavailable: {e}"),
            Self::SchemaMismatch { missing } => {
                write!(f, "schema mismatch: model expects unknown feature(s) ")?;
                write!(f, "{}", missing.join(", "))
            }
            Self::InvalidInput { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::PredictionFailure(msg) => write!(f, "prediction failed: {msg}"),
        }
    }
}

impl Error for PredictorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModelUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProvisionError> for PredictorError {
    fn from(value: ProvisionError) -> Self {
        Self::ModelUnavailable(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_lists_every_missing_feature() {
        let err = PredictorError::SchemaMismatch {
            missing: vec!["T10".into(), "RH_10".into()],
        };
        assert_eq!(
            err.to_string(),
            "schema mismatch: model expects unknown feature(s) T10, RH_10"
        );
    }

    #[test]
    fn model_unavailable_keeps_the_provisioning_cause() {
        let err: PredictorError = ProvisionError::FetchFailure {
            url: "http://localhost/model.json".into(),
            reason: "connection refused".into(),
        }
        .into();

        assert!(err.to_string().starts_with("model unavailable: failed to fetch"));
        assert!(err.source().is_some());
    }
}
