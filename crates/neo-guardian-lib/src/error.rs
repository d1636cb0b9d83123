use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the NEO Guardian library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The classifier artifact could not be located, read, or validated.
    ///
    /// This is a startup condition: no assessor exists until it is resolved.
    #[error("model unavailable at {path}: {reason}")]
    ModelUnavailable { path: PathBuf, reason: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the model artifact")]
    ProjectDirsUnavailable,

    /// Raised when the classifier's feature columns do not line up with the
    /// feature contract.
    #[error("feature vector does not match model columns: {message}")]
    FeatureMismatch { message: String },

    /// Raised when the classifier produced a label or probability outside its
    /// documented range.
    #[error("classifier returned invalid output: {message}")]
    InvalidClassifierOutput { message: String },

    /// Raised by the input-collection layer for out-of-range observations.
    #[error("invalid observation field {field}: {message}")]
    InvalidObservation { field: &'static str, message: String },

    /// Raised when a batch observation file cannot be interpreted.
    #[error("invalid observation record at row {row}: {message}")]
    ObservationRecord { row: u64, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader/writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn model_unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::ModelUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
