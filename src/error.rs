use thiserror::Error;

/// Errors produced by the kaloriku library.
///
/// `InvalidImage` is recoverable (the user picks another file). The others
/// indicate a broken deployment: `ModelUnavailable` and `DataIntegrity` are
/// fatal at startup, and `UnknownLabel` should be impossible once startup
/// validation has passed.
#[derive(Debug, Error)]
pub enum Error {
    /// The uploaded bytes are not a well-formed JPEG or PNG image.
    #[error("file could not be processed as an image: {0}")]
    InvalidImage(String),

    /// The model artifact could not be read or parsed.
    #[error("model artifact '{path}' could not be loaded: {reason}")]
    ModelUnavailable { path: String, reason: String },

    /// The model, label list, and calorie table disagree with each other.
    #[error("reference data mismatch: {0}")]
    DataIntegrity(String),

    /// The classifier produced a label the calorie table does not know.
    #[error("no calorie entry for label '{0}'")]
    UnknownLabel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
