use thiserror::Error;

/// Failure taxonomy for a single check.
///
/// `InvalidUrl` and `Fetch` are terminal for the request. `Classification`
/// is surfaced distinctly so the boundary layer can decide whether to abort
/// or degrade to neutral labels. Extraction never fails outward.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Classification failed: {0}")]
    Classification(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;
