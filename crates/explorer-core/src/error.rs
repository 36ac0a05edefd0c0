// crates/explorer-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while bringing the dataset into memory.
///
/// Filtering and URL state never fail: an empty or missing value simply
/// means "no filter". Only the loader produces errors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[cfg(feature = "fetch")]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The fetch was made by a host (e.g. the browser) and reported failure.
    #[error("request failed: {0}")]
    Request(String),

    #[error("data source answered with HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[cfg(feature = "json")]
    #[error("malformed country payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("country code {0} appears more than once")]
    DuplicateCode(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;
