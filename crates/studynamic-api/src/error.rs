use thiserror::Error;

/// Backend client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// No bearer token available; the caller must re-authenticate.
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
