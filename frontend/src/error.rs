use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields before submitting.")]
    MissingFields(Vec<&'static str>),

    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Failures before a server reply could be read. None of these reach the user.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("no window")]
    NoWindow,

    #[error("request setup failed: {0}")]
    Request(String),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("reading response body failed: {0}")]
    Body(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
