use thiserror::Error;

/// Error surfaced at the catalog seam. Carries a display message only; the
/// view layer maps every variant to the same generic failed-to-load message
/// and logs the detail.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CatalogError {
    message: String,
}

impl CatalogError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Every remote call requires the API access key; without one they all
    /// fail uniformly, before any request is issued.
    pub fn missing_key() -> Self {
        Self::new("No API access key configured. Run `cinescope config set-key` first.")
    }
}
