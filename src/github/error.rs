use thiserror::Error;

/// Failures reported by the source-control host.
///
/// Every variant is fatal to a run; nothing in the pipeline retries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The token was missing, invalid or lacks the required scope (401/403).
    #[error("{operation} failed: authentication rejected: {message}")]
    Authentication { operation: String, message: String },

    /// The organization, repository or issue does not exist (404).
    #[error("{operation} failed: not found: {message}")]
    NotFound { operation: String, message: String },

    /// The request never produced an HTTP response.
    #[error("{operation} failed: network error: {message}")]
    Network { operation: String, message: String },

    /// Any other error response from the API.
    #[error("{operation} failed: GitHub API error: {message}")]
    Api { operation: String, message: String },
}

impl HostError {
    /// True for errors caused by credentials rather than the request itself
    pub fn is_authentication(&self) -> bool {
        matches!(self, HostError::Authentication { .. })
    }
}
