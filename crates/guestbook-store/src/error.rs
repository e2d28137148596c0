use reqwest::StatusCode;
use thiserror::Error;

/// Failures at the remote-store boundary. Nothing here is retried; the
/// message of whichever variant occurred is what ends up in the client's
/// error body.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed: DNS, connect, TLS, or a dropped body.
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store rejected request ({status}): {body}")]
    Rejected { status: StatusCode, body: String },

    /// A 2xx answer whose body does not parse as entry rows.
    #[error("store returned malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}
