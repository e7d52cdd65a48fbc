//! Push delivery error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while pushing a document.
#[derive(Debug, Error)]
pub enum PushError {
    /// The document is not a JSON object.
    #[error("document must be a JSON object")]
    InvalidDocument,

    /// The document lacks a usable identifier.
    #[error("document is missing a non-empty documentId")]
    MissingDocumentId,

    /// The document could not be serialized as a request body.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Network/connection-level failure from the HTTP layer. Retriable.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response was received but its status code was not 202 Accepted.
    /// Retriable.
    #[error("push rejected with status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// Retries were exhausted; carries the last transient failure.
    #[error("push failed after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<PushError>,
    },
}

/// Result type for push operations.
pub type PushResult<T> = Result<T, PushError>;
