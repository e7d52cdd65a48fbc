//! Push delivery subsystem.
//!
//! # Data Flow
//! ```text
//! caller document
//!     → document.rs (id + opaque payload)
//!     → request.rs (URL, query, headers, body descriptor)
//!     → client.rs (PUT over HTTPS, retry loop on failure)
//!     → terminal success or terminal error
//! ```
//!
//! # Design Decisions
//! - The request descriptor is computed once per submission and reused
//!   verbatim by every retry
//! - Both calling conventions share one retry engine; they differ only in
//!   which responses count as terminal success
//! - Retries are strictly sequential per document; the client holds no
//!   per-document state

pub mod client;
pub mod document;
pub mod error;
pub mod request;

pub use client::{PushClient, PushResponse};
pub use document::Document;
pub use error::{PushError, PushResult};
