//! Push Delivery Client
//!
//! A client for pushing JSON documents to a remote indexing API over HTTPS,
//! with bounded automatic retry on transient failure.
//!
//! # Architecture Overview
//!
//! ```text
//!   Document ──▶ push::request (URL, query, headers, body)
//!                      │
//!                      ▼
//!               push::client ──HTTPS PUT──▶ Push API
//!                      │
//!       transport error / unexpected status
//!                      │
//!                      ▼
//!        retry loop (fixed delay, bounded attempts)
//!                      │
//!                      ▼
//!        terminal Success / Exhausted surfaced to caller
//! ```
//!
//! Cross-cutting concerns live in [`config`] (schema, validation, loading)
//! and [`observability`] (logging, metrics).

pub mod config;
pub mod observability;
pub mod push;

pub use config::schema::{ClientConfig, PushConfig, RetryConfig};
pub use push::client::{PushClient, PushResponse};
pub use push::document::Document;
pub use push::error::{PushError, PushResult};
