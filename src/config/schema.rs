//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the push client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the push client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Push API identity and credentials.
    pub push: PushConfig,

    /// Retry configuration.
    pub retry: RetryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Push API identity and credentials.
///
/// The three identity/credential fields are required and must be non-empty;
/// `server` and `api_version` fall back to the public push endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PushConfig {
    /// Organization the documents belong to.
    pub organization_id: String,

    /// Source the documents are pushed into.
    pub source_id: String,

    /// API key used as the bearer credential.
    pub push_api_key: String,

    /// Push service host. A bare host is addressed over HTTPS; a value
    /// carrying an explicit scheme (e.g. `http://localhost:8080`) is used
    /// as-is.
    pub server: String,

    /// Push API version segment.
    pub api_version: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            organization_id: String::new(),
            source_id: String::new(),
            push_api_key: String::new(),
            server: "push.cloud.coveo.com".to_string(),
            api_version: "v1".to_string(),
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Maximum number of retry attempts after the initial submission.
    pub max_attempts: u32,

    /// Fixed delay between attempts in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 5,
            delay_ms: 3000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
