//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check required identity/credential fields are present and non-empty
//! - Check the server value yields a usable endpoint URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PushConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into a client

use thiserror::Error;

use crate::config::schema::PushConfig;
use crate::push::request;

/// A single semantic problem found in a [`PushConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("push config requires a non-empty organization_id")]
    MissingOrganizationId,

    #[error("push config requires a non-empty source_id")]
    MissingSourceId,

    #[error("push config requires a non-empty push_api_key")]
    MissingPushApiKey,

    #[error("server '{0}' does not form a valid endpoint URL")]
    InvalidServer(String),

    #[error("push_api_key contains characters not allowed in an Authorization header")]
    InvalidPushApiKey,
}

/// Validate a push configuration, collecting every problem found.
pub fn validate_config(config: &PushConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.organization_id.is_empty() {
        errors.push(ValidationError::MissingOrganizationId);
    }
    if config.source_id.is_empty() {
        errors.push(ValidationError::MissingSourceId);
    }
    if config.push_api_key.is_empty() {
        errors.push(ValidationError::MissingPushApiKey);
    }

    // Only meaningful once the fields above are present.
    if errors.is_empty() {
        if request::documents_endpoint(config).is_err() {
            errors.push(ValidationError::InvalidServer(config.server.clone()));
        }
        if request::bearer_header(&config.push_api_key).is_err() {
            errors.push(ValidationError::InvalidPushApiKey);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
