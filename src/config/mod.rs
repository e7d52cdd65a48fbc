//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → handed to PushClient at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the client never mutates it
//! - All fields have defaults except the three identity/credential fields
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ClientConfig;
pub use schema::ObservabilityConfig;
pub use schema::PushConfig;
pub use schema::RetryConfig;
pub use validation::ValidationError;
