//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for binary entry points
//! - Respect `RUST_LOG` when set, falling back to the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `level` is used when `RUST_LOG` is not set. Call once per process;
/// library code never calls this.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("push_client={level}"))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
