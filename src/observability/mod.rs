//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! push client produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters via the metrics facade)
//!
//! Consumers:
//!     → Log subscriber installed by the host (push-cli installs fmt/env-filter)
//!     → Metrics recorder installed by the host, if any
//! ```
//!
//! # Design Decisions
//! - The library only emits; subscribers and recorders are the host's call,
//!   so tests can capture or silence all diagnostic output
//! - Metrics are cheap (atomic increments) and no-ops without a recorder

pub mod logging;
pub mod metrics;
