//! Metrics collection.
//!
//! # Metrics
//! - `push_attempts_total` (counter): submissions issued, including retries
//! - `push_retries_total` (counter): retry attempts scheduled
//! - `push_documents_delivered_total` (counter): terminal successes
//! - `push_documents_failed_total` (counter): terminal failures
//!
//! # Design Decisions
//! - Counters only; the delivery path has no latency worth a histogram that
//!   the transport doesn't already expose
//! - No recorder is installed here; without one these are no-ops

/// Record one submission issued to the push service.
pub fn record_push_attempt() {
    metrics::counter!("push_attempts_total").increment(1);
}

/// Record one retry scheduled after a transient failure.
pub fn record_push_retry() {
    metrics::counter!("push_retries_total").increment(1);
}

/// Record a document reaching terminal success.
pub fn record_push_delivered() {
    metrics::counter!("push_documents_delivered_total").increment(1);
}

/// Record a document reaching terminal failure.
pub fn record_push_failed() {
    metrics::counter!("push_documents_failed_total").increment(1);
}
