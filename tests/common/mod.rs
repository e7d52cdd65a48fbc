//! Shared utilities for integration testing against a mock push service.

use push_client::{Document, PushConfig, RetryConfig};

/// Documents endpoint path for the test identity below.
pub const DOCUMENTS_PATH: &str = "/v1/organizations/my-org/sources/my-source/documents";

/// Push configuration pointing at a local mock server.
pub fn test_push_config(server_uri: &str) -> PushConfig {
    PushConfig {
        organization_id: "my-org".to_string(),
        source_id: "my-source".to_string(),
        push_api_key: "xx-secret".to_string(),
        server: server_uri.to_string(),
        ..PushConfig::default()
    }
}

/// Retry policy with a short delay so tests stay fast.
pub fn fast_retry(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_attempts,
        delay_ms: 50,
    }
}

/// The document used throughout the delivery tests.
pub fn sample_document() -> Document {
    Document::new("doc1").with_field("data", "x")
}

/// An address nothing is listening on, for transport-error tests.
pub fn unreachable_server() -> String {
    // Bind to an ephemeral port, then free it again.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
