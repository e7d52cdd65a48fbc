//! Request construction.
//!
//! # Responsibilities
//! - Build the documents endpoint URL from the push configuration
//! - Build the bearer Authorization header value
//! - Produce the per-document request descriptor (URL, query, body)
//!
//! # Design Decisions
//! - Construction is a pure function of config + document; anything that
//!   could fail for a given config is caught by validation at client
//!   construction, so per-document descriptors are built once and reused
//!   verbatim by every retry

use reqwest::header::{HeaderValue, InvalidHeaderValue};
use url::Url;

use crate::config::schema::PushConfig;
use crate::push::document::Document;
use crate::push::error::PushError;

/// Media type sent with every push request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Build the documents endpoint URL for a push configuration.
///
/// A bare host is addressed over HTTPS; a server value carrying an explicit
/// scheme is used as-is.
pub fn documents_endpoint(config: &PushConfig) -> Result<Url, url::ParseError> {
    let base = if config.server.contains("://") {
        config.server.trim_end_matches('/').to_string()
    } else {
        format!("https://{}", config.server)
    };

    Url::parse(&format!(
        "{}/{}/organizations/{}/sources/{}/documents",
        base, config.api_version, config.organization_id, config.source_id
    ))
}

/// Build the `Authorization: Bearer {key}` header value.
pub fn bearer_header(push_api_key: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", push_api_key))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Immutable descriptor for one document submission.
///
/// Computed once per submit call; retries reissue it unchanged.
#[derive(Debug, Clone)]
pub struct PushRequest {
    /// Target URL including the `documentId` query parameter.
    pub url: Url,

    /// Bearer credential header value.
    pub authorization: HeaderValue,

    /// JSON-serialized document.
    pub body: String,
}

impl PushRequest {
    /// Build the descriptor for a document against a prepared endpoint.
    pub fn new(
        endpoint: &Url,
        authorization: &HeaderValue,
        document: &Document,
    ) -> Result<Self, PushError> {
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .append_pair("documentId", &document.document_id);

        Ok(Self {
            url,
            authorization: authorization.clone(),
            body: serde_json::to_string(document)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> PushConfig {
        PushConfig {
            organization_id: "my-org".to_string(),
            source_id: "my-source".to_string(),
            push_api_key: "xx-secret".to_string(),
            ..PushConfig::default()
        }
    }

    #[test]
    fn test_endpoint_defaults_to_https() {
        let url = documents_endpoint(&test_config()).expect("valid endpoint");
        assert_eq!(
            url.as_str(),
            "https://push.cloud.coveo.com/v1/organizations/my-org/sources/my-source/documents"
        );
    }

    #[test]
    fn test_endpoint_keeps_explicit_scheme() {
        let config = PushConfig {
            server: "http://127.0.0.1:8080".to_string(),
            ..test_config()
        };
        let url = documents_endpoint(&config).expect("valid endpoint");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/v1/organizations/my-org/sources/my-source/documents"
        );
    }

    #[test]
    fn test_descriptor_shape() {
        let config = test_config();
        let endpoint = documents_endpoint(&config).expect("valid endpoint");
        let authorization = bearer_header(&config.push_api_key).expect("valid key");
        let document = Document::new("doc1").with_field("data", "x");

        let request = PushRequest::new(&endpoint, &authorization, &document).expect("descriptor");

        assert_eq!(
            request.url.as_str(),
            "https://push.cloud.coveo.com/v1/organizations/my-org/sources/my-source/documents?documentId=doc1"
        );
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&request.body).expect("json body"),
            json!({"documentId": "doc1", "data": "x"})
        );
    }

    #[test]
    fn test_descriptor_identical_across_builds() {
        // Retries rebuild nothing; but even a rebuild from the same document
        // must come out identical.
        let config = test_config();
        let endpoint = documents_endpoint(&config).expect("valid endpoint");
        let authorization = bearer_header(&config.push_api_key).expect("valid key");
        let document = Document::new("doc1").with_field("data", "x");

        let a = PushRequest::new(&endpoint, &authorization, &document).expect("descriptor");
        let b = PushRequest::new(&endpoint, &authorization, &document).expect("descriptor");
        assert_eq!(a.url, b.url);
        assert_eq!(a.body, b.body);
    }

    #[test]
    fn test_document_id_is_percent_encoded() {
        let config = test_config();
        let endpoint = documents_endpoint(&config).expect("valid endpoint");
        let authorization = bearer_header(&config.push_api_key).expect("valid key");
        let document = Document::new("https://example.com/page?a=1");

        let request = PushRequest::new(&endpoint, &authorization, &document).expect("descriptor");
        let query = request.url.query().expect("query present");
        assert!(query.starts_with("documentId="));
        assert!(!query.contains("?a"));
    }
}
