//! Push delivery client with bounded retry.
//!
//! # Responsibilities
//! - Hold immutable identity/config and retry policy
//! - Submit one document per call over HTTPS PUT
//! - Retry transient failures with a fixed delay, bounded attempt count
//! - Surface the terminal outcome to the caller exactly once
//!
//! # Design Decisions
//! - One retry engine serves both calling conventions; they differ only in
//!   which responses count as terminal success
//! - Attempt counting starts at 0 and retries while `count <= max_attempts`
//!   after incrementing, so a policy of N allows 1 + N total submissions
//! - The outcome settles at the terminal state, never at an intermediate
//!   failure that still has retries ahead of it

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

use crate::config::loader::ConfigError;
use crate::config::schema::{PushConfig, RetryConfig};
use crate::config::validation::validate_config;
use crate::observability::metrics;
use crate::push::document::Document;
use crate::push::error::{PushError, PushResult};
use crate::push::request::{self, PushRequest, CONTENT_TYPE_JSON};

/// An HTTP response received from the push service.
#[derive(Debug, Clone)]
pub struct PushResponse {
    /// Status code of the response.
    pub status: StatusCode,

    /// Response body text.
    pub body: String,
}

/// Which responses terminate the retry loop as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeliveryMode {
    /// Only 202 Accepted counts; other statuses are retried.
    Accepted,
    /// Any response counts; interpretation is left to the caller and only
    /// transport errors are retried.
    AnyStatus,
}

impl DeliveryMode {
    fn is_success(self, status: StatusCode) -> bool {
        match self {
            DeliveryMode::Accepted => status == StatusCode::ACCEPTED,
            DeliveryMode::AnyStatus => true,
        }
    }
}

/// Client for pushing documents to a remote indexing API.
///
/// Cheap to clone and safe to share across concurrent submits; holds no
/// per-document state.
#[derive(Clone)]
pub struct PushClient {
    retry: RetryConfig,
    endpoint: Url,
    authorization: reqwest::header::HeaderValue,
    http: reqwest::Client,
}

impl PushClient {
    /// Create a new push client.
    ///
    /// Fails with [`ConfigError::Validation`] if any identity/credential
    /// field is missing or the server value cannot form an endpoint URL.
    /// All problems are reported together.
    pub fn new(config: PushConfig, retry: RetryConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        // Validation vouched for both of these.
        let endpoint = request::documents_endpoint(&config).map_err(|_| {
            ConfigError::Validation(vec![crate::config::ValidationError::InvalidServer(
                config.server.clone(),
            )])
        })?;
        let authorization = request::bearer_header(&config.push_api_key).map_err(|_| {
            ConfigError::Validation(vec![crate::config::ValidationError::InvalidPushApiKey])
        })?;

        Ok(Self {
            retry,
            endpoint,
            authorization,
            http: reqwest::Client::new(),
        })
    }

    /// Push one document, requiring 202 Accepted from the service.
    ///
    /// Transport errors and unexpected statuses are retried per the retry
    /// policy. Resolves with a human-readable success message, or with the
    /// terminal error once no further attempt is allowed.
    pub async fn push_document(&self, document: &Document) -> PushResult<String> {
        self.deliver(document, DeliveryMode::Accepted).await?;
        Ok(format!("Pushed document : {}", document.document_id))
    }

    /// Push one document, forwarding any transport-error-free response.
    ///
    /// The client does not gate on status code here; interpreting the
    /// response is left to the caller. Only transport errors are retried.
    pub async fn push_document_response(&self, document: &Document) -> PushResult<PushResponse> {
        self.deliver(document, DeliveryMode::AnyStatus).await
    }

    /// Push one document in the background, invoking `on_done` exactly once
    /// with the terminal outcome.
    ///
    /// Same semantics as [`PushClient::push_document_response`]. Must be
    /// called from within a tokio runtime.
    pub fn push_document_with<F>(&self, document: Document, on_done: F) -> tokio::task::JoinHandle<()>
    where
        F: FnOnce(PushResult<PushResponse>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let outcome = client.deliver(&document, DeliveryMode::AnyStatus).await;
            on_done(outcome);
        })
    }

    /// Shared retry engine.
    ///
    /// The request descriptor is computed once from the original document
    /// and reissued unchanged by every retry.
    async fn deliver(&self, document: &Document, mode: DeliveryMode) -> PushResult<PushResponse> {
        let request = PushRequest::new(&self.endpoint, &self.authorization, document)?;
        let mut retry_count: u32 = 0;

        loop {
            metrics::record_push_attempt();

            let failure = match self.send_request(&request).await {
                Ok(response) if mode.is_success(response.status) => {
                    tracing::info!(
                        document_id = %document.document_id,
                        status = %response.status,
                        "Document pushed"
                    );
                    metrics::record_push_delivered();
                    return Ok(response);
                }
                Ok(response) => PushError::UnexpectedStatus {
                    status: response.status,
                    body: response.body,
                },
                Err(e) => PushError::Transport(e),
            };

            retry_count += 1;

            if !self.retry.enabled {
                metrics::record_push_failed();
                return Err(failure);
            }
            if retry_count > self.retry.max_attempts {
                metrics::record_push_failed();
                return Err(PushError::RetriesExhausted {
                    attempts: retry_count,
                    source: Box::new(failure),
                });
            }

            tracing::warn!(
                document_id = %document.document_id,
                attempt = retry_count,
                max_attempts = self.retry.max_attempts,
                error = %failure,
                "Push attempt failed, retrying after delay"
            );
            metrics::record_push_retry();

            sleep(Duration::from_millis(self.retry.delay_ms)).await;
        }
    }

    /// Issue a single PUT for a prepared descriptor.
    async fn send_request(&self, request: &PushRequest) -> Result<PushResponse, reqwest::Error> {
        let response = self
            .http
            .put(request.url.clone())
            .header(AUTHORIZATION, request.authorization.clone())
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(request.body.clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok(PushResponse { status, body })
    }

    /// Retry policy in effect for this client.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
}

impl std::fmt::Debug for PushClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("retry", &self.retry)
            .finish()
    }
}
