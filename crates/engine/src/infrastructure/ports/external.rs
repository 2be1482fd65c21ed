//! External service port: the host's HTTP request helper.

use async_trait::async_trait;

use super::error::HttpError;

/// Media type the legacy plain-text endpoint answers with.
pub const TEXT_PLAIN: &str = "text/plain";

/// Outbound HTTP, as the host lends it to a node.
///
/// Implementations apply their own timeout; callers never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST `body` as JSON and decode the response body as JSON.
    async fn post_json(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError>;

    /// GET `url` with the given `Accept` header and return the raw body.
    async fn get_text(&self, url: &str, accept: &str) -> Result<String, HttpError>;
}
