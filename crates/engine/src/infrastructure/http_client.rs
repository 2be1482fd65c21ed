//! reqwest-backed HTTP client
//!
//! Implements the HttpClient port used to reach Random.org.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::infrastructure::ports::{HttpClient, HttpError};

const USER_AGENT: &str = concat!("randorg/", env!("CARGO_PKG_VERSION"));

/// HTTP client with an explicit request timeout.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Build a client whose every request gives up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Map non-2xx responses to `HttpError::Status`, keeping the body text.
    async fn ensure_success(url: &str, response: Response) -> Result<Response, HttpError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(HttpError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }
}

fn send_error(url: &str, error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout {
            url: url.to_string(),
        }
    } else {
        HttpError::request_failed(url, error)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        tracing::debug!(url, "POST");

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| send_error(url, e))?;

        let response = Self::ensure_success(url, response).await?;

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                send_error(url, e)
            } else {
                HttpError::decode(url, e)
            }
        })
    }

    async fn get_text(&self, url: &str, accept: &str) -> Result<String, HttpError> {
        tracing::debug!(url, accept, "GET");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| send_error(url, e))?;

        let response = Self::ensure_success(url, response).await?;

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                send_error(url, e)
            } else {
                HttpError::decode(url, e)
            }
        })
    }
}
