//! Environment-backed settings for the Random.org adapters.

use std::time::Duration;
use url::Url;

use crate::infrastructure::random_org::{DEFAULT_INTEGERS_URL, DEFAULT_JSON_RPC_URL};

/// Default request timeout; the host transport's own default is not relied on.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_JSON_RPC_URL: &str = "RANDOM_ORG_JSON_RPC_URL";
pub const ENV_INTEGERS_URL: &str = "RANDOM_ORG_INTEGERS_URL";
pub const ENV_API_KEY: &str = "RANDOM_ORG_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "RANDOM_ORG_TIMEOUT_SECS";
pub const ENV_NODE_NAME: &str = "RANDOM_ORG_NODE_NAME";

/// Endpoints, credentials, and timeout for talking to Random.org.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomOrgSettings {
    pub json_rpc_url: String,
    pub integers_url: String,
    /// Sent as `apiKey`; `None` serializes as `null` (free tier).
    pub api_key: Option<String>,
    pub timeout: Duration,
    /// Overrides the node's display name in error reports.
    pub node_name: Option<String>,
}

impl Default for RandomOrgSettings {
    fn default() -> Self {
        Self {
            json_rpc_url: DEFAULT_JSON_RPC_URL.to_string(),
            integers_url: DEFAULT_INTEGERS_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            node_name: None,
        }
    }
}

impl RandomOrgSettings {
    /// Load settings from the process environment.
    ///
    /// Uses the `RANDOM_ORG_*` variables, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let json_rpc_url = parse_url(ENV_JSON_RPC_URL, lookup(ENV_JSON_RPC_URL))
            .unwrap_or(defaults.json_rpc_url);
        let integers_url = parse_url(ENV_INTEGERS_URL, lookup(ENV_INTEGERS_URL))
            .unwrap_or(defaults.integers_url);
        let api_key = non_empty(lookup(ENV_API_KEY));
        let node_name = non_empty(lookup(ENV_NODE_NAME));

        let timeout = match non_empty(lookup(ENV_TIMEOUT_SECS)) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        variable = ENV_TIMEOUT_SECS,
                        value = %raw,
                        default_secs = DEFAULT_TIMEOUT_SECS,
                        "Invalid timeout, using default"
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            json_rpc_url,
            integers_url,
            api_key,
            timeout,
            node_name,
        }
    }
}

fn parse_url(variable: &'static str, raw: Option<String>) -> Option<String> {
    let raw = non_empty(raw)?;
    match Url::parse(&raw) {
        Ok(url) => Some(url.into()),
        Err(e) => {
            tracing::warn!(variable, value = %raw, error = %e, "Invalid URL, using default");
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
