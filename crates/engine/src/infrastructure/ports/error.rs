//! Error types for port operations.

/// Failures resolving a node parameter for an item.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// Neither the item, the node, nor the description supplies a value.
    #[error("Could not get parameter \"{name}\" for item {item_index}")]
    Missing { name: String, item_index: usize },

    /// The value exists but has the wrong JSON type.
    #[error("Parameter \"{name}\" must be a {expected}, got {actual}")]
    WrongType {
        name: String,
        expected: &'static str,
        actual: String,
    },

    /// The host asked for an item it never supplied.
    #[error("Item index {item_index} is out of range ({item_count} items)")]
    ItemOutOfRange { item_index: usize, item_count: usize },
}

impl ParameterError {
    pub fn missing(name: impl Into<String>, item_index: usize) -> Self {
        Self::Missing {
            name: name.into(),
            item_index,
        }
    }

    pub fn wrong_type(
        name: impl Into<String>,
        expected: &'static str,
        actual: &serde_json::Value,
    ) -> Self {
        Self::WrongType {
            name: name.into(),
            expected,
            actual: actual.to_string(),
        }
    }
}

/// HTTP transport failures, one variant per way a call can go wrong.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HttpError {
    /// The client could not be constructed (TLS backend, bad options).
    #[error("HTTP client could not be built: {0}")]
    Client(String),

    /// Connection or protocol failure before a response arrived.
    #[error("Request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    /// No complete response within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// Non-2xx status; `body` holds whatever text the server sent.
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The body could not be read or decoded as expected.
    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl HttpError {
    pub fn request_failed(url: impl Into<String>, message: impl ToString) -> Self {
        Self::RequestFailed {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
