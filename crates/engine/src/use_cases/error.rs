//! Errors raised while processing items.

use randorg_domain::DomainError;
use thiserror::Error;

use crate::infrastructure::ports::{HttpError, ParameterError};

/// Why a single item could not be turned into a result.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The JSON-RPC response carried an `error` object.
    #[error("Random.org API Error: {message}")]
    Api { code: Option<i64>, message: String },

    /// The operation selector named something this node cannot do.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Parameters failed local validation (range, count, decimal places).
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// A parameter was missing or had the wrong type.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// The endpoint answered, but not with anything usable.
    #[error("Invalid response from Random.org: {0}")]
    BadUpstreamResponse(String),

    /// The configured endpoint could not be turned into a request URL.
    #[error("Invalid Random.org endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    /// The HTTP call itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl GenerationError {
    /// True for failures detected before any network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOperation(_)
                | Self::Validation(_)
                | Self::Parameter(_)
                | Self::InvalidEndpoint { .. }
        )
    }
}

/// An item failure attributed to a node and item, as reported to the host.
#[derive(Debug, Error)]
#[error("{node}: {source} [item {item_index}]")]
pub struct NodeOperationError {
    pub node: String,
    pub item_index: usize,
    #[source]
    pub source: GenerationError,
}

impl NodeOperationError {
    pub fn new(node: impl Into<String>, item_index: usize, source: GenerationError) -> Self {
        Self {
            node: node.into(),
            item_index,
            source,
        }
    }
}
