//! Operation selector shared by both generator nodes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// What a node invocation asks Random.org to produce.
///
/// `Integer` and `Decimal` belong to the range generator (JSON-RPC batch API);
/// `Trng` is the single-value generator's only choice (legacy plain-text API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Integer,
    Decimal,
    Trng,
}

impl Operation {
    /// The parameter value the host stores for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Trng => "trng",
        }
    }

    /// JSON-RPC method used for batch operations, `None` for the legacy endpoint.
    pub fn json_rpc_method(&self) -> Option<&'static str> {
        match self {
            Self::Integer => Some("generateIntegers"),
            Self::Decimal => Some("generateDecimalFractions"),
            Self::Trng => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(Self::Integer),
            "decimal" => Ok(Self::Decimal),
            "trng" => Ok(Self::Trng),
            _ => Err(DomainError::parse(format!("Unknown operation: {}", s))),
        }
    }
}
