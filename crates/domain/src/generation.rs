//! Generation requests and the records emitted back to the host.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::common::serialize_iso_millis;
use crate::error::DomainError;
use crate::operation::Operation;
use crate::value_objects::{Count, DecimalPlaces, IntegerRange, Numeric, ValueRange};

/// Source tag stamped on every single-value result.
pub const RANDOM_ORG_SOURCE: &str = "random.org";

// =============================================================================
// Requests
// =============================================================================

/// A fully validated request for one item.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    /// `count` integers in `range` (JSON-RPC `generateIntegers`)
    Integers { range: ValueRange, count: Count },
    /// `count` fractions rescaled into `range` (JSON-RPC `generateDecimalFractions`)
    Decimals {
        range: ValueRange,
        count: Count,
        decimal_places: DecimalPlaces,
    },
    /// One integer in `range` from the legacy plain-text endpoint
    Trng { range: IntegerRange },
}

impl GenerationRequest {
    /// # Errors
    ///
    /// Fails if the bounds are non-integral, not finite, or inverted.
    pub fn integers(min: f64, max: f64, count: Count) -> Result<Self, DomainError> {
        Ok(Self::Integers {
            range: ValueRange::integral(min, max)?,
            count,
        })
    }

    /// # Errors
    ///
    /// Fails if the bounds are not finite or inverted.
    pub fn decimals(
        min: f64,
        max: f64,
        count: Count,
        decimal_places: DecimalPlaces,
    ) -> Result<Self, DomainError> {
        Ok(Self::Decimals {
            range: ValueRange::new(min, max)?,
            count,
            decimal_places,
        })
    }

    /// # Errors
    ///
    /// Fails if the bounds are non-integral, outside 32 bits, or inverted.
    pub fn trng(min: f64, max: f64) -> Result<Self, DomainError> {
        Ok(Self::Trng {
            range: IntegerRange::new(min, max)?,
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Integers { .. } => Operation::Integer,
            Self::Decimals { .. } => Operation::Decimal,
            Self::Trng { .. } => Operation::Trng,
        }
    }

    /// How many values a successful call yields.
    pub fn count(&self) -> u32 {
        match self {
            Self::Integers { count, .. } | Self::Decimals { count, .. } => count.get(),
            Self::Trng { .. } => 1,
        }
    }

    /// Turn raw upstream values into emitted values.
    ///
    /// Decimal fractions are rescaled into the requested range; integers
    /// pass through unchanged.
    pub fn transform(&self, raw: Vec<Numeric>) -> Vec<Numeric> {
        match self {
            Self::Decimals { range, .. } => raw
                .into_iter()
                .map(|v| Numeric::new(range.rescale(v.value())))
                .collect(),
            Self::Integers { .. } | Self::Trng { .. } => raw,
        }
    }
}

// =============================================================================
// Results
// =============================================================================

/// Result of one range-generator item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeResult {
    pub operation: Operation,
    pub count: u32,
    pub min: Numeric,
    pub max: Numeric,
    pub values: Vec<Numeric>,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u8>,
}

impl RangeResult {
    /// Build the record for a batch request from already-transformed values.
    ///
    /// Returns `None` for a single-value request, which has its own record.
    pub fn from_request(
        request: &GenerationRequest,
        values: Vec<Numeric>,
        timestamp: DateTime<Utc>,
    ) -> Option<Self> {
        let (range, count, decimal_places) = match request {
            GenerationRequest::Integers { range, count } => (range, count, None),
            GenerationRequest::Decimals {
                range,
                count,
                decimal_places,
            } => (range, count, Some(decimal_places.get())),
            GenerationRequest::Trng { .. } => return None,
        };
        Some(Self {
            operation: request.operation(),
            count: count.get(),
            min: range.min(),
            max: range.max(),
            values,
            timestamp,
            decimal_places,
        })
    }
}

/// Result of one single-value-generator item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleValueResult {
    pub value: i64,
    pub min: i64,
    pub max: i64,
    pub source: &'static str,
    pub url: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl SingleValueResult {
    pub fn new(value: i64, range: IntegerRange, url: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            value,
            min: range.min(),
            max: range.max(),
            source: RANDOM_ORG_SOURCE,
            url,
            timestamp,
        }
    }
}

/// Emitted in place of a result when the host continues past failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// The JSON payload of one emitted item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemOutput {
    Range(RangeResult),
    SingleValue(SingleValueResult),
    Error(ErrorRecord),
}

impl ItemOutput {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// One item in the host's output list: `{ "json": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeItem {
    pub json: ItemOutput,
}

impl From<ItemOutput> for NodeItem {
    fn from(json: ItemOutput) -> Self {
        Self { json }
    }
}
