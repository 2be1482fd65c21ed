//! Domain types for the Random.org generator nodes.
//!
//! - `operation` - which kind of value a node produces
//! - `value_objects` - validated ranges, counts, and host numbers
//! - `generation` - per-item requests and the records emitted to the host
//! - `error` - validation failures

pub mod common;
pub mod error;
pub mod generation;
pub mod operation;
pub mod value_objects;

pub use error::DomainError;
pub use generation::{
    ErrorRecord, GenerationRequest, ItemOutput, NodeItem, RangeResult, SingleValueResult,
    RANDOM_ORG_SOURCE,
};
pub use operation::Operation;
pub use value_objects::{
    Count, DecimalPlaces, IntegerRange, Numeric, ValueRange, INTEGER_RANGE_MAX, INTEGER_RANGE_MIN,
};
