//! Use cases - the per-item pipelines behind each node.

mod error;
mod range_generator;
mod single_value;

pub use error::{GenerationError, NodeOperationError};
pub use range_generator::RangeGenerator;
pub use single_value::SingleValueGenerator;
