//! Value objects - validated parameter types
//!
//! Each type enforces its invariant in its constructor, so a request built
//! from them never needs re-checking downstream.

mod batch;
mod numeric;
mod range;

pub use batch::{Count, DecimalPlaces};
pub use numeric::{Numeric, MAX_SAFE_INTEGER};
pub use range::{IntegerRange, ValueRange, INTEGER_RANGE_MAX, INTEGER_RANGE_MIN};
