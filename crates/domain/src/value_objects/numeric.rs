//! Host number representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Largest integer a double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A number as the workflow host sees it: an IEEE double.
///
/// Integral values serialize as JSON integers (`5`, not `5.0`) so emitted
/// items look the same as the host would print them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Numeric(f64);

impl Numeric {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// True when the value is finite and has no fractional part.
    pub fn is_integral(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    /// The value as an `i64` when it is integral and exactly representable.
    pub fn as_i64(self) -> Option<i64> {
        if self.is_integral() && self.0.abs() <= MAX_SAFE_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl From<Numeric> for f64 {
    fn from(value: Numeric) -> Self {
        value.0
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_i64() {
            Some(i) => write!(f, "{}", i),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}
