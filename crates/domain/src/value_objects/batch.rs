//! Batch sizing parameters for the JSON-RPC range generator.

use serde::Serialize;

use super::numeric::Numeric;
use crate::error::DomainError;

/// Number of values generated per item (`n` in the JSON-RPC call), 1..=10000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Count(u32);

impl Count {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10_000;
    pub const DEFAULT: u32 = 1;

    /// Create a count from a host number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a non-integral value and
    /// `DomainError::OutOfBounds` outside `1..=10000`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        let n = integral_in_bounds("count", value, Self::MIN, Self::MAX)?;
        Ok(Self(n))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Decimal places requested from `generateDecimalFractions`, 1..=20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DecimalPlaces(u8);

impl DecimalPlaces {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;
    pub const DEFAULT: u8 = 2;

    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a non-integral value and
    /// `DomainError::OutOfBounds` outside `1..=20`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        let n = integral_in_bounds(
            "decimalPlaces",
            value,
            u32::from(Self::MIN),
            u32::from(Self::MAX),
        )?;
        // Bounded by MAX above
        Ok(Self(n as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for DecimalPlaces {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

fn integral_in_bounds(
    field: &'static str,
    value: f64,
    min: u32,
    max: u32,
) -> Result<u32, DomainError> {
    let Some(n) = Numeric::new(value).as_i64() else {
        return Err(DomainError::validation(format!(
            "{} must be an integer",
            field
        )));
    };
    if n < i64::from(min) || n > i64::from(max) {
        return Err(DomainError::out_of_bounds(
            field,
            i64::from(min),
            i64::from(max),
            n,
        ));
    }
    Ok(n as u32)
}
