//! Inclusive value ranges for generation requests
//!
//! Both ranges are valid by construction: finite bounds with `min <= max`.
//! [`IntegerRange`] additionally requires integral bounds inside the signed
//! 32-bit window the single-value node's schema allows.

use serde::Serialize;

use super::numeric::Numeric;
use crate::error::DomainError;

/// Lowest bound the single-value node schema accepts.
pub const INTEGER_RANGE_MIN: i64 = i32::MIN as i64;

/// Highest bound the single-value node schema accepts.
pub const INTEGER_RANGE_MAX: i64 = i32::MAX as i64;

// ============================================================================
// ValueRange
// ============================================================================

/// Inclusive `[min, max]` range for a batch of integers or decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    min: Numeric,
    max: Numeric,
}

impl ValueRange {
    /// Create a range from host numbers.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either bound is not finite,
    /// `min > max`, or the width `max - min` overflows.
    pub fn new(min: f64, max: f64) -> Result<Self, DomainError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::validation("Min and Max must be finite numbers"));
        }
        if min > max {
            return Err(DomainError::validation("Min cannot be greater than Max"));
        }
        if !(max - min).is_finite() {
            return Err(DomainError::validation("Range between Min and Max is too large"));
        }
        Ok(Self {
            min: Numeric::new(min),
            max: Numeric::new(max),
        })
    }

    /// Create a range whose bounds must both be integers.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a bound has a fractional part,
    /// plus everything [`ValueRange::new`] rejects.
    pub fn integral(min: f64, max: f64) -> Result<Self, DomainError> {
        if !Numeric::new(min).is_integral() || !Numeric::new(max).is_integral() {
            return Err(DomainError::validation("Min and Max must be integers"));
        }
        Self::new(min, max)
    }

    pub fn min(&self) -> Numeric {
        self.min
    }

    pub fn max(&self) -> Numeric {
        self.max
    }

    /// Map a fraction in `[0, 1)` onto this range with `min + v * (max - min)`.
    ///
    /// This is an affine rescale, not a resampling: the output inherits the
    /// distribution and granularity of the source fractions.
    pub fn rescale(&self, fraction: f64) -> f64 {
        let min = self.min.value();
        let max = self.max.value();
        min + fraction * (max - min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min.value() && value <= self.max.value()
    }
}

// ============================================================================
// IntegerRange
// ============================================================================

/// Inclusive integer range for the legacy single-value endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegerRange {
    min: i64,
    max: i64,
}

impl IntegerRange {
    /// Create a range from host numbers.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either bound is not a
    /// mathematical integer, `DomainError::OutOfBounds` if a bound lies
    /// outside the signed 32-bit window, and `DomainError::Validation` if
    /// `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, DomainError> {
        let (min, max) = (Numeric::new(min), Numeric::new(max));
        if !min.is_integral() || !max.is_integral() {
            return Err(DomainError::validation("Min and Max must be integers"));
        }
        let window = INTEGER_RANGE_MIN as f64..=INTEGER_RANGE_MAX as f64;
        for (field, value) in [("min", min), ("max", max)] {
            if !window.contains(&value.value()) {
                return Err(DomainError::out_of_bounds(
                    field,
                    INTEGER_RANGE_MIN,
                    INTEGER_RANGE_MAX,
                    value,
                ));
            }
        }
        // Both bounds sit inside the i32 window, so the casts are exact.
        let (min, max) = (min.value() as i64, max.value() as i64);
        if min > max {
            return Err(DomainError::validation("Min cannot be greater than Max"));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_range_accepts_equal_bounds() {
        let range = ValueRange::new(7.5, 7.5).unwrap();
        assert_eq!(range.rescale(0.999), 7.5);
    }

    #[test]
    fn value_range_rejects_inverted_bounds() {
        let err = ValueRange::new(10.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Min cannot be greater than Max")
        );
    }

    #[test]
    fn value_range_rejects_non_finite_bounds() {
        assert!(ValueRange::new(f64::NAN, 1.0).is_err());
        assert!(ValueRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn value_range_rejects_overflowing_width() {
        let err = ValueRange::new(-1e308, 1e308).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Range between Min and Max is too large")
        );
        assert!(ValueRange::new(-1e307, 1e307).is_ok());
    }

    #[test]
    fn integral_value_range_rejects_fractions() {
        assert!(ValueRange::integral(1.5, 10.0).is_err());
        assert!(ValueRange::integral(1.0, 10.0).is_ok());
    }

    #[test]
    fn rescale_keeps_fractions_inside_range() {
        let range = ValueRange::new(-5.0, 15.0).unwrap();
        for fraction in [0.0, 0.1, 0.25, 0.5, 0.75, 0.999_999] {
            let value = range.rescale(fraction);
            assert!(range.contains(value), "{} escaped the range", value);
        }
        assert_eq!(range.rescale(0.0), -5.0);
        assert_eq!(range.rescale(0.5), 5.0);
    }

    #[test]
    fn integer_range_accepts_schema_extremes() {
        let range = IntegerRange::new(INTEGER_RANGE_MIN as f64, INTEGER_RANGE_MAX as f64).unwrap();
        assert_eq!(range.min(), -2_147_483_648);
        assert_eq!(range.max(), 2_147_483_647);
    }

    #[test]
    fn integer_range_rejects_fractional_bounds() {
        let err = IntegerRange::new(1.0, 60.5).unwrap_err();
        assert_eq!(err, DomainError::validation("Min and Max must be integers"));
    }

    #[test]
    fn integer_range_rejects_inverted_bounds() {
        let err = IntegerRange::new(61.0, 60.0).unwrap_err();
        assert_eq!(err, DomainError::validation("Min cannot be greater than Max"));
    }

    #[test]
    fn integer_range_rejects_bounds_outside_32_bits() {
        let err = IntegerRange::new(1.0, 4_294_967_296.0).unwrap_err();
        assert!(matches!(err, DomainError::OutOfBounds { field: "max", .. }));
    }

    #[test]
    fn integrality_is_checked_before_ordering() {
        let err = IntegerRange::new(10.5, 1.0).unwrap_err();
        assert_eq!(err, DomainError::validation("Min and Max must be integers"));
    }

    #[test]
    fn huge_whole_bounds_are_out_of_bounds_not_fractional() {
        let err = IntegerRange::new(1.0, 1e16).unwrap_err();
        assert_eq!(
            err,
            DomainError::out_of_bounds(
                "max",
                INTEGER_RANGE_MIN,
                INTEGER_RANGE_MAX,
                "10000000000000000"
            )
        );
    }
}
