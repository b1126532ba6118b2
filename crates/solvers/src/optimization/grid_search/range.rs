use std::iter::FusedIterator;

use thiserror::Error;

use crate::float::always_advances;

/// An inclusive, evenly stepped range of values for one search variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRange {
    min: f64,
    max: f64,
    step: f64,
}

/// Errors that can occur when validating a search range.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("range bounds and step must be finite")]
    NonFinite,

    #[error("step must be positive, got {0}")]
    Step(f64),

    #[error("min ({min}) must not exceed max ({max})")]
    Order { min: f64, max: f64 },

    #[error("step {step} is too small to advance through the range")]
    StepTooSmall { step: f64 },
}

impl SearchRange {
    /// Creates a new range with validated bounds and step.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite, if `step` is not positive,
    /// if `min > max`, or if `step` is too small to change every value in the
    /// range when added to it.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(RangeError::NonFinite);
        }
        if step <= 0.0 {
            return Err(RangeError::Step(step));
        }
        if min > max {
            return Err(RangeError::Order { min, max });
        }
        if !always_advances(step, min.abs().max(max.abs())) {
            return Err(RangeError::StepTooSmall { step });
        }

        Ok(Self { min, max, step })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the step between values.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns an iterator over the values in the range.
    ///
    /// Values are produced by repeatedly adding `step` to `min` and stop once
    /// the accumulated value exceeds `max`. Accumulated rounding decides
    /// whether a value landing near `max` is included.
    #[must_use]
    pub fn values(&self) -> Values {
        Values {
            next: self.min,
            max: self.max,
            step: self.step,
        }
    }

    /// Returns the number of values in the range.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values().count()
    }
}

/// Iterator over the values of a [`SearchRange`].
#[derive(Debug, Clone)]
pub struct Values {
    next: f64,
    max: f64,
    step: f64,
}

impl Iterator for Values {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.max {
            return None;
        }
        let value = self.next;
        self.next += self.step;
        Some(value)
    }
}

impl FusedIterator for Values {}
