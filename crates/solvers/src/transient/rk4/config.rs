use thiserror::Error;

use crate::float::always_advances;

/// Configuration for the RK4 solver: a fixed step size and an end time.
///
/// The clock starts at zero and the solver keeps stepping while the clock is
/// at or before `end`, advancing it by `dt` after every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    dt: f64,
    end: f64,
}

/// Errors that can occur when validating an RK4 solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("end time must be finite, got {0}")]
    End(f64),

    #[error("step size {dt} is too small to advance the clock to {end}")]
    StepTooSmall { dt: f64, end: f64 },
}

impl Config {
    /// Creates a new config with a validated step size and end time.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive, if `end` is not
    /// finite, or if `dt` is so small relative to `end` that adding it could
    /// leave the clock stuck before `end`.
    pub fn new(dt: f64, end: f64) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::StepSize(dt));
        }
        if !end.is_finite() {
            return Err(ConfigError::End(end));
        }
        if !always_advances(dt, end) {
            return Err(ConfigError::StepTooSmall { dt, end });
        }

        Ok(Self { dt, end })
    }

    /// Returns the fixed step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the end time.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }
}
