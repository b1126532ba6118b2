use std::ops::{Add, Div, Mul};

use predprey_core::StepIntegrable;

/// Prey and predator population sizes at one point in time.
///
/// Populations are expected to stay non-negative, but nothing enforces it: a
/// step size that is too coarse for the chosen coefficients can overshoot
/// below zero or diverge to infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Population {
    pub prey: f64,
    pub predator: f64,
}

impl Population {
    /// Creates a population from prey and predator sizes.
    #[must_use]
    pub fn new(prey: f64, predator: f64) -> Self {
        Self { prey, predator }
    }

    /// Returns `true` if both sizes are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.prey.is_finite() && self.predator.is_finite()
    }
}

/// Time derivative of a [`Population`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub prey: f64,
    pub predator: f64,
}

impl Add for Rates {
    type Output = Rates;

    fn add(self, rhs: Rates) -> Rates {
        Rates {
            prey: self.prey + rhs.prey,
            predator: self.predator + rhs.predator,
        }
    }
}

impl Mul<f64> for Rates {
    type Output = Rates;

    fn mul(self, rhs: f64) -> Rates {
        Rates {
            prey: self.prey * rhs,
            predator: self.predator * rhs,
        }
    }
}

impl Div<f64> for Rates {
    type Output = Rates;

    fn div(self, rhs: f64) -> Rates {
        Rates {
            prey: self.prey / rhs,
            predator: self.predator / rhs,
        }
    }
}

impl StepIntegrable<f64> for Population {
    type Derivative = Rates;

    fn step(&self, derivative: Rates, dt: f64) -> Self {
        Population {
            prey: self.prey + derivative.prey * dt,
            predator: self.predator + derivative.predator * dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_each_species_independently() {
        let population = Population::new(100.0, 10.0);
        let rates = Rates {
            prey: -4.0,
            predator: 2.0,
        };

        let next = population.step(rates, 0.5);

        assert_eq!(next, Population::new(98.0, 11.0));
    }

    #[test]
    fn rates_combine_componentwise() {
        let a = Rates {
            prey: 1.0,
            predator: 2.0,
        };
        let b = Rates {
            prey: 3.0,
            predator: 4.0,
        };

        let combined = (a + b * 2.0) / 7.0;

        assert_eq!(
            combined,
            Rates {
                prey: 1.0,
                predator: 10.0 / 7.0
            }
        );
    }

    #[test]
    fn detects_non_finite_sizes() {
        assert!(Population::new(1.0, 0.0).is_finite());
        assert!(!Population::new(f64::INFINITY, 0.0).is_finite());
        assert!(!Population::new(1.0, f64::NAN).is_finite());
    }
}
