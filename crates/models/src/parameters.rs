/// The four Lotka-Volterra coefficients.
///
/// Parameters are fixed for the duration of a simulation and passed by value;
/// a grid search builds a fresh set for every grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Parameters {
    /// Prey growth rate in the absence of predators.
    pub alpha: f64,

    /// Prey loss per predator encounter (hunting efficiency).
    pub beta: f64,

    /// Predator growth per prey consumed.
    pub delta: f64,

    /// Predator death rate in the absence of prey.
    pub eta: f64,
}

impl Parameters {
    /// Creates a parameter set.
    #[must_use]
    pub fn new(alpha: f64, beta: f64, delta: f64, eta: f64) -> Self {
        Self {
            alpha,
            beta,
            delta,
            eta,
        }
    }
}

/// Coefficients in `[alpha, beta, delta, eta]` order.
impl From<[f64; 4]> for Parameters {
    fn from([alpha, beta, delta, eta]: [f64; 4]) -> Self {
        Self::new(alpha, beta, delta, eta)
    }
}

impl From<Parameters> for [f64; 4] {
    fn from(parameters: Parameters) -> Self {
        let Parameters {
            alpha,
            beta,
            delta,
            eta,
        } = parameters;
        [alpha, beta, delta, eta]
    }
}
