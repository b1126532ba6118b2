//! Reference scenarios for simulation and search.

use crate::{Parameters, Population};

/// Initial population for a single simulation.
pub const SIMULATE_INITIAL: Population = Population {
    prey: 110.0,
    predator: 12.0,
};

/// Coefficients for a single simulation.
pub const SIMULATE_PARAMETERS: Parameters = Parameters {
    alpha: 0.1,
    beta: 0.01,
    delta: 0.001,
    eta: 0.1,
};

/// Step size for a single simulation.
pub const SIMULATE_STEP: f64 = 1e-4;

/// Horizon for a single simulation.
pub const SIMULATE_HORIZON: f64 = 10.0;

/// File a single simulation writes its trajectory to.
pub const SIMULATE_OUTPUT: &str = "lotka_volterra.dat";

/// Initial population for every simulation in a search.
pub const SEARCH_INITIAL: Population = Population {
    prey: 100.0,
    predator: 10.0,
};

/// Step size for every simulation in a search.
pub const SEARCH_STEP: f64 = 0.1;

/// Horizon for every simulation in a search.
pub const SEARCH_HORIZON: f64 = 50.0;

/// `(min, max, step)` swept for each coefficient, in
/// `[alpha, beta, delta, eta]` order.
pub const SEARCH_RANGES: [(f64, f64, f64); 4] = [
    (0.1, 1.0, 0.1),
    (0.001, 0.1, 0.001),
    (0.001, 0.1, 0.001),
    (0.01, 1.0, 0.01),
];
