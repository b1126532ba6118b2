//! The Lotka-Volterra predator-prey model.
//!
//! Two coupled populations evolve as
//!
//! ```text
//! d(prey)/dt     = alpha * prey - beta * prey * predator
//! d(predator)/dt = delta * prey * predator - eta * predator
//! ```
//!
//! This crate adapts the model to the generic solvers:
//!
//! - [`LotkaVolterra`] and [`PopulationDynamics`] expose the vector field as a
//!   [`Model`](predprey_core::Model) and [`OdeProblem`](predprey_core::OdeProblem)
//!   for [`rk4`](predprey_solvers::transient::rk4)
//! - [`Simulator`] integrates from a fixed initial population, either
//!   producing the full [`Trajectory`] or a [`FitnessRecord`] of the
//!   population extremes
//! - [`FitnessModel`] and [`OscillationProblem`] turn the simulator into an
//!   [`OptimizationProblem`](predprey_core::OptimizationProblem) over the four
//!   coefficients for [`grid_search`](predprey_solvers::optimization::grid_search)

pub mod defaults;
mod fitness;
mod parameters;
mod population;
mod simulator;
mod vector_field;

pub use fitness::{FitnessModel, FitnessRecord, OscillationProblem};
pub use parameters::Parameters;
pub use population::{Population, Rates};
pub use simulator::{Simulator, Trajectory, TrajectoryPoint};
pub use vector_field::{Input, LotkaVolterra, PopulationDynamics, rates};
