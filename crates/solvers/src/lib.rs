//! Numerical solvers for predator-prey models.
//!
//! - [`transient::rk4`]: fixed-step fourth-order Runge-Kutta integration of
//!   an [`OdeProblem`](predprey_core::OdeProblem)
//! - [`optimization::grid_search`]: exhaustive minimization of an
//!   [`OptimizationProblem`](predprey_core::OptimizationProblem) over a grid

mod float;

pub mod optimization;
pub mod transient;
