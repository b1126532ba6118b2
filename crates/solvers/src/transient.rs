//! Solvers that step a model forward in time.
//!
//! # Solvers
//!
//! - [`rk4`]: classic fixed-step fourth-order Runge-Kutta

pub mod rk4;
