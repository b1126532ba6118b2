//! Solvers for optimization problems.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` with the lowest objective.
//!
//! # Solvers
//!
//! - [`grid_search`]: exhaustive, deterministic evaluation of every point on
//!   a rectangular grid
//!
//! [`OptimizationProblem`]: predprey_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod grid_search;
