//! Core traits and types for predator-prey modeling.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`]: a deterministic callable from a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`StepIntegrable`]: a state that can be advanced by a derivative
//! - [`OdeProblem`], [`OptimizationProblem`]: problem traits that adapt
//!   solver variables to model inputs and extract what the solver needs from
//!   model outputs

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::{OdeProblem, OptimizationProblem};
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
