//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with any solver whose types implement them.
//!
//! # Example
//!
//! ```rust
//! use predprey_core::Observer;
//! use predprey_observers::traits::{CanStopEarly, HasObjective};
//!
//! /// Stops as soon as any objective falls below a target.
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.target).then(A::stop_early)
//!     }
//! }
//! ```

use predprey_core::{Model, OptimizationProblem};
use predprey_solvers::{optimization::grid_search, transient::rk4};

/// An event that carries the coordinates it was evaluated at.
pub trait HasPoint {
    /// Returns the coordinates of this event, outermost variable first.
    fn x(&self) -> &[f64];
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can discard an evaluation.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than any other.
    fn assume_worse() -> Self;
}

impl<M, P, const N: usize> HasPoint for grid_search::Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn x(&self) -> &[f64] {
        match self {
            grid_search::Event::Evaluated { point, .. } => &point.x,
            grid_search::Event::ModelFailed { x, .. }
            | grid_search::Event::ProblemFailed { x, .. } => x,
        }
    }
}

impl<M, P, const N: usize> HasObjective for grid_search::Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        match self {
            grid_search::Event::Evaluated { point, .. } => point.objective,
            grid_search::Event::ModelFailed { .. } | grid_search::Event::ProblemFailed { .. } => {
                f64::NAN
            }
        }
    }
}

impl CanStopEarly for grid_search::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for grid_search::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
