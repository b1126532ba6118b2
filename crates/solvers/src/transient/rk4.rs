//! Classic fixed-step fourth-order Runge-Kutta solver for ODE problems.
//!
//! Each step evaluates the model four times and combines the stage
//! increments with the standard weights:
//!
//! ```text
//! k1 = h * f(y)
//! k2 = h * f(y + k1 / 2)
//! k3 = h * f(y + k2 / 2)
//! k4 = h * f(y + k3)
//!
//! y' = y + (k1 + 2 * (k2 + k3) + k4) / 6
//! ```
//!
//! There is no error estimate and no step-size control. Accuracy and stability
//! depend entirely on choosing `h` small relative to the fastest timescale of
//! the system.
//!
//! # Example
//!
//! ```ignore
//! use predprey_solvers::transient::rk4;
//!
//! let config = rk4::Config::new(1e-4, 10.0)?;
//! let solution = rk4::solve_unobserved(&model, &problem, initial_input, &config)?;
//!
//! println!("{} steps, final state {:?}", solution.steps, solution.snapshot.input);
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;
mod steps;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use steps::Steps;

use std::ops::{Add, Div, Mul};

use predprey_core::{DerivativeOf, Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Arithmetic a derivative needs for the RK4 weighted average.
///
/// Implemented automatically for any `Copy` type with componentwise addition
/// and scaling by `f64`.
pub trait Increment:
    Copy + Add<Output = Self> + Mul<f64, Output = Self> + Div<f64, Output = Self>
{
}

impl<T> Increment for T where
    T: Copy + Add<Output = T> + Mul<f64, Output = T> + Div<f64, Output = T>
{
}

/// Advances a snapshot by one RK4 step of size `dt`.
///
/// The stage increments are derivatives already scaled by `dt`, so they are
/// applied to the state with a unit delta. Intermediate stage inputs are built
/// `dt / 2`, `dt / 2`, and `dt` past the current input, which lets
/// non-autonomous problems see the correct stage times.
///
/// The operations are ordered so the result is bit-identical to evaluating the
/// textbook formulas in the module docs left to right.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any stage.
pub fn step<M, P>(
    model: &M,
    problem: &P,
    current: &Snapshot<M::Input, M::Output>,
    dt: f64,
) -> Result<Snapshot<M::Input, M::Output>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    DerivativeOf<P::State, f64>: Increment,
{
    let Snapshot { input, output } = current;
    let state = problem.state(input).map_err(Error::problem)?;
    let half = dt * 0.5;

    let k1 = problem.derivative(input, output).map_err(Error::problem)? * dt;
    let k2 = slope_at(model, problem, input, &state.step(k1 * 0.5, 1.0), half)? * dt;
    let k3 = slope_at(model, problem, input, &state.step(k2 * 0.5, 1.0), half)? * dt;
    let k4 = slope_at(model, problem, input, &state.step(k3, 1.0), dt)? * dt;

    let next_state = state.step((k1 + (k2 + k3) * 2.0 + k4) / 6.0, 1.0);

    let next_input = problem
        .build_input(input, &next_state, &dt)
        .map_err(Error::problem)?;
    let next_input = problem
        .finalize_step(next_input, input, output, &dt)
        .map_err(Error::problem)?;
    let next_output = model.call(&next_input).map_err(Error::model)?;

    Ok(Snapshot::new(next_input, next_output))
}

/// Evaluates the derivative at an intermediate stage state.
fn slope_at<M, P>(
    model: &M,
    problem: &P,
    base: &M::Input,
    state: &P::State,
    delta: f64,
) -> Result<DerivativeOf<P::State, f64>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
{
    let input = problem
        .build_input(base, state, &delta)
        .map_err(Error::problem)?;
    let output = model.call(&input).map_err(Error::model)?;
    problem.derivative(&input, &output).map_err(Error::problem)
}

/// Evaluates the initial input and returns a lazy iterator over the steps.
///
/// # Errors
///
/// Returns an error if the model fails at the initial input.
pub fn steps<'a, M, P>(
    model: &'a M,
    problem: &'a P,
    initial: M::Input,
    config: &Config,
) -> Result<Steps<'a, M, P>, Error>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
{
    let output = model.call(&initial).map_err(Error::model)?;
    Ok(Steps::new(
        model,
        problem,
        Snapshot::new(initial, output),
        config,
    ))
}

/// Integrates an ODE problem from `initial` until the clock passes the end time.
///
/// # Algorithm
///
/// 1. Call the model with the initial input.
/// 2. While the clock is at or before the end time:
///    - Take one RK4 step (see [`step`]).
///    - Emit an [`Event`] labeled with the clock value the step began at.
///    - If the observer returns [`Action::StopEarly`], terminate.
///    - Advance the clock by `dt`.
/// 3. Return the final snapshot.
///
/// Only the final snapshot is kept. Observers that need the whole trajectory
/// record it from the events.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    DerivativeOf<P::State, f64>: Increment,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let mut steps = steps(model, problem, initial, config)?;

    while let Some(event) = steps.next() {
        let event = event?;
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(steps.into_solution(Status::StoppedByObserver));
        }
    }

    Ok(steps.into_solution(Status::Complete))
}

/// Integrates an ODE problem using RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    DerivativeOf<P::State, f64>: Increment,
{
    solve(model, problem, initial, config, ())
}

#[cfg(test)]
mod tests;
