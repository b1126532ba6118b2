//! Exhaustive grid search for multi-variable minimization.
//!
//! # Algorithm
//!
//! Each of the `N` solver variables gets a [`SearchRange`]. The search
//! evaluates every point of their Cartesian product in nested-loop order: the
//! first range is the outermost loop and the last range varies fastest. The
//! best point is replaced only on strict improvement, so among equal
//! objectives the point enumerated first wins.
//!
//! The first accepted point always becomes the provisional best, whatever its
//! objective. A grid with a single point therefore returns that point even if
//! its objective is infinite.
//!
//! # When to Use
//!
//! - The objective is cheap enough to evaluate at every grid point
//! - The objective may be multimodal, noisy, or non-smooth
//! - A deterministic, reproducible answer matters more than resolution
//!
//! The cost is the product of the range sizes, so it grows exponentially with
//! `N`.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per grid point:
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::ModelFailed`]: model returned an error
//! - [`Event::ProblemFailed`]: problem returned an error (input or objective)
//!
//! Observers can return [`Action::StopEarly`] to halt and keep the best point
//! so far, or [`Action::AssumeWorse`] to discard the point (which also lets
//! the search continue past a failure).

mod action;
mod error;
mod event;
mod point;
mod range;
mod solution;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use range::{RangeError, SearchRange, Values};
pub use solution::{Solution, Status};

use itertools::Itertools;
use predprey_core::{Model, Observer, OptimizationProblem, Snapshot};

use crate::optimization::evaluate;

/// Returns an iterator over every grid point in nested-loop order.
///
/// The first range is the outermost loop; the last range varies fastest.
pub fn grid<const N: usize>(ranges: &[SearchRange; N]) -> impl Iterator<Item = [f64; N]> + '_ {
    ranges
        .iter()
        .map(SearchRange::values)
        .multi_cartesian_product()
        .map(|values| std::array::from_fn(|i| values[i]))
}

/// Returns the number of points on the grid.
#[must_use]
pub fn grid_size<const N: usize>(ranges: &[SearchRange; N]) -> usize {
    ranges.iter().map(SearchRange::count).product()
}

/// Best point accepted so far, with the snapshot that produced it.
struct Best<I, O, const N: usize> {
    point: Point<N>,
    snapshot: Snapshot<I, O>,
}

/// Finds the grid point with the lowest objective.
///
/// The observer receives an [`Event`] for every grid point.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the model or problem fails at a grid point and the
/// observer does not return [`Action::AssumeWorse`] to skip it, or
/// [`Error::NoAcceptedPoint`] if the search ends without accepting any point.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    ranges: &[SearchRange; N],
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let mut best: Option<Best<M::Input, M::Output, N>> = None;
    let mut evaluations = 0;

    for (index, x) in grid(ranges).enumerate() {
        evaluations += 1;
        let best_point = best.as_ref().map(|b| b.point);

        match evaluate(model, problem, x) {
            Ok(eval) => {
                let point = Point::from(&eval);
                let event = Event::Evaluated {
                    index,
                    point,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                    best: best_point,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        return finish(best, Status::StoppedByObserver, evaluations);
                    }
                    Some(Action::AssumeWorse) => {}
                    None => {
                        if point.improves_on(best_point.as_ref()) {
                            best = Some(Best {
                                point,
                                snapshot: eval.snapshot,
                            });
                        }
                    }
                }
            }
            Err(error) => {
                match Event::emit_failure(index, x, best_point, &error, &mut observer) {
                    Some(Action::StopEarly) => {
                        return finish(best, Status::StoppedByObserver, evaluations);
                    }
                    Some(Action::AssumeWorse) => {}
                    None => return Err(error.into()),
                }
            }
        }
    }

    finish(best, Status::Complete, evaluations)
}

/// Finds the grid point with the lowest objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any grid point.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    ranges: &[SearchRange; N],
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, ranges, ())
}

fn finish<I, O, const N: usize>(
    best: Option<Best<I, O, N>>,
    status: Status,
    evaluations: usize,
) -> Result<Solution<I, O, N>, Error> {
    let Best { point, snapshot } = best.ok_or(Error::NoAcceptedPoint)?;

    Ok(Solution {
        status,
        x: point.x,
        objective: point.objective,
        snapshot,
        evaluations,
    })
}
