use predprey_core::{Model, Observer, OptimizationProblem};

use crate::optimization::EvalError;

use super::{Action, Point};

/// Events emitted by the grid search, one per grid point.
///
/// Every event carries the point's position in enumeration order (`index`)
/// and the best point accepted so far (`best`), which is `None` until the
/// first point is accepted.
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of a grid point.
    Evaluated {
        /// Position of the point in enumeration order, starting at 0.
        index: usize,

        /// The evaluated point (coordinates and objective).
        point: Point<N>,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,

        /// The best point accepted before this one.
        best: Option<Point<N>>,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// Position of the point in enumeration order, starting at 0.
        index: usize,

        /// The coordinates where evaluation failed.
        x: [f64; N],

        /// The best point accepted before this one.
        best: Option<Point<N>>,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// Position of the point in enumeration order, starting at 0.
        index: usize,

        /// The coordinates where evaluation failed.
        x: [f64; N],

        /// The best point accepted before this one.
        best: Option<Point<N>>,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the position of the point in enumeration order.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Evaluated { index, .. }
            | Self::ModelFailed { index, .. }
            | Self::ProblemFailed { index, .. } => *index,
        }
    }

    /// Returns the coordinates that were evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> [f64; N] {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the best point accepted before this event.
    #[must_use]
    pub fn best(&self) -> Option<Point<N>> {
        match self {
            Self::Evaluated { best, .. }
            | Self::ModelFailed { best, .. }
            | Self::ProblemFailed { best, .. } => *best,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        index: usize,
        x: [f64; N],
        best: Option<Point<N>>,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    index,
                    x,
                    best,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    index,
                    x,
                    best,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
