use std::iter::FusedIterator;

use predprey_core::{DerivativeOf, Model, OdeProblem, Snapshot};

use super::{Config, Error, Event, Increment, Solution, Status, step};

/// A lazy, single-pass iterator over RK4 integration steps.
///
/// Each call to `next` takes one step while the clock is at or before the
/// configured end time, then advances the clock by `dt`. The clock is
/// accumulated in floating point, so rounding can admit one more step than
/// `end / dt` suggests.
///
/// After an error is yielded the iterator is exhausted. To rerun the same
/// trajectory, create a new iterator from the same initial snapshot.
pub struct Steps<'a, M, P>
where
    M: Model,
{
    model: &'a M,
    problem: &'a P,
    current: Snapshot<M::Input, M::Output>,
    config: Config,
    time: f64,
    steps: usize,
    failed: bool,
}

impl<'a, M, P> Steps<'a, M, P>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
{
    /// Creates an iterator starting from an already evaluated snapshot.
    pub fn new(
        model: &'a M,
        problem: &'a P,
        initial: Snapshot<M::Input, M::Output>,
        config: &Config,
    ) -> Self {
        Self {
            model,
            problem,
            current: initial,
            config: *config,
            time: 0.0,
            steps: 0,
            failed: false,
        }
    }

    /// Returns the most recent snapshot.
    pub fn current(&self) -> &Snapshot<M::Input, M::Output> {
        &self.current
    }

    /// Returns the clock value for the next step.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the number of steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub(super) fn into_solution(self, status: Status) -> Solution<M::Input, M::Output> {
        Solution {
            status,
            snapshot: self.current,
            time: self.time,
            steps: self.steps,
        }
    }
}

impl<M, P> Iterator for Steps<'_, M, P>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    DerivativeOf<P::State, f64>: Increment,
{
    type Item = Result<Event<M::Input, M::Output>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.time > self.config.end() {
            return None;
        }

        let next = match step(self.model, self.problem, &self.current, self.config.dt()) {
            Ok(next) => next,
            Err(error) => {
                self.failed = true;
                return Some(Err(error));
            }
        };

        self.steps += 1;
        let event = Event {
            step: self.steps,
            time: self.time,
            snapshot: next.clone(),
        };

        self.current = next;
        self.time += self.config.dt();

        Some(Ok(event))
    }
}

impl<M, P> FusedIterator for Steps<'_, M, P>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output, Delta = f64>,
    DerivativeOf<P::State, f64>: Increment,
{
}
