use predprey_core::Observer;

use crate::traits::CanStopEarly;

/// Lets a solver emit a fixed number of events and stops it at the next one.
///
/// Solvers discard the work behind the event that stops them, so the limit
/// asks to stop one event past the budget. A grid search limited to `n`
/// therefore accepts up to `n` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationLimit {
    limit: usize,
    seen: usize,
}

impl EvaluationLimit {
    /// Creates a limit that admits `limit` events.
    ///
    /// A limit of zero stops at the first event.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns `true` once an event past the limit has been seen.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.seen > self.limit
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for EvaluationLimit {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        self.is_exhausted().then(A::stop_early)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for &mut EvaluationLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
