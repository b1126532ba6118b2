use predprey_core::Snapshot;

/// Indicates how the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every grid point was evaluated.
    Complete,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a grid search.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Coordinates of the best point.
    pub x: [f64; N],

    /// Objective value at the best point.
    pub objective: f64,

    /// Snapshot at the best point.
    pub snapshot: Snapshot<I, O>,

    /// Number of grid points evaluated, including failed and discarded ones.
    pub evaluations: usize,
}
