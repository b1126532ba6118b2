use predprey_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The clock passed the configured end time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK4 integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Snapshot after the last step taken (the initial snapshot if none were).
    pub snapshot: Snapshot<I, O>,

    /// Clock value when the solver stopped.
    pub time: f64,

    /// Number of integration steps taken.
    pub steps: usize,
}
