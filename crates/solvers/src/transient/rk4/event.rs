use predprey_core::Snapshot;

/// Event emitted by the RK4 solver after each integration step.
///
/// `time` is the clock value when the step began, so the first event has
/// `step == 1` and `time == 0.0` while its snapshot already holds the state
/// one step past the start.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    /// The step number, starting at 1.
    pub step: usize,

    /// Clock value at the start of this step.
    pub time: f64,

    /// Snapshot of the model input and output after this step.
    pub snapshot: Snapshot<I, O>,
}
