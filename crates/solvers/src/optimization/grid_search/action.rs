/// Actions an observer can take during a grid search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the best point found so far.
    ///
    /// The point that triggered the event is not considered.
    StopEarly,

    /// Treat this point as worse than the current best.
    ///
    /// The point is never selected, even if its objective is lower. Returning
    /// this from a failure event skips the failed point instead of aborting
    /// the search.
    AssumeWorse,
}
