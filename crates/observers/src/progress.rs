use predprey_core::Observer;

use crate::traits::{HasObjective, HasPoint};

/// Logs the progress of a search through `tracing`.
///
/// An `info` event is emitted every time the outermost coordinate changes,
/// which for a grid search is once per value of the first range. The log
/// also counts evaluations and non-finite objectives (failures included).
///
/// Never requests an action.
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    outer: Option<f64>,
    evaluations: usize,
    non_finite: usize,
}

impl ProgressLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of events observed.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Returns the number of events whose objective was not finite.
    #[must_use]
    pub fn non_finite(&self) -> usize {
        self.non_finite
    }

    /// Logs the totals.
    pub fn finish(&self) {
        tracing::info!(
            evaluations = self.evaluations,
            non_finite = self.non_finite,
            "search finished"
        );
    }
}

impl<E, A> Observer<E, A> for ProgressLog
where
    E: HasPoint + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.evaluations += 1;

        if !event.objective().is_finite() {
            self.non_finite += 1;
        }

        let outer = event.x().first().copied();
        if outer.is_some() && outer != self.outer {
            self.outer = outer;
            tracing::info!(outer, evaluations = self.evaluations, "searching");
        }

        None
    }
}

impl<E, A> Observer<E, A> for &mut ProgressLog
where
    E: HasPoint + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
