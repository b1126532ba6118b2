use crate::optimization::Evaluation;

/// A grid point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    /// The coordinates, in range order.
    pub x: [f64; N],

    /// The objective value at `x`.
    pub objective: f64,
}

impl<const N: usize> Point<N> {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: [f64; N], objective: f64) -> Self {
        Self { x, objective }
    }

    /// Returns `true` if this point strictly improves on `best`.
    ///
    /// Any point improves on no best at all. Ties do not improve, so the
    /// earlier of two equal points is kept.
    #[must_use]
    pub fn improves_on(&self, best: Option<&Point<N>>) -> bool {
        best.is_none_or(|best| self.objective < best.objective)
    }
}

impl<I, O, const N: usize> From<&Evaluation<I, O, N>> for Point<N> {
    fn from(eval: &Evaluation<I, O, N>) -> Self {
        Self::new(eval.x, eval.objective)
    }
}
