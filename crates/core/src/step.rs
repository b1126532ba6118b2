/// A trait for states that can be advanced using their derivative.
///
/// Implementing this trait enables the generic RK4 solver to work with a state
/// type by stepping it via `derivative * delta`, where the derivative is with
/// respect to `Delta` (usually time).
///
/// Stepping must be componentwise and must not couple components: the RK4
/// stage offsets and the final weighted update are both expressed as steps.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
