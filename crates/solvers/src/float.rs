/// Returns `true` if repeatedly adding `step` to a value whose magnitude
/// never exceeds `edge` always changes it.
///
/// Addition rounds to nearest, ties to even, so a step of exactly half the
/// spacing between floats is lost at values with an even mantissa. The step
/// must exceed half the spacing just above `edge`, the widest spacing any
/// value in `[-edge, edge]` sees.
pub(crate) fn always_advances(step: f64, edge: f64) -> bool {
    let edge = edge.abs();
    let spacing = f64::from_bits(edge.to_bits() + 1) - edge;
    step * 2.0 > spacing
}
