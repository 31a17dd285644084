/// Curvature-based label for a stationary point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Minimum,
    Maximum,
    /// Curvature is zero or within tolerance of it.
    Inconclusive,
}

/// Classifies a stationary point by the sign of the second derivative there.
///
/// When Newton's method is applied to `f'`, the root it finds is a
/// stationary point of `f`; `second` is `f''` evaluated at that point.
/// The result is advisory: a curvature within `tolerance` of zero, or a
/// non-finite one, yields [`Extremum::Inconclusive`].
#[must_use]
pub fn classify(second: f64, tolerance: f64) -> Extremum {
    if !second.is_finite() || second.abs() <= tolerance {
        Extremum::Inconclusive
    } else if second > 0.0 {
        Extremum::Minimum
    } else {
        Extremum::Maximum
    }
}
