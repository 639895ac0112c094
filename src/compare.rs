//! Tolerance-based comparison of sample sequences
//!
//! Floating point transforms are never compared for exact equality. Two samples match when they
//! differ by at most `epsilon`; a difference of exactly `epsilon` still matches.
use num_traits::Float;

/// A pair of samples that differ by more than the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch<T> {
    pub index: usize,
    pub actual: T,
    pub expected: T,
}

#[inline]
fn within<T: Float>(actual: T, expected: T, epsilon: T) -> bool {
    // NaN compares false, so it is never within tolerance
    (actual - expected).abs() <= epsilon
}

/// Returns `true` if both sequences have the same length and every pair of corresponding samples
/// differs by no more than `epsilon`.
pub fn all_close<T: Float>(actual: &[T], expected: &[T], epsilon: T) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected.iter())
            .all(|(a, e)| within(*a, *e, epsilon))
}

/// Every index at which `actual` and `expected` differ by more than `epsilon`.
///
/// Only the common prefix is inspected; check the lengths separately.
pub fn mismatches<T: Float>(actual: &[T], expected: &[T], epsilon: T) -> Vec<Mismatch<T>> {
    actual
        .iter()
        .zip(expected.iter())
        .enumerate()
        .filter(|(_, (a, e))| !within(**a, **e, epsilon))
        .map(|(index, (a, e))| Mismatch {
            index,
            actual: *a,
            expected: *e,
        })
        .collect()
}
