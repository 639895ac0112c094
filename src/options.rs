/// Options that select between equivalent strategies inside the transform.
///
/// Calling FFT routines without specifying options uses [`Options::default`], which is what you
/// want unless you are comparing the strategies against each other.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub bit_reverse: BitReverseAlgorithm,
}

impl Options {
    /// Options using the given bit reversal algorithm.
    pub fn with_bit_reverse(bit_reverse: BitReverseAlgorithm) -> Self {
        Self { bit_reverse }
    }
}

/// The algorithm to use for the bit reversal pre-pass.
/// Both produce exactly the same permutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitReverseAlgorithm {
    #[default]
    /// Swap every index with its reversed counterpart, computed by [`crate::reverse_bits`]
    Table,
    /// Carry a running bit-reversed target along and advance it by walking a mask down from `N`
    MaskWalk,
}
