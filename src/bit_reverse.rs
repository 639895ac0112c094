//! Bit reversal permutation, the pre-pass of the decimation-in-time FFT.
//!
//! Every index `i` of an `N = 2^k` element buffer is exchanged with the index whose `k` low bits
//! are those of `i` in reverse order. The permutation is an involution, so it is carried out with
//! pairwise swaps and no scratch storage: each pair is swapped once, from its smaller index.
//!
//! Two ways of enumerating the pairs are provided (see [`BitReverseAlgorithm`]). They visit the
//! same pairs in the same order.
use crate::options::BitReverseAlgorithm;

/// Reverse the low `log_n` bits of `index`.
///
/// Bits above `log_n` must be clear. `log_n == 0` leaves `index` untouched.
#[inline]
pub fn reverse_bits(index: usize, log_n: usize) -> usize {
    if log_n == 0 {
        return index;
    }
    let shift = usize::BITS as usize - log_n;
    index.reverse_bits() >> shift
}

/// Call `swap(a, b)` for every pair of the bit reversal permutation of `0..n`, with `a > b`.
fn for_each_swap(n: usize, algorithm: BitReverseAlgorithm, mut swap: impl FnMut(usize, usize)) {
    match algorithm {
        BitReverseAlgorithm::Table => {
            let log_n = n.ilog2() as usize;
            for position in 0..n {
                let target = reverse_bits(position, log_n);
                if target > position {
                    swap(target, position);
                }
            }
        }
        BitReverseAlgorithm::MaskWalk => {
            let mut target = 0;
            for position in 0..n {
                if target > position {
                    swap(target, position);
                }
                // Reversed increment: clear the set top bits, then set the first clear one
                let mut mask = n >> 1;
                while target & mask != 0 {
                    target &= !mask;
                    mask >>= 1;
                }
                target |= mask;
            }
        }
    }
}

/// Reorder `buf` into bit reversed order.
///
/// # Panics
///
/// Panics if `buf.len()` is not a power of 2
pub fn bit_reverse_permutation<T>(buf: &mut [T]) {
    assert!(buf.len().is_power_of_two());
    for_each_swap(buf.len(), BitReverseAlgorithm::Table, |a, b| buf.swap(a, b));
}

/// Reorder `buf` into bit reversed order, advancing a running bit reversed counter instead of
/// reversing each index separately.
///
/// # Panics
///
/// Panics if `buf.len()` is not a power of 2
pub fn bit_reverse_mask_walk<T>(buf: &mut [T]) {
    assert!(buf.len().is_power_of_two());
    for_each_swap(buf.len(), BitReverseAlgorithm::MaskWalk, |a, b| buf.swap(a, b));
}

/// Reorder a signal held as separate real and imaginary buffers into bit reversed order.
/// Both buffers receive exactly the same swaps.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()` or if the length is not a power of 2
pub fn bit_reverse_re_im<T>(reals: &mut [T], imags: &mut [T], algorithm: BitReverseAlgorithm) {
    assert_eq!(reals.len(), imags.len());
    assert!(reals.len().is_power_of_two());
    for_each_swap(reals.len(), algorithm, |a, b| {
        reals.swap(a, b);
        imags.swap(a, b);
    });
}

/// Apply the permutation selected by `algorithm`.
pub(crate) fn apply<T>(buf: &mut [T], algorithm: BitReverseAlgorithm) {
    match algorithm {
        BitReverseAlgorithm::Table => bit_reverse_permutation(buf),
        BitReverseAlgorithm::MaskWalk => bit_reverse_mask_walk(buf),
    }
}
