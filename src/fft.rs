//! Validated forward FFT entry points
//!
//! The core works on a single `&mut [Complex<T>]`, so the real and imaginary part of a sample can
//! never be separated. The `*_re_im` and `fft_32`/`fft_64` variants serve callers that keep the
//! two parts in separate buffers; they apply every swap and butterfly to both buffers in place.
use num_complex::Complex;
use num_traits::Float;
use tracing::debug;

use crate::bit_reverse;
use crate::error::FftError;
use crate::kernels::{compute, compute_re_im};
use crate::options::Options;

/// Check that `len` is a usable transform length and return `log2(len)`.
pub fn validate_len(len: usize) -> Result<usize, FftError> {
    if len.is_power_of_two() {
        Ok(len.ilog2() as usize)
    } else {
        Err(FftError::NotPowerOfTwo { len })
    }
}

/// In-place forward FFT of `buf`, with default [`Options`].
///
/// The output is in natural order. Fails without touching `buf` if its length is not a non-zero
/// power of 2.
pub fn fft<T: Float>(buf: &mut [Complex<T>]) -> Result<(), FftError> {
    fft_with_opts(buf, &Options::default())
}

/// In-place forward FFT of `buf`.
///
/// Decimation in time: the buffer is put into bit reversed order first, then `log2(N)` butterfly
/// passes assemble the transform.
pub fn fft_with_opts<T: Float>(buf: &mut [Complex<T>], opts: &Options) -> Result<(), FftError> {
    let log_n = validate_len(buf.len())?;
    debug!(n = buf.len(), log_n, bit_reverse = ?opts.bit_reverse, "forward fft");

    bit_reverse::apply(buf, opts.bit_reverse);
    compute(buf);
    Ok(())
}

/// In-place forward FFT of a signal stored as separate real and imaginary buffers, with default
/// [`Options`].
pub fn fft_re_im<T: Float>(reals: &mut [T], imags: &mut [T]) -> Result<(), FftError> {
    fft_re_im_with_opts(reals, imags, &Options::default())
}

/// In-place forward FFT of a signal stored as separate real and imaginary buffers.
///
/// Both buffers receive the same swaps and butterflies, in place. Neither buffer is modified if
/// validation fails.
pub fn fft_re_im_with_opts<T: Float>(
    reals: &mut [T],
    imags: &mut [T],
    opts: &Options,
) -> Result<(), FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::LengthMismatch {
            reals: reals.len(),
            imags: imags.len(),
        });
    }
    let log_n = validate_len(reals.len())?;
    debug!(n = reals.len(), log_n, bit_reverse = ?opts.bit_reverse, "forward fft, split buffers");

    bit_reverse::bit_reverse_re_im(reals, imags, opts.bit_reverse);
    compute_re_im(reals, imags);
    Ok(())
}

macro_rules! impl_fft_for {
    ($func_name:ident, $func_name_with_opts:ident, $precision:ty) => {
        /// In-place forward FFT of separate real and imaginary buffers, with default [`Options`].
        ///
        /// The output is in natural order.
        pub fn $func_name(reals: &mut [$precision], imags: &mut [$precision]) -> Result<(), FftError> {
            fft_re_im_with_opts(reals, imags, &Options::default())
        }

        /// In-place forward FFT of separate real and imaginary buffers.
        pub fn $func_name_with_opts(
            reals: &mut [$precision],
            imags: &mut [$precision],
            opts: &Options,
        ) -> Result<(), FftError> {
            fft_re_im_with_opts(reals, imags, opts)
        }
    };
}

impl_fft_for!(fft_32, fft_32_with_opts, f32);
impl_fft_for!(fft_64, fft_64_with_opts, f64);
