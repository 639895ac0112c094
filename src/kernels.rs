//! Decimation-in-time butterfly kernels
//!
//! Input is expected in bit reversed order; after every pass of [`compute`] the buffer holds
//! independent transforms of twice the previous width, the last pass leaving the full transform in
//! natural order.
use num_complex::Complex;
use num_traits::Float;
use tracing::trace;

use crate::twiddles::StageTwiddles;

/// Butterfly pass for `step == 1`, where the only twiddle factor is `1`
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn butterfly_2<T: Float>(buf: &mut [Complex<T>]) {
    buf.chunks_exact_mut(2).for_each(|chunk| {
        let z0 = chunk[0];
        let z1 = chunk[1];

        chunk[0] = z0 + z1;
        chunk[1] = z0 - z1;
    });
}

/// One radix-2 pass, merging transforms of width `step` into transforms of width `2 * step`.
///
/// Group `g` of the pass uses the rotation factor `exp(-i * pi * g / step)` for every pair
/// `(p, p + step)` with `p = g, g + 2 * step, ...`.
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn butterfly_pass<T: Float>(buf: &mut [Complex<T>], step: usize) {
    let n = buf.len();
    let jump = step << 1;

    for (group, w) in StageTwiddles::<T>::new(step).enumerate() {
        for pair in (group..n).step_by(jump) {
            let partner = pair + step;
            let product = w * buf[partner];
            let z = buf[pair];

            buf[partner] = z - product;
            buf[pair] = z + product;
        }
    }
}

/// Run every pass over a bit reversed buffer, `log2(buf.len())` in total.
///
/// The length must be a power of 2; a single element is already its own transform.
pub fn compute<T: Float>(buf: &mut [Complex<T>]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());

    let mut step = 1;
    while step < n {
        trace!(step, "butterfly pass");
        if step == 1 {
            butterfly_2(buf);
        } else {
            butterfly_pass(buf, step);
        }
        step <<= 1;
    }
}

/// [`butterfly_2`] over separate real and imaginary buffers
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn butterfly_2_re_im<T: Float>(reals: &mut [T], imags: &mut [T]) {
    reals
        .chunks_exact_mut(2)
        .zip(imags.chunks_exact_mut(2))
        .for_each(|(reals_chunk, imags_chunk)| {
            let z0_re = reals_chunk[0];
            let z0_im = imags_chunk[0];
            let z1_re = reals_chunk[1];
            let z1_im = imags_chunk[1];

            reals_chunk[0] = z0_re + z1_re;
            imags_chunk[0] = z0_im + z1_im;
            reals_chunk[1] = z0_re - z1_re;
            imags_chunk[1] = z0_im - z1_im;
        });
}

/// [`butterfly_pass`] over separate real and imaginary buffers.
///
/// Performs the same operations as the complex version, so both give identical results.
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn butterfly_pass_re_im<T: Float>(reals: &mut [T], imags: &mut [T], step: usize) {
    let n = reals.len();
    let jump = step << 1;

    for (group, w) in StageTwiddles::<T>::new(step).enumerate() {
        for pair in (group..n).step_by(jump) {
            let partner = pair + step;
            let product_re = w.re * reals[partner] - w.im * imags[partner];
            let product_im = w.re * imags[partner] + w.im * reals[partner];
            let z_re = reals[pair];
            let z_im = imags[pair];

            reals[partner] = z_re - product_re;
            imags[partner] = z_im - product_im;
            reals[pair] = z_re + product_re;
            imags[pair] = z_im + product_im;
        }
    }
}

/// [`compute`] over separate, bit reversed, real and imaginary buffers of equal length.
pub fn compute_re_im<T: Float>(reals: &mut [T], imags: &mut [T]) {
    let n = reals.len();
    debug_assert_eq!(n, imags.len());
    debug_assert!(n.is_power_of_two());

    let mut step = 1;
    while step < n {
        trace!(step, "butterfly pass");
        if step == 1 {
            butterfly_2_re_im(reals, imags);
        } else {
            butterfly_pass_re_im(reals, imags, step);
        }
        step <<= 1;
    }
}
