//! In-place, iterative radix-2 Cooley-Tukey FFT.
//!
//! The transform runs in two steps over a power-of-two-length buffer:
//!
//! 1. the samples are put into bit reversed order ([`bit_reverse_permutation`]),
//! 2. `log2(N)` butterfly passes combine them into the spectrum, in natural order.
//!
//! ```
//! use ctfft::fft_32;
//!
//! let mut reals: Vec<f32> = (1..=8).map(|i| i as f32).collect();
//! let mut imags = vec![0.0; 8];
//! fft_32(&mut reals, &mut imags)?;
//! assert_eq!(reals[0], 36.0);
//! # Ok::<(), ctfft::FftError>(())
//! ```

pub use crate::bit_reverse::{
    bit_reverse_mask_walk, bit_reverse_permutation, bit_reverse_re_im, reverse_bits,
};
pub use crate::compare::{all_close, mismatches, Mismatch};
pub use crate::error::{FftError, SampleFileError};
pub use crate::fft::{
    fft, fft_32, fft_32_with_opts, fft_64, fft_64_with_opts, fft_re_im, fft_re_im_with_opts,
    fft_with_opts, validate_len,
};

mod bit_reverse;
pub mod compare;
mod error;
mod fft;
pub mod kernels;
pub mod options;
pub mod samples;
pub mod twiddles;
