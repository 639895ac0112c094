pub extern crate rustfft;

// export rustfft to ctfft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;
use rustfft::{FftNum, FftPlanner};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Forward transform of the given signal computed by `rustfft`, used as the reference spectrum.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn rustfft_forward<T: FftNum + Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    let mut buffer: Vec<Complex<T>> = reals
        .iter()
        .zip(imags.iter())
        .map(|(re, im)| Complex::new(*re, *im))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Textbook O(N^2) DFT evaluated in `f64`, for checking small transforms independently of any FFT.
pub fn naive_dft(signal: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = signal.len();
    (0..n)
        .map(|k| {
            signal
                .iter()
                .enumerate()
                .fold(Complex::new(0.0, 0.0), |acc, (t, z)| {
                    let angle = -2.0 * std::f64::consts::PI * ((k * t) % n) as f64 / n as f64;
                    acc + z * Complex::from_polar(1.0, angle)
                })
        })
        .collect()
}
