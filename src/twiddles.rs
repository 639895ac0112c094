use std::f64::consts::PI;
use std::marker::PhantomData;

use num_complex::Complex;
use num_traits::Float;

/// Convert an `f64` into the working precision.
#[inline]
pub(crate) fn cast<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// The rotation factor `exp(-i * pi * group / step)` used by `group` in the pass of width `step`.
///
/// The angle is evaluated in `f64` and rounded once to `T`.
#[inline]
pub fn twiddle<T: Float>(group: usize, step: usize) -> Complex<T> {
    if group == 0 {
        return Complex::new(T::one(), T::zero());
    }
    let angle = -PI * group as f64 / step as f64;
    let (sin, cos) = angle.sin_cos();
    Complex::new(cast(cos), cast(sin))
}

/// The `step` rotation factors of one butterfly pass, in group order.
///
/// Every factor is computed directly from its angle rather than by repeatedly rotating the
/// previous one, so there is no phase drift across a long pass.
pub struct StageTwiddles<T> {
    group: usize,
    step: usize,
    _precision: PhantomData<T>,
}

impl<T> StageTwiddles<T> {
    /// Rotation factors for the pass that combines blocks of `step` into blocks of `2 * step`.
    pub fn new(step: usize) -> Self {
        Self {
            group: 0,
            step,
            _precision: PhantomData,
        }
    }
}

impl<T: Float> Iterator for StageTwiddles<T> {
    type Item = Complex<T>;

    fn next(&mut self) -> Option<Complex<T>> {
        if self.group >= self.step {
            return None;
        }
        let w = twiddle(self.group, self.step);
        self.group += 1;
        Some(w)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.step - self.group;
        (remaining, Some(remaining))
    }
}

impl<T: Float> ExactSizeIterator for StageTwiddles<T> {}
