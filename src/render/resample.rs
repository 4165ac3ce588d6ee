//! Stretch a series of any length onto an exact number of pixel columns.
//!
//! Interpolation is linear in both directions: short series are stretched,
//! long ones thinned.  The first and last pixel columns always equal the
//! first and last source values.

/// Linear resampler bound to one pixel width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resampler {
    width: usize,
}

impl Resampler {
    #[inline]
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Exactly `width` samples.
    ///
    /// * no values → a flat zero line
    /// * one value → a flat line at that value
    /// * width 1 → the last value
    #[must_use]
    pub fn resample(&self, values: &[f64]) -> Vec<f64> {
        let w = self.width;
        let n = values.len();
        match (n, w) {
            (_, 0) => Vec::new(),
            (0, _) => vec![0.0; w],
            (1, _) => vec![values[0]; w],
            (_, 1) => vec![values[n - 1]],
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let (last_px, last_src) = ((w - 1) as f64, (n - 1) as f64);
                (0..w)
                    .map(|i| {
                        #[allow(clippy::cast_precision_loss)]
                        let t = i as f64 / last_px * last_src;
                        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                        let lo = (t.floor() as usize).min(n - 1);
                        let hi = (lo + 1).min(n - 1);
                        #[allow(clippy::cast_precision_loss)]
                        let frac = t - lo as f64;
                        values[lo] + (values[hi] - values[lo]) * frac
                    })
                    .collect()
            }
        }
    }

    /// Resample every series of a set to the same width.
    #[must_use]
    pub fn resample_all(&self, set: &[Vec<f64>]) -> Vec<Vec<f64>> {
        set.iter().map(|v| self.resample(v)).collect()
    }
}
