mod path;

pub use self::path::*;
use crate::WhiteNoise;

/// Weighted-reservoir-sampling accumulator.
///
/// Keeps one representative sample out of a weighted stream of candidates,
/// together with the bookkeeping (`m`, `w`) needed to estimate the lighting
/// integral without bias; candidates survive with probability proportional
/// to their resampling weight.
///
/// `w` starts out as the running weight sum and becomes the unbiased
/// contribution weight once [`Self::normalize()`] is called.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reservoir<T> {
    pub sample: T,
    pub m: f32,
    pub w: f32,
}

impl<T> Reservoir<T>
where
    T: Clone + Copy,
{
    /// Offers a new candidate to this reservoir; returns whether the
    /// candidate got adopted.
    pub fn update(
        &mut self,
        wnoise: &mut WhiteNoise,
        sample: T,
        weight: f32,
    ) -> bool {
        self.m += 1.0;
        self.w += weight;

        if wnoise.sample() * self.w <= weight {
            self.sample = sample;
            true
        } else {
            false
        }
    }

    /// Merges another reservoir into this one.
    ///
    /// `pdf` must be the other sample's target density re-evaluated at *this*
    /// reservoir's shading context - merging under the foreign pixel's
    /// density would count the sample under the wrong distribution.
    pub fn merge(
        &mut self,
        wnoise: &mut WhiteNoise,
        rhs: &Self,
        pdf: f32,
    ) -> bool {
        if rhs.m <= 0.0 {
            return false;
        }

        self.m += rhs.m - 1.0;
        self.update(wnoise, rhs.sample, rhs.w * rhs.m * pdf)
    }

    /// Turns the running weight sum into the unbiased contribution weight,
    /// `w / (m * pdf)`; degenerate reservoirs end up with `w == 0` and get
    /// skipped downstream.
    pub fn normalize(&mut self, pdf: f32) {
        let t = self.m * pdf;

        self.w = if t == 0.0 { 0.0 } else { self.w / t };
    }

    /// Caps the sample count; applied to temporal histories so that stale
    /// samples cannot outweigh fresh ones forever.
    pub fn clamp_m(&mut self, max: f32) {
        self.m = self.m.min(max);
    }
}
