use glam::Vec3;

use crate::Config;

/// Geometric context of a single pixel, used to decide whether two pixels are
/// allowed to reuse each other's samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct Surface {
    pub normal: Vec3,
    pub depth: f32,
}

impl Surface {
    /// Returns whether both surfaces are geometrically close enough for one
    /// pixel's sample to be reused by the other.
    ///
    /// Reusing across a depth discontinuity or a crease would count samples
    /// under the wrong target distribution, so mismatched surfaces get
    /// rejected instead of merged.
    pub fn is_similar_to(&self, other: &Self, config: &Config) -> bool {
        let depth_diff = (self.depth - other.depth).abs();

        if depth_diff > config.max_depth_diff * self.depth.max(other.depth) {
            return false;
        }

        self.normal.dot(other.normal) >= config.min_normal_dot
    }
}
