use core::ops::{Deref, DerefMut};

use glam::{Vec3, Vec4, Vec4Swizzles};

use crate::{safe_normalize, Normal, Ray, Reservoir, Vec3Ext};

/// Per-pixel reservoir holding one light-carrying path sample.
///
/// Serialized into four `Vec4`s per pixel; see [`Self::read()`] and
/// [`Self::write()`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathReservoir {
    pub reservoir: Reservoir<PathSample>,
}

impl PathReservoir {
    pub fn read(buffer: &[Vec4], id: usize) -> Self {
        let d0 = buffer[4 * id];
        let d1 = buffer[4 * id + 1];
        let d2 = buffer[4 * id + 2];
        let d3 = buffer[4 * id + 3];

        Self {
            reservoir: Reservoir {
                sample: PathSample {
                    radiance: d0.xyz(),
                    visible_point: d1.xyz(),
                    sample_point: d2.xyz(),
                    visible_normal: Normal::decode(d3.xy()),
                    sample_normal: Normal::decode(d3.zw()),
                    pdf: d2.w,
                },
                m: d0.w,
                w: d1.w,
            },
        }
    }

    pub fn write(self, buffer: &mut [Vec4], id: usize) {
        let d0 = self.sample.radiance.extend(self.m);
        let d1 = self.sample.visible_point.extend(self.w);
        let d2 = self.sample.sample_point.extend(self.sample.pdf);

        let sample_normal = Normal::encode(self.sample.sample_normal);

        let d3 = Normal::encode(self.sample.visible_normal)
            .extend(sample_normal.x)
            .extend(sample_normal.y);

        buffer[4 * id] = d0;
        buffer[4 * id + 1] = d1;
        buffer[4 * id + 2] = d2;
        buffer[4 * id + 3] = d3;
    }

    pub fn copy(input: &[Vec4], output: &mut [Vec4], id: usize) {
        Self::read(input, id).write(output, id);
    }

    pub fn is_empty(self) -> bool {
        self.m == 0.0
    }
}

impl Deref for PathReservoir {
    type Target = Reservoir<PathSample>;

    fn deref(&self) -> &Self::Target {
        &self.reservoir
    }
}

impl DerefMut for PathReservoir {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.reservoir
    }
}

/// A single light-carrying path sample: the shading point it was generated
/// for, the chosen sample point, and the radiance estimate between them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathSample {
    pub radiance: Vec3,
    pub visible_point: Vec3,
    pub visible_normal: Vec3,
    pub sample_point: Vec3,
    pub sample_normal: Vec3,

    /// Target density this sample was last selected under.
    pub pdf: f32,
}

impl PathSample {
    pub fn exists(self) -> bool {
        self.sample_point != Vec3::ZERO
    }

    /// Re-scores this sample at given shading context.
    ///
    /// A sample picked under a neighbor's geometry must be re-evaluated under
    /// the current pixel's integrand before it can be merged; we use the
    /// radiance luminance attenuated by the cosine term as a cheap proxy for
    /// the full integrand.
    pub fn target_pdf(self, point: Vec3, normal: Vec3) -> f32 {
        if !self.exists() {
            return 0.0;
        }

        let dir = safe_normalize(self.sample_point - point);

        if dir == Vec3::ZERO {
            return 0.0;
        }

        self.radiance.luma() * normal.dot(dir).max(0.0)
    }

    /// Builds the bias-correction visibility ray from `point` towards this
    /// sample; slightly shortened to avoid self-intersection at the target.
    pub fn ray(self, point: Vec3) -> Ray {
        Ray::new(point, self.dir(point))
            .with_len(self.sample_point.distance(point) - 0.01)
    }

    pub fn dir(self, point: Vec3) -> Vec3 {
        safe_normalize(self.sample_point - point)
    }
}
