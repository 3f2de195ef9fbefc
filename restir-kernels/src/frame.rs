use glam::{Vec4, Vec4Swizzles};

use crate::Surface;

/// Per-pixel inputs provided by the host renderer for a single frame.
///
/// All slices contain one entry per pixel and are indexed with
/// [`Camera::screen_to_idx()`](crate::Camera::screen_to_idx); the host is
/// responsible for filling them before the frame starts.
#[derive(Clone, Copy)]
pub struct FrameInputs<'a> {
    /// World-space primary-hit points (`xyz`; `w` is ignored).
    pub visible_points: &'a [Vec4],

    /// World-space normals at the primary-hit points.
    pub visible_normals: &'a [Vec4],

    /// World-space positions of the candidate sample points.
    pub sample_points: &'a [Vec4],

    /// World-space normals at the candidate sample points.
    pub sample_normals: &'a [Vec4],

    /// Outgoing radiance estimates carried by the candidate samples.
    pub sample_radiance: &'a [Vec4],

    /// Source PDFs the candidate samples were drawn with.
    pub sample_pdfs: &'a [f32],

    /// Screen-space motion vectors, in pixels, pointing from each pixel
    /// towards its position in the previous frame (`xy`); `w > 0.0` marks
    /// the vector as valid. Pixels without a valid vector fall back to
    /// camera-only reprojection.
    pub motion_vectors: &'a [Vec4],

    /// Primary-hit depths; `<= 0.0` marks a miss (e.g. sky).
    pub depths: &'a [f32],

    /// Primary-hit normals used for the reuse-similarity tests.
    pub normals: &'a [Vec4],
}

impl<'a> FrameInputs<'a> {
    pub fn surface(&self, idx: usize) -> Surface {
        Surface {
            normal: self.normals[idx].xyz(),
            depth: self.depths[idx],
        }
    }

    pub fn is_miss(&self, idx: usize) -> bool {
        self.depths[idx] <= 0.0
    }
}
