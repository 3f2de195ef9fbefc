use glam::{Vec3, Vec4Swizzles};

use crate::{FrameInputs, PathReservoir, PathSample, WhiteNoise};

/// Builds the initial single-sample reservoir for one pixel.
///
/// Degenerate candidates - sky pixels, non-positive source PDFs, zero-luma
/// radiance, missing sample points - produce an empty reservoir instead of
/// an error; downstream stages skip reservoirs with `w == 0`.
pub fn generate(
    wnoise: &mut WhiteNoise,
    frame: &FrameInputs,
    screen_idx: usize,
) -> PathReservoir {
    if frame.is_miss(screen_idx) {
        return PathReservoir::default();
    }

    let source_pdf = frame.sample_pdfs[screen_idx];

    let mut sample = PathSample {
        radiance: frame.sample_radiance[screen_idx].xyz(),
        visible_point: frame.visible_points[screen_idx].xyz(),
        visible_normal: frame.visible_normals[screen_idx].xyz(),
        sample_point: frame.sample_points[screen_idx].xyz(),
        sample_normal: frame.sample_normals[screen_idx].xyz(),
        pdf: 0.0,
    };

    if source_pdf <= 0.0
        || !sample.exists()
        || sample.visible_normal == Vec3::ZERO
    {
        return PathReservoir::default();
    }

    let target_pdf =
        sample.target_pdf(sample.visible_point, sample.visible_normal);

    if target_pdf <= 0.0 {
        return PathReservoir::default();
    }

    sample.pdf = target_pdf;

    let mut reservoir = PathReservoir::default();

    reservoir.update(wnoise, sample, target_pdf / source_pdf);
    reservoir.normalize(target_pdf);
    reservoir
}
