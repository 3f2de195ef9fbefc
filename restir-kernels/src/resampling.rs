use glam::{UVec2, Vec4, Vec4Swizzles};

use crate::{
    Camera, Config, FrameInputs, PassParams, PathReservoir, Reprojection,
    Surface, WhiteNoise,
};

/// Combines one pixel's initial reservoir with its temporal history and a few
/// spatial neighbors into a single reservoir.
///
/// Reads only the initial buffer and the *previous* frame's temporal buffer,
/// so pixels never observe each other's output of this very pass and the
/// whole dispatch is free to run in any order.
#[allow(clippy::too_many_arguments)]
pub fn resample(
    config: &Config,
    params: &PassParams,
    camera: &Camera,
    prev_camera: &Camera,
    frame: &FrameInputs,
    initial: &[Vec4],
    prev: &[Vec4],
    screen_pos: UVec2,
) -> PathReservoir {
    let screen_idx = camera.screen_to_idx(screen_pos);
    let mut wnoise = WhiteNoise::new(params.seed, screen_pos);

    if frame.is_miss(screen_idx) {
        return PathReservoir::default();
    }

    let point = frame.visible_points[screen_idx].xyz();
    let normal = frame.visible_normals[screen_idx].xyz();
    let surface = frame.surface(screen_idx);

    let mut main = PathReservoir::default();
    let mut main_pdf = 0.0;

    // This pixel's own candidate goes in first - it is the unconditional
    // fallback that keeps the pixel alive when every reused candidate gets
    // rejected below.

    let lhs = PathReservoir::read(initial, screen_idx);

    if lhs.m > 0.0 {
        let lhs_pdf = lhs.sample.target_pdf(point, normal);

        if main.merge(&mut wnoise, &lhs, lhs_pdf) {
            main_pdf = lhs_pdf;
        }
    }

    // Temporal history, located via the motion vector where the host
    // provides one and by camera reprojection otherwise; rejected when it
    // falls off-screen or when the surface it was collected on no longer
    // resembles ours.

    let reprojection = Reprojection::find(
        prev_camera,
        screen_pos,
        point,
        frame.motion_vectors[screen_idx],
    );

    if reprojection.is_some() {
        let prev_idx = prev_camera.screen_to_idx(reprojection.prev_pos_round());
        let mut rhs = PathReservoir::read(prev, prev_idx);

        if !rhs.is_empty() {
            let prev_origin = prev_camera.origin.xyz();

            let lhs_surface = Surface {
                normal,
                depth: point.distance(prev_origin),
            };

            let rhs_surface = Surface {
                normal: rhs.sample.visible_normal,
                depth: rhs.sample.visible_point.distance(prev_origin),
            };

            if lhs_surface.is_similar_to(&rhs_surface, config) {
                rhs.clamp_m(config.temporal_m_clamp);

                let rhs_pdf = rhs.sample.target_pdf(point, normal);

                if main.merge(&mut wnoise, &rhs, rhs_pdf) {
                    main_pdf = rhs_pdf;
                }
            }
        }
    }

    // Spatial neighbors at jittered disk offsets; candidates come from the
    // initial buffer, which nobody writes during this pass.

    let mut nth = 0;

    while nth < config.spatial_samples {
        nth += 1;

        let rhs_pos = camera.contain(
            (screen_pos.as_vec2()
                + wnoise.sample_disk() * config.spatial_radius)
                .as_ivec2(),
        );

        if rhs_pos == screen_pos {
            continue;
        }

        let rhs_idx = camera.screen_to_idx(rhs_pos);

        if frame.is_miss(rhs_idx) {
            continue;
        }

        if !surface.is_similar_to(&frame.surface(rhs_idx), config) {
            continue;
        }

        let rhs = PathReservoir::read(initial, rhs_idx);

        if rhs.is_empty() {
            continue;
        }

        let rhs_pdf = rhs.sample.target_pdf(point, normal);

        if main.merge(&mut wnoise, &rhs, rhs_pdf) {
            main_pdf = rhs_pdf;
        }
    }

    // ---

    main.normalize(main_pdf);

    // The merged reservoir now belongs to this pixel; next frame's temporal
    // validation compares against the surface it was resampled for
    main.sample.visible_point = point;
    main.sample.visible_normal = normal;
    main.sample.pdf = main_pdf;
    main
}
