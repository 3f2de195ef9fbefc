use glam::{Vec4, Vec4Swizzles};

use crate::{Config, Evaluator, PathReservoir};

/// Resolves one pixel's final color from its resampled reservoir.
///
/// Reused samples come with no visibility guarantee - a neighbor's light
/// might be occluded from our side - so the chosen sample gets one final
/// visibility check before it is allowed to contribute; occluded samples are
/// discarded, not replaced.
pub fn shade<E>(
    config: &Config,
    evaluator: &E,
    reservoirs: &[Vec4],
    screen_idx: usize,
) -> Vec4
where
    E: Evaluator,
{
    let reservoir = PathReservoir::read(reservoirs, screen_idx);

    if reservoir.is_empty()
        || reservoir.w <= 0.0
        || !reservoir.sample.exists()
    {
        return Vec4::ZERO;
    }

    let ray = reservoir.sample.ray(reservoir.sample.visible_point);

    if !evaluator.is_visible(ray, config.max_trace_depth) {
        return Vec4::ZERO;
    }

    (reservoir.sample.radiance * reservoir.w).extend(1.0)
}
