use crate::Ray;

/// Host-provided shading service.
///
/// Spatial and temporal reuse can propagate samples that are occluded from
/// the current pixel, so the final shading stage re-checks visibility through
/// this interface; the resampling core itself never traces rays.
pub trait Evaluator: Sync {
    /// Returns whether `ray` reaches its target unobstructed.
    ///
    /// `max_depth` bounds the number of bounces the host may take when
    /// tracing through transmissive geometry; opaque-only hosts can ignore
    /// it.
    fn is_visible(&self, ray: Ray, max_depth: u32) -> bool;
}
