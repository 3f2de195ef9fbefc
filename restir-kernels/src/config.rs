/// Tuning knobs of the resampling pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of spatial neighbors inspected per pixel; bounds the per-pixel
    /// work of the resampling pass.
    pub spatial_samples: u32,

    /// Screen-space radius, in pixels, within which spatial neighbors are
    /// picked.
    pub spatial_radius: f32,

    /// Maximum relative depth difference between two surfaces before their
    /// pixels stop reusing each other's samples.
    pub max_depth_diff: f32,

    /// Minimum dot product between two surface normals before their pixels
    /// stop reusing each other's samples; 0.9 corresponds to roughly 25
    /// degrees of divergence.
    pub min_normal_dot: f32,

    /// Upper bound for the temporal history's sample count.
    ///
    /// Lower values keep the image more reactive (fresh candidates retain
    /// influence, at the cost of extra variance), higher values let stale
    /// history dominate longer.
    pub temporal_m_clamp: f32,

    /// Maximum trace depth hint forwarded to the host's evaluator when
    /// re-checking visibility.
    pub max_trace_depth: u32,

    /// Seed for the per-frame noise; `None` draws fresh entropy every frame,
    /// `Some` gives a deterministic replay.
    pub seed: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spatial_samples: 8,
            spatial_radius: 32.0,
            max_depth_diff: 0.1,
            min_normal_dot: 0.9,
            temporal_m_clamp: 20.0,
            max_trace_depth: 3,
            seed: None,
        }
    }
}
