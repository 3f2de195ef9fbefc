mod double_buffered;

use glam::{UVec2, Vec4};

pub use self::double_buffered::*;

/// Reservoir storage owned by the pipeline.
///
/// Each pixel occupies four `Vec4` records per buffer (see
/// [`PathReservoir`](restir_kernels::PathReservoir)); the temporal buffer
/// keeps two such halves so that frames can alternate between them.
///
/// Buffers live for as long as the viewport keeps its size - a resolution
/// change reallocates everything, which also resets the temporal history.
#[derive(Debug)]
pub struct Buffers {
    pub viewport: UVec2,

    /// This frame's raw candidates; written once per frame by the
    /// candidate-generation stage.
    pub initial: Vec<Vec4>,

    /// Resampled reservoirs, double-buffered across frames.
    pub temporal: DoubleBuffered<Vec<Vec4>>,

    /// Snapshot of this frame's resampled reservoirs, read by the
    /// final-shading stage.
    pub spatial: Vec<Vec4>,
}

impl Buffers {
    pub fn new(viewport: UVec2) -> Self {
        let len = 4 * (viewport.x as usize) * (viewport.y as usize);

        log::debug!(
            "Allocating reservoir buffers; viewport={}x{}",
            viewport.x,
            viewport.y
        );

        Self {
            viewport,
            initial: vec![Vec4::ZERO; len],
            temporal: DoubleBuffered::new(
                vec![Vec4::ZERO; len],
                vec![Vec4::ZERO; len],
            ),
            spatial: vec![Vec4::ZERO; len],
        }
    }
}
