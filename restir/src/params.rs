use glam::UVec2;

/// Per-frame scalar state of the pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeParams {
    pub viewport: UVec2,
    pub pixel_count: usize,
    pub frame: u32,

    /// Selects which temporal buffer half is "current" this frame; the other
    /// half holds last frame's reservoirs.
    pub alternate: bool,
}

impl RuntimeParams {
    /// Advances to the next frame.
    ///
    /// Called exactly once per frame, after all stages have completed - this
    /// is the only moment the current/previous buffer roles may swap.
    pub fn flip(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        self.alternate = !self.alternate;
    }
}
