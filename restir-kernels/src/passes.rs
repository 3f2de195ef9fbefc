use bytemuck::{Pod, Zeroable};

/// Per-frame scalars handed to every kernel dispatch.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct PassParams {
    pub seed: u32,
    pub frame: u32,
}
