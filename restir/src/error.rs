/// Fatal pipeline errors.
///
/// Only resource-level problems surface here; per-pixel failures (degenerate
/// candidates, failed reprojections, occluded samples) degrade to empty
/// reservoirs or black pixels and are never reported as errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid viewport size: {width}x{height}")]
    InvalidViewportSize { width: u32, height: u32 },

    #[error(
        "buffer `{name}` holds {actual} entries, but the viewport requires \
         {expected}"
    )]
    BufferSizeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}
