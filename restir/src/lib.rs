//! Spatiotemporal reservoir resampling over a pixel grid.
//!
//! Each frame runs three per-pixel stages in strict order:
//!
//! 1. candidate generation - packs the host's raw light samples into
//!    single-sample reservoirs,
//! 2. spatiotemporal resampling - merges each pixel's candidate with its
//!    reprojected history and a handful of screen-space neighbors,
//! 3. final shading - re-checks visibility of the surviving sample and
//!    resolves the output color.
//!
//! The pipeline owns all reservoir storage; the host provides per-pixel
//! inputs through [`FrameInputs`] and visibility through [`Evaluator`].

mod buffers;
mod error;
mod params;

use glam::{uvec2, UVec2, Vec4};
use rand::Rng;
use rayon::prelude::*;
use restir_kernels as kernels;
pub use restir_kernels::*;

pub use self::buffers::*;
pub use self::error::*;
pub use self::params::*;

pub struct Restir {
    config: Config,
    params: RuntimeParams,
    buffers: Option<Buffers>,
    prev_camera: Camera,
}

impl Restir {
    pub fn new(config: Config) -> Self {
        log::info!("Initializing");

        Self {
            config,
            params: RuntimeParams::default(),
            buffers: None,
            prev_camera: Camera::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn params(&self) -> &RuntimeParams {
        &self.params
    }

    /// Returns the reservoir storage, if any frame has been rendered yet.
    pub fn buffers(&self) -> Option<&Buffers> {
        self.buffers.as_ref()
    }

    /// Renders a single frame into `output` (one RGBA color per pixel).
    ///
    /// Stages execute in strict sequence; within a stage every pixel is
    /// processed independently, in no particular order. After all stages
    /// complete, the temporal buffer roles flip and the camera is captured
    /// for next frame's reprojection - the frame's only serial state
    /// transition.
    pub fn render<E>(
        &mut self,
        camera: &Camera,
        frame: FrameInputs<'_>,
        evaluator: &E,
        output: &mut [Vec4],
    ) -> Result<(), Error>
    where
        E: Evaluator,
    {
        let viewport = camera.screen_size();

        if viewport.x == 0 || viewport.y == 0 {
            return Err(Error::InvalidViewportSize {
                width: viewport.x,
                height: viewport.y,
            });
        }

        validate(viewport, &frame, output)?;

        let buffers = match &mut self.buffers {
            Some(buffers) if buffers.viewport == viewport => buffers,

            buffers => {
                self.params.viewport = viewport;
                self.params.pixel_count =
                    (viewport.x as usize) * (viewport.y as usize);

                // Fresh buffers invalidate the camera history as well - the
                // old camera's viewport no longer matches the temporal
                // halves, so reprojecting through it could index past them
                self.prev_camera = Camera::default();

                buffers.insert(Buffers::new(viewport))
            }
        };

        let seed = match self.config.seed {
            Some(seed) => seed ^ self.params.frame.wrapping_mul(0x9e3779b9),
            None => rand::thread_rng().gen(),
        };

        let pass = PassParams {
            seed,
            frame: self.params.frame,
        };

        let Buffers {
            initial,
            temporal,
            spatial,
            ..
        } = buffers;

        // Stage 1: one initial candidate reservoir per pixel

        initial.par_chunks_mut(4).enumerate().for_each(|(idx, out)| {
            let pos = uvec2((idx as u32) % viewport.x, (idx as u32) / viewport.x);
            let mut wnoise = WhiteNoise::new(pass.seed, pos);

            kernels::generate(&mut wnoise, &frame, idx).write(out, 0);
        });

        // Stage 2: merge candidates across time and space; reads last frame's
        // temporal half, writes this frame's

        let initial = &initial[..];
        let (curr, prev) = temporal.curr_and_past(self.params.alternate);

        curr.par_chunks_mut(4).enumerate().for_each(|(idx, out)| {
            let pos = uvec2((idx as u32) % viewport.x, (idx as u32) / viewport.x);

            kernels::resample(
                &self.config,
                &pass,
                camera,
                &self.prev_camera,
                &frame,
                initial,
                prev,
                pos,
            )
            .write(out, 0);
        });

        // The final-shading stage reads its own snapshot, while `curr` stays
        // behind as next frame's history

        spatial.copy_from_slice(curr);

        // Stage 3: bias-correction visibility check and color resolve

        let spatial = &spatial[..];

        output.par_iter_mut().enumerate().for_each(|(idx, color)| {
            *color = kernels::shade(&self.config, evaluator, spatial, idx);
        });

        // End-of-frame state transition; single-threaded, nothing is being
        // dispatched at this point

        self.params.flip();
        self.prev_camera = *camera;

        Ok(())
    }
}

fn validate(
    viewport: UVec2,
    frame: &FrameInputs<'_>,
    output: &[Vec4],
) -> Result<(), Error> {
    let expected = (viewport.x as usize) * (viewport.y as usize);

    let checks = [
        ("visible_points", frame.visible_points.len()),
        ("visible_normals", frame.visible_normals.len()),
        ("sample_points", frame.sample_points.len()),
        ("sample_normals", frame.sample_normals.len()),
        ("sample_radiance", frame.sample_radiance.len()),
        ("sample_pdfs", frame.sample_pdfs.len()),
        ("motion_vectors", frame.motion_vectors.len()),
        ("depths", frame.depths.len()),
        ("normals", frame.normals.len()),
        ("output", output.len()),
    ];

    for (name, actual) in checks {
        if actual != expected {
            return Err(Error::BufferSizeMismatch {
                name,
                expected,
                actual,
            });
        }
    }

    Ok(())
}
