//! Common structs and per-pixel kernels used by the resampling pipeline.
//!
//! Everything in here is pure computation over plain slices - no allocation,
//! no I/O - so that each kernel can be dispatched over the pixel grid in
//! parallel and exercised deterministically from tests.

mod camera;
mod config;
mod evaluator;
mod frame;
mod noise;
mod normal;
mod passes;
mod ray;
mod reprojection;
mod resampling;
mod reservoir;
mod sampling;
mod shading;
mod surface;
mod utils;

pub use self::camera::*;
pub use self::config::*;
pub use self::evaluator::*;
pub use self::frame::*;
pub use self::noise::*;
pub use self::normal::*;
pub use self::passes::*;
pub use self::ray::*;
pub use self::reprojection::*;
pub use self::resampling::*;
pub use self::reservoir::*;
pub use self::sampling::*;
pub use self::shading::*;
pub use self::surface::*;
pub use self::utils::*;

pub mod prelude {
    pub use core::f32::consts::PI;

    pub use glam::*;

    pub use crate::*;
}
