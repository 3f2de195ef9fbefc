use bytemuck::{Pod, Zeroable};
use glam::{vec2, IVec2, Mat4, UVec2, Vec2, Vec3, Vec4, Vec4Swizzles};

/// Camera state consumed by the resampling kernels.
///
/// `projection_view` must be free of any jitter the host applies for
/// anti-aliasing purposes - otherwise reprojecting through last frame's
/// camera lands on slightly wrong pixels.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct Camera {
    pub projection_view: Mat4,
    pub origin: Vec4,
    pub screen: Vec4,
}

impl Camera {
    pub fn new(projection_view: Mat4, origin: Vec3, viewport: UVec2) -> Self {
        Self {
            projection_view,
            origin: origin.extend(0.0),
            screen: viewport.as_vec2().extend(0.0).extend(0.0),
        }
    }

    /// Given a point in world-coordinates, returns it in clip-coordinates.
    pub fn world_to_clip(&self, pos: Vec3) -> Vec4 {
        self.projection_view * pos.extend(1.0)
    }

    /// Given a point in world-coordinates, returns it in screen-coordinates.
    pub fn world_to_screen(&self, pos: Vec3) -> Vec2 {
        self.clip_to_screen(self.world_to_clip(pos))
    }

    /// Given a point in clip-coordinates, returns it in screen-coordinates.
    pub fn clip_to_screen(&self, pos: Vec4) -> Vec2 {
        let ndc = pos.xy() / pos.w;
        let ndc = vec2(ndc.x, -ndc.y);

        (0.5 * ndc + 0.5) * self.screen.xy()
    }

    /// Given a point in screen-coordinates, returns a unique index for it;
    /// used to index screen-space buffers.
    pub fn screen_to_idx(&self, pos: UVec2) -> usize {
        (pos.y * (self.screen.x as u32) + pos.x) as usize
    }

    pub fn screen_size(&self) -> UVec2 {
        self.screen.xy().as_uvec2()
    }

    /// Mirrors given point back into the screen; used to keep spatial
    /// neighbors of pixels near the screen's edges in-bounds.
    pub fn contain(&self, pos: IVec2) -> UVec2 {
        let max = self.screen.xy().as_ivec2() - 1;
        let mut pos = pos;

        if pos.x < 0 {
            pos.x = -pos.x;
        }

        if pos.y < 0 {
            pos.y = -pos.y;
        }

        if pos.x > max.x {
            pos.x = 2 * max.x - pos.x;
        }

        if pos.y > max.y {
            pos.y = 2 * max.y - pos.y;
        }

        pos.clamp(IVec2::ZERO, max.max(IVec2::ZERO)).as_uvec2()
    }

    /// Returns whether given point lays inside the screen.
    pub fn contains(&self, pos: IVec2) -> bool {
        let screen_size = self.screen.xy().as_ivec2();

        pos.x >= 0
            && pos.y >= 0
            && pos.x < screen_size.x
            && pos.y < screen_size.y
    }
}
