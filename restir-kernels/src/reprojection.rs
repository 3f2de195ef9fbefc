use glam::{vec2, UVec2, Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::Camera;

/// Result of mapping a world-space point into the previous frame's pixel
/// coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reprojection {
    pub prev_x: f32,
    pub prev_y: f32,
    pub confidence: f32,
}

impl Reprojection {
    /// Locates given pixel in the previous frame.
    ///
    /// Pixels carrying a valid motion vector follow it directly, which also
    /// tracks geometry that moved between frames; everywhere else the visible
    /// point gets reprojected through the previous frame's camera, which only
    /// accounts for camera motion.
    ///
    /// Coordinates that end up behind the camera or outside the screen yield
    /// an empty reprojection - their temporal history is simply absent.
    pub fn find(
        prev_camera: &Camera,
        screen_pos: UVec2,
        point: Vec3,
        motion: Vec4,
    ) -> Self {
        if motion.w > 0.0 {
            let pos = screen_pos.as_vec2() + motion.xy();

            if !prev_camera.contains(pos.round().as_ivec2()) {
                return Self::default();
            }

            return Self {
                prev_x: pos.x,
                prev_y: pos.y,
                confidence: 1.0,
            };
        }

        let clip = prev_camera.world_to_clip(point);

        if clip.w <= 0.0 {
            return Self::default();
        }

        let pos = prev_camera.clip_to_screen(clip);

        if !prev_camera.contains(pos.round().as_ivec2()) {
            return Self::default();
        }

        Self {
            prev_x: pos.x,
            prev_y: pos.y,
            confidence: 1.0,
        }
    }

    pub fn is_some(&self) -> bool {
        self.confidence > 0.0
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub fn prev_pos(&self) -> Vec2 {
        vec2(self.prev_x, self.prev_y)
    }

    pub fn prev_pos_round(&self) -> UVec2 {
        self.prev_pos().round().as_uvec2()
    }
}
