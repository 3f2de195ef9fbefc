use glam::{vec3, Vec3};

pub trait Vec3Ext
where
    Self: Sized,
{
    /// Returns luminance of this color-vector.
    fn luma(self) -> f32;
}

impl Vec3Ext for Vec3 {
    fn luma(self) -> f32 {
        self.dot(vec3(0.2126, 0.7152, 0.0722))
    }
}

/// Normalizes given vector, returning zero for degenerate inputs.
pub fn safe_normalize(vec: Vec3) -> Vec3 {
    let len_sq = vec.length_squared();

    if len_sq <= 1.0e-12 {
        Vec3::ZERO
    } else {
        vec / len_sq.sqrt()
    }
}
