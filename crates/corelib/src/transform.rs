use crate::{Mat4, Vec3};

/// Model placement: uniform scale, spin around +Y, then an offset.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub scale: f32,
    /// Spin speed in radians per second.
    pub spin: f32,
    pub offset: Vec3,
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            spin: 0.0,
            offset: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn still(scale: f32, offset: Vec3) -> Self {
        Self {
            scale,
            spin: 0.0,
            offset,
        }
    }

    /// Build matrix = S * R_y(t * spin) * T, so the offset is applied in
    /// model space before spinning.
    #[inline]
    pub fn matrix_at(&self, seconds: f32) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_rotation_y(seconds * self.spin)
            * Mat4::from_translation(self.offset)
    }
}

impl Default for Transform {
    /// The viewer's turntable: scale 1.2, one radian per second, dropped by half a unit.
    fn default() -> Self {
        Self {
            scale: 1.2,
            spin: 1.0,
            offset: Vec3::new(0.0, -0.5, 0.0),
        }
    }
}
