//! Viewing camera for the recentered mesh: always aimed at the origin, +Y up.

use crate::{Mat4, Vec3};

/// Perspective lens. The field of view is in degrees, like the orbit angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lens {
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_y_deg: 45.0,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub lens: Lens,
    pub aspect: f32,
}

impl Camera {
    pub fn new(eye: Vec3, lens: Lens, aspect: f32) -> Self {
        Self { eye, lens, aspect }
    }

    /// Width over height of a framebuffer; a zero side counts as one pixel.
    #[inline]
    pub fn aspect_of(width: u32, height: u32) -> f32 {
        width.max(1) as f32 / height.max(1) as f32
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, Vec3::ZERO, Vec3::Y)
    }

    /// glam's `perspective_rh` maps depth to [0, 1], which is what wgpu expects.
    #[inline]
    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.lens.fov_y_deg.to_radians(),
            self.aspect.max(1e-6),
            self.lens.z_near,
            self.lens.z_far,
        )
    }

    #[inline]
    pub fn proj_view(&self) -> Mat4 {
        self.proj() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ignores_zero_sides() {
        assert_eq!(Camera::aspect_of(800, 600), 800.0 / 600.0);
        assert_eq!(Camera::aspect_of(0, 0), 1.0);
        assert_eq!(Camera::aspect_of(640, 0), 640.0);
    }

    #[test]
    fn view_keeps_world_up() {
        let cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), Lens::default(), 1.0);
        let up = cam.view().transform_vector3(Vec3::Y);
        assert!((up - Vec3::Y).length() < 1e-6);
        let origin = cam.view().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-5);
    }
}
