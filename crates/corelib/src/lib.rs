//! Core types: math re-exports, Transform, Camera, OrbitController.

pub use glam::{Mat4, Vec3, vec3};

pub mod camera;
pub mod orbit;
pub mod transform;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_transform_is_scale_then_offset() {
        let t = transform::Transform::still(2.0, vec3(1.0, 2.0, 3.0));
        // S * T: the offset is applied first, then scaled.
        let m = t.matrix_at(0.0).to_cols_array();
        assert!((m[12] - 2.0).abs() < 1e-6);
        assert!((m[13] - 4.0).abs() < 1e-6);
        assert!((m[14] - 6.0).abs() < 1e-6);
        assert!((m[0] - 2.0).abs() < 1e-6);
        assert!((m[5] - 2.0).abs() < 1e-6);
        assert!((m[10] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn camera_pv_is_finite() {
        let cam = camera::Camera::new(vec3(0.0, 0.0, 4.0), camera::Lens::default(), 4.0 / 3.0);
        let a = cam.proj_view().to_cols_array();
        assert!(a.iter().all(|f| f.is_finite()));
    }

    #[test]
    fn default_orbit_camera_sees_origin() {
        let cam = orbit::OrbitController::default().camera(800.0 / 600.0);
        // The origin projects to the centre of clip space.
        let clip = cam.proj_view() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
