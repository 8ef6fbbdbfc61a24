//! Mouse-driven orbit around the origin.
//!
//! Angles are kept in degrees. Dragging one pixel turns the camera by
//! [`OrbitController::sensitivity`] degrees; pitch stays inside
//! [`PITCH_LIMIT_DEG`] so the view never flips over the pole.

use crate::{
    Vec3,
    camera::{Camera, Lens},
};

pub const PITCH_LIMIT_DEG: f32 = 89.0;

#[derive(Clone, Copy, Debug)]
pub struct OrbitController {
    /// Elevation above the XZ plane, degrees.
    pub pitch_deg: f32,
    /// Rotation around +Y, degrees.
    pub yaw_deg: f32,
    pub distance: f32,
    /// Degrees per pixel of cursor motion.
    pub sensitivity: f32,
    pub lens: Lens,
    dragging: bool,
    last_cursor: (f64, f64),
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            pitch_deg: 20.0,
            yaw_deg: -30.0,
            distance: 60.0,
            sensitivity: 0.3,
            lens: Lens::default(),
            dragging: false,
            last_cursor: (0.0, 0.0),
        }
    }
}

impl OrbitController {
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.dragging = true;
        self.last_cursor = (x, y);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Track the cursor. Only rotates while a drag is active; returns `true`
    /// when the view changed.
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        if !self.dragging {
            self.last_cursor = (x, y);
            return false;
        }
        let (lx, ly) = self.last_cursor;
        self.last_cursor = (x, y);

        let dx = (x - lx) as f32;
        let dy = (y - ly) as f32;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        self.yaw_deg += dx * self.sensitivity;
        self.pitch_deg = (self.pitch_deg + dy * self.sensitivity).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        true
    }

    /// Eye position on the sphere of radius `distance`.
    pub fn eye(&self) -> Vec3 {
        let pitch = self.pitch_deg.to_radians();
        let yaw = self.yaw_deg.to_radians();
        Vec3::new(
            self.distance * pitch.cos() * yaw.sin(),
            self.distance * pitch.sin(),
            self.distance * pitch.cos() * yaw.cos(),
        )
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::new(self.eye(), self.lens, aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_without_drag_is_ignored() {
        let mut orbit = OrbitController::default();
        assert!(!orbit.drag_to(100.0, 100.0));
        assert_eq!(orbit.yaw_deg, -30.0);
        assert_eq!(orbit.pitch_deg, 20.0);
    }

    #[test]
    fn drag_turns_by_sensitivity() {
        let mut orbit = OrbitController::default();
        orbit.begin_drag(10.0, 10.0);
        assert!(orbit.drag_to(20.0, 0.0));
        assert!((orbit.yaw_deg - (-27.0)).abs() < 1e-5);
        assert!((orbit.pitch_deg - 17.0).abs() < 1e-5);

        orbit.end_drag();
        assert!(!orbit.drag_to(500.0, 500.0));
        assert!((orbit.yaw_deg - (-27.0)).abs() < 1e-5);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut orbit = OrbitController::default();
        orbit.begin_drag(0.0, 0.0);
        orbit.drag_to(0.0, 10_000.0);
        assert_eq!(orbit.pitch_deg, PITCH_LIMIT_DEG);
        orbit.drag_to(0.0, -10_000.0);
        assert_eq!(orbit.pitch_deg, -PITCH_LIMIT_DEG);
    }

    #[test]
    fn eye_stays_on_sphere() {
        let mut orbit = OrbitController::default();
        assert!((orbit.eye().length() - orbit.distance).abs() < 1e-3);

        orbit.pitch_deg = 0.0;
        orbit.yaw_deg = 0.0;
        assert!((orbit.eye() - Vec3::new(0.0, 0.0, 60.0)).length() < 1e-4);
        orbit.pitch_deg = 90.0;
        assert!(orbit.eye().y > 59.99);
    }
}
