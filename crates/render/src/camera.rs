use cglab_common::matrix::{look_at, perspective};
use cglab_common::vector::rotate_about;
use glam::{Mat4, Vec3};

/// Squared sine of the smallest angle allowed between the view and `up`.
const MIN_TILT_SIN_SQ: f32 = 1e-6;

/// Look-at camera driven by eye, target and up vectors.
///
/// Movement translates eye and target together, panning swings the target
/// around the eye. This is the first-person walker of the block world and
/// lighting demos.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtCamera {
    pub eye: Vec3,
    pub at: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for LookAtCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 2.0),
            at: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 90.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl LookAtCamera {
    /// Unnormalized view direction `at - eye`.
    pub fn forward(&self) -> Vec3 {
        self.at - self.eye
    }

    fn shift(&mut self, delta: Vec3) {
        self.eye += delta;
        self.at += delta;
    }

    pub fn move_forward(&mut self, speed: f32) {
        let f = self.forward().normalize_or_zero();
        self.shift(f * speed);
    }

    pub fn move_backward(&mut self, speed: f32) {
        let b = (self.eye - self.at).normalize_or_zero();
        self.shift(b * speed);
    }

    pub fn move_left(&mut self, speed: f32) {
        let s = self.up.cross(self.forward()).normalize_or_zero();
        self.shift(s * speed);
    }

    pub fn move_right(&mut self, speed: f32) {
        let s = self.forward().cross(self.up).normalize_or_zero();
        self.shift(s * speed);
    }

    /// Swing the target counter-clockwise (seen from above) about `up`.
    pub fn pan_left(&mut self, degrees: f32) {
        let f = rotate_about(self.forward(), self.up, degrees);
        self.at = self.eye + f;
    }

    pub fn pan_right(&mut self, degrees: f32) {
        self.pan_left(-degrees);
    }

    /// Tilt the target about the camera's right axis.
    /// A tilt that would leave the view parallel to `up` is ignored.
    pub fn pan_up(&mut self, degrees: f32) {
        let f = self.forward();
        let right = f.cross(self.up);
        if right.length_squared() <= f32::EPSILON {
            return;
        }
        let tilted = rotate_about(f, right, degrees);
        let off_axis = tilted.normalize_or_zero().cross(self.up.normalize_or_zero());
        if off_axis.length_squared() < MIN_TILT_SIN_SQ {
            return;
        }
        self.at = self.eye + tilted;
    }

    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.eye, self.at, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        perspective(self.fov_degrees, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera orbiting a target point, driven by mouse drags and scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Radians around +Y, zero looking down -Z.
    pub yaw: f32,
    /// Radians above the horizon.
    pub pitch: f32,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 10.0,
            yaw: 0.0,
            pitch: 0.0,
            fov_degrees: 80.0,
            aspect: 2.0,
            near: 0.1,
            far: 100.0,
            min_distance: 1.0,
            max_distance: 80.0,
            sensitivity: 0.005,
        }
    }
}

impl OrbitCamera {
    const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

    /// Orbit camera whose eye starts at `eye`.
    pub fn from_position(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(f32::EPSILON);
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            ..Self::default()
        }
    }

    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    /// Rotate around the target by a pixel drag.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Move toward (positive) or away from the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(self.min_distance, self.max_distance);
    }

    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        perspective(self.fov_degrees, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn default_camera() {
        let cam = LookAtCamera::default();
        assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 2.0));
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn move_forward_translates_eye_and_target() {
        let mut cam = LookAtCamera::default();
        cam.move_forward(0.5);
        assert!(close(cam.eye, Vec3::new(0.0, 0.0, 1.5)));
        assert!(close(cam.at, Vec3::new(0.0, 0.0, -0.5)));
        cam.move_backward(0.5);
        assert!(close(cam.eye, Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn strafing_is_perpendicular() {
        let mut cam = LookAtCamera::default();
        cam.move_left(1.0);
        assert!(close(cam.eye, Vec3::new(-1.0, 0.0, 2.0)));
        cam.move_right(2.0);
        assert!(close(cam.eye, Vec3::new(1.0, 0.0, 2.0)));
        assert!(close(cam.forward(), Vec3::new(0.0, 0.0, -2.0)));
    }

    #[test]
    fn pan_keeps_eye_and_distance() {
        let mut cam = LookAtCamera::default();
        cam.pan_left(90.0);
        assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 2.0));
        // looking down -Z, a left turn faces -X
        assert!(close(cam.at, Vec3::new(-2.0, 0.0, 2.0)));
        cam.pan_right(90.0);
        assert!(close(cam.at, Vec3::ZERO));
    }

    #[test]
    fn pan_up_tilts_target() {
        let mut cam = LookAtCamera::default();
        cam.pan_up(45.0);
        // right axis is +X; a positive turn about it lifts -Z toward +Y
        let h = 2.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!(close(cam.at, Vec3::new(0.0, h, 2.0 - h)));
    }

    #[test]
    fn pan_up_stops_short_of_vertical() {
        let mut cam = LookAtCamera::default();
        cam.pan_up(90.0);
        assert!(close(cam.at, Vec3::ZERO));
        cam.pan_up(45.0);
        let tilted = cam.at;
        cam.pan_up(45.0);
        assert!(close(cam.at, tilted));
        assert!(cam.view_matrix().to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn orbit_from_position_round_trips() {
        let eye = Vec3::new(0.0, 12.0, 30.0);
        let target = Vec3::new(0.0, 12.0, 0.0);
        let cam = OrbitCamera::from_position(eye, target);
        assert!(close(cam.eye(), eye));
        assert!((cam.distance - 30.0).abs() < EPS);
    }

    #[test]
    fn orbit_pitch_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.orbit(0.0, 1_000_000.0);
        assert!(cam.pitch <= 89.0_f32.to_radians() + EPS);
        assert!(!cam.view_matrix().col(0).x.is_nan());
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.zoom(1000.0);
        assert_eq!(cam.distance, cam.min_distance);
        cam.zoom(-1000.0);
        assert_eq!(cam.distance, cam.max_distance);
    }
}
