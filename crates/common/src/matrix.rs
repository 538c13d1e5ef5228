//! Model matrix construction with post-multiplying semantics.
//!
//! `m.translate(..).rotate(..).scale(..)` yields `m * T * R * S`, so a vertex
//! is scaled first and translated last. Hierarchical shapes copy a parent's
//! matrix and keep appending local transforms.

use crate::error::MathError;
use glam::{Mat3, Mat4, Vec3};

/// Determinants smaller than this are treated as singular.
const SINGULAR_EPSILON: f32 = 1e-12;

/// A 4x4 transform built up by appending local operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMatrix(Mat4);

impl Default for ModelMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Mat4> for ModelMatrix {
    fn from(m: Mat4) -> Self {
        Self(m)
    }
}

impl From<ModelMatrix> for Mat4 {
    fn from(m: ModelMatrix) -> Self {
        m.0
    }
}

impl ModelMatrix {
    pub fn identity() -> Self {
        Self(Mat4::IDENTITY)
    }

    pub fn from_mat4(m: Mat4) -> Self {
        Self(m)
    }

    pub fn mat4(&self) -> Mat4 {
        self.0
    }

    pub fn translate(mut self, x: f32, y: f32, z: f32) -> Self {
        self.0 *= Mat4::from_translation(Vec3::new(x, y, z));
        self
    }

    pub fn scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.0 *= Mat4::from_scale(Vec3::new(x, y, z));
        self
    }

    /// Rotate by `degrees` about an arbitrary axis. A zero axis leaves the
    /// matrix unchanged.
    pub fn rotate(mut self, degrees: f32, x: f32, y: f32, z: f32) -> Self {
        if let Some(axis) = Vec3::new(x, y, z).try_normalize() {
            self.0 *= Mat4::from_axis_angle(axis, degrees.to_radians());
        }
        self
    }

    /// Append another transform: `self * other`.
    pub fn multiply(mut self, other: impl Into<Mat4>) -> Self {
        self.0 *= other.into();
        self
    }

    pub fn inverse(&self) -> Result<Mat4, MathError> {
        invert(self.0)
    }

    /// Inverse-transpose of the upper 3x3, for transforming normals.
    pub fn normal_matrix(&self) -> Mat3 {
        normal_matrix(self.0)
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.0.transform_point3(p)
    }

    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.0.transform_vector3(v)
    }
}

/// Invert `m`, failing on a (near) zero determinant.
pub fn invert(m: Mat4) -> Result<Mat4, MathError> {
    let det = m.determinant();
    if det.abs() < SINGULAR_EPSILON || !det.is_finite() {
        return Err(MathError::Singular(det));
    }
    Ok(m.inverse())
}

/// Inverse-transpose of the upper 3x3 of `model`.
///
/// Flattened models (the zero-thickness floor) have no inverse; they get the
/// identity so their normals pass through untouched.
pub fn normal_matrix(model: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(model);
    let det = m.determinant();
    if det.abs() < SINGULAR_EPSILON || !det.is_finite() {
        return Mat3::IDENTITY;
    }
    m.inverse().transpose()
}

/// Right-handed view matrix looking from `eye` toward `at`.
pub fn look_at(eye: Vec3, at: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, at, up)
}

/// Right-handed perspective with OpenGL clip depth (-1..1).
pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, near, far)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn operations_apply_last_first() {
        // Scale is applied to the vertex before translation.
        let m = ModelMatrix::identity().translate(1.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
        assert!(close(m.transform_point(Vec3::ONE), Vec3::new(3.0, 2.0, 2.0)));
    }

    #[test]
    fn rotate_in_degrees() {
        let m = ModelMatrix::identity().rotate(90.0, 0.0, 0.0, 1.0);
        assert!(close(m.transform_vector(Vec3::X), Vec3::Y));
    }

    #[test]
    fn rotate_zero_axis_is_noop() {
        let m = ModelMatrix::identity().rotate(45.0, 0.0, 0.0, 0.0);
        assert_eq!(m, ModelMatrix::identity());
    }

    #[test]
    fn pivot_rotation_keeps_pivot_fixed() {
        // translate to pivot, rotate, translate back
        let m = ModelMatrix::identity()
            .translate(0.0, 0.25, 0.0)
            .rotate(30.0, 0.0, 0.0, 1.0)
            .translate(0.0, -0.25, 0.0);
        assert!(close(m.transform_point(Vec3::new(0.0, 0.25, 0.0)), Vec3::new(0.0, 0.25, 0.0)));
    }

    #[test]
    fn inverse_round_trips() {
        let m = ModelMatrix::identity()
            .translate(1.0, 2.0, 3.0)
            .rotate(33.0, 1.0, 1.0, 0.0)
            .scale(0.5, 2.0, 1.0);
        let inv = m.inverse().unwrap();
        let p = Vec3::new(0.3, -0.2, 0.9);
        assert!(close(inv.transform_point3(m.transform_point(p)), p));
    }

    #[test]
    fn flattened_matrix_is_singular() {
        let m = ModelMatrix::identity().scale(32.0, 0.0, 32.0);
        assert!(matches!(m.inverse(), Err(MathError::Singular(_))));
        assert_eq!(m.normal_matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular() {
        let m = ModelMatrix::identity().scale(1.0, 4.0, 1.0);
        // A slanted surface normal under non-uniform scale.
        let n = (m.normal_matrix() * Vec3::new(1.0, 1.0, 0.0)).normalize();
        let tangent = m.transform_vector(Vec3::new(1.0, -1.0, 0.0));
        assert!(n.dot(tangent).abs() < EPS);
    }

    #[test]
    fn look_at_maps_target_to_negative_z() {
        let view = look_at(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, Vec3::Y);
        assert!(close(view.transform_point3(Vec3::ZERO), Vec3::new(0.0, 0.0, -2.0)));
    }

    #[test]
    fn perspective_uses_gl_depth_range() {
        let proj = perspective(90.0, 1.0, 0.1, 1000.0);
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -1000.0));
        assert!((near.z + 1.0).abs() < 1e-3);
        assert!((far.z - 1.0).abs() < 1e-3);
    }
}
