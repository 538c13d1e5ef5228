//! Vector arithmetic on top of `glam::Vec3`.
//!
//! Add, subtract, scale, dot and cross are glam's operators. What lives here
//! are the derived quantities the vector canvas exercise reports.

use crate::error::MathError;
use glam::Vec3;

/// Euclidean length.
pub fn magnitude(v: Vec3) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`. A zero vector comes back unchanged.
pub fn normalize_or_keep(v: Vec3) -> Vec3 {
    let len = v.length();
    if len == 0.0 { v } else { v / len }
}

/// Component-wise division by a scalar.
pub fn divide(v: Vec3, s: f32) -> Result<Vec3, MathError> {
    if s == 0.0 {
        return Err(MathError::DivideByZero);
    }
    Ok(v / s)
}

/// Angle between `a` and `b` in degrees. `None` if either is a zero vector.
pub fn angle_between(a: Vec3, b: Vec3) -> Option<f32> {
    let denom = a.length() * b.length();
    if denom == 0.0 {
        return None;
    }
    // Rounding can push the cosine a hair past 1 for parallel vectors.
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Area of the triangle spanned by `a` and `b`.
pub fn triangle_area(a: Vec3, b: Vec3) -> f32 {
    a.cross(b).length() / 2.0
}

/// Rotate `v` by `degrees` about `axis` (right-hand rule).
pub fn rotate_about(v: Vec3, axis: Vec3, degrees: f32) -> Vec3 {
    match axis.try_normalize() {
        Some(axis) => glam::Quat::from_axis_angle(axis, degrees.to_radians()) * v,
        None => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn normalize_zero_is_noop() {
        assert_eq!(normalize_or_keep(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn normalize_unit_length() {
        let n = normalize_or_keep(Vec3::new(3.0, 4.0, 0.0));
        assert!((n.length() - 1.0).abs() < EPS);
        assert!((n.x - 0.6).abs() < EPS);
    }

    #[test]
    fn angle_between_axes() {
        let a = angle_between(Vec3::X, Vec3::Y).unwrap();
        assert!((a - 90.0).abs() < EPS);
        let b = angle_between(Vec3::new(1.0, 1.0, 0.0), Vec3::X).unwrap();
        assert!((b - 45.0).abs() < EPS);
    }

    #[test]
    fn angle_between_parallel_is_zero_not_nan() {
        let v = Vec3::new(0.1, 0.7, 0.0);
        let a = angle_between(v, v * 3.0).unwrap();
        assert!(a.abs() < 0.1);
    }

    #[test]
    fn angle_with_zero_vector_is_undefined() {
        assert!(angle_between(Vec3::ZERO, Vec3::X).is_none());
    }

    #[test]
    fn area_of_unit_right_triangle() {
        let area = triangle_area(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert!((area - 2.0).abs() < EPS);
    }

    #[test]
    fn divide_by_zero_is_error() {
        assert_eq!(divide(Vec3::ONE, 0.0), Err(MathError::DivideByZero));
        assert_eq!(divide(Vec3::splat(4.0), 2.0), Ok(Vec3::splat(2.0)));
    }

    #[test]
    fn rotate_about_up() {
        let r = rotate_about(Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0);
        assert!((r - Vec3::new(-1.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn rotate_about_zero_axis_is_noop() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(rotate_about(v, Vec3::ZERO, 45.0), v);
    }
}
