//! Phong-style lighting shared by the GPU shader and CPU-side checks.

use crate::frame::Material;
use cglab_common::Color;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Exponent of the specular highlight.
pub const SHININESS: f32 = 64.0;
/// Weight of the specular term.
pub const SPECULAR_STRENGTH: f32 = 0.8;
/// Attenuation applied outside a spotlight cone.
pub const SPOT_OUTSIDE_FACTOR: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Direction the light travels.
    pub direction: Vec3,
    pub color: Color,
    pub intensity: f32,
}

/// Cone restriction on the point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    pub direction: Vec3,
    /// Cosine of the half-angle.
    pub cutoff: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub enabled: bool,
    pub ambient: f32,
    pub point: Option<PointLight>,
    pub directional: Option<DirectionalLight>,
    pub spot: Option<SpotLight>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self::off()
    }
}

impl Lighting {
    /// No lighting: every material shows its base color.
    pub fn off() -> Self {
        Self {
            enabled: false,
            ambient: 0.0,
            point: None,
            directional: None,
            spot: None,
        }
    }
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Color of the normal-visualization surface.
pub fn normal_color(normal: Vec3) -> [f32; 3] {
    let n = (normal.normalize_or_zero() + Vec3::ONE) / 2.0;
    n.to_array()
}

/// Lit RGB for a fragment with the given base color.
///
/// `normal` and `position` are in world space.
pub fn shade(
    base: [f32; 3],
    normal: Vec3,
    position: Vec3,
    eye: Vec3,
    material: &Material,
    lighting: &Lighting,
) -> [f32; 3] {
    if !lighting.enabled || !material.lit {
        return base;
    }
    let base = Vec3::from_array(base);
    let n = normal.normalize_or_zero();
    let mut rgb = base * lighting.ambient;

    if let Some(dir) = lighting.directional {
        let l = (-dir.direction).normalize_or_zero();
        let n_dot_l = n.dot(l).max(0.0);
        rgb += Vec3::from_array(dir.color.rgb_array()) * base * n_dot_l * dir.intensity;
    }

    if let Some(point) = lighting.point {
        let l = (point.position - position).normalize_or_zero();
        let n_dot_l = n.dot(l).max(0.0);
        rgb += Vec3::from_array(point.color.rgb_array()) * base * n_dot_l * point.intensity;

        if material.specular {
            let r = reflect(-l, n);
            let e = (eye - position).normalize_or_zero();
            let highlight = e.dot(r).max(0.0).powf(SHININESS) * SPECULAR_STRENGTH;
            rgb += Vec3::splat(highlight);
        }

        if let Some(spot) = lighting.spot {
            let intensity = l.dot(spot.direction.normalize_or_zero());
            if intensity > spot.cutoff {
                rgb *= smoothstep(spot.cutoff, 1.0, intensity);
            } else {
                rgb *= SPOT_OUTSIDE_FACTOR;
            }
        }
    }

    rgb.to_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn lit() -> Material {
        Material::flat(Color::WHITE).lit()
    }

    fn point_above() -> Lighting {
        Lighting {
            enabled: true,
            ambient: 0.2,
            point: Some(PointLight {
                position: Vec3::new(0.0, 1.0, 0.0),
                color: Color::WHITE,
                intensity: 0.7,
            }),
            directional: None,
            spot: None,
        }
    }

    #[test]
    fn disabled_lighting_returns_base() {
        let out = shade([0.3, 0.4, 0.5], Vec3::Y, Vec3::ZERO, Vec3::Z, &lit(), &Lighting::off());
        assert_eq!(out, [0.3, 0.4, 0.5]);
    }

    #[test]
    fn unlit_material_ignores_lights() {
        let m = Material::flat(Color::WHITE);
        let out = shade([0.3, 0.4, 0.5], Vec3::Y, Vec3::ZERO, Vec3::Z, &m, &point_above());
        assert_eq!(out, [0.3, 0.4, 0.5]);
    }

    #[test]
    fn facing_light_gets_ambient_plus_diffuse() {
        let out = shade([1.0, 1.0, 1.0], Vec3::Y, Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), &lit(), &point_above());
        assert!((out[0] - 0.9).abs() < EPS);
    }

    #[test]
    fn facing_away_gets_ambient_only() {
        let out = shade([1.0, 0.5, 0.0], -Vec3::Y, Vec3::ZERO, Vec3::Z, &lit(), &point_above());
        assert!((out[0] - 0.2).abs() < EPS);
        assert!((out[1] - 0.1).abs() < EPS);
    }

    #[test]
    fn specular_highlight_when_eye_on_reflection() {
        let m = lit().with_specular();
        // Light and eye both straight above: reflection hits the eye exactly.
        let out = shade([0.0, 0.0, 0.0], Vec3::Y, Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), &m, &point_above());
        assert!((out[0] - SPECULAR_STRENGTH).abs() < EPS);
    }

    #[test]
    fn spotlight_inside_and_outside_cone() {
        let mut lighting = point_above();
        lighting.spot = Some(SpotLight {
            direction: Vec3::Y,
            cutoff: (15.0_f32).to_radians().cos(),
        });
        // Directly below the light: inside the cone, dot == 1 -> factor 1.
        let inside = shade([1.0; 3], Vec3::Y, Vec3::ZERO, Vec3::Z, &lit(), &lighting);
        assert!((inside[0] - 0.9).abs() < EPS);
        // Far to the side: outside, scaled by 0.9.
        let p = Vec3::new(10.0, 0.0, 0.0);
        let unspotted = shade([1.0; 3], Vec3::Y, p, Vec3::Z, &lit(), &point_above());
        let outside = shade([1.0; 3], Vec3::Y, p, Vec3::Z, &lit(), &lighting);
        assert!((outside[0] - unspotted[0] * SPOT_OUTSIDE_FACTOR).abs() < EPS);
    }

    #[test]
    fn directional_light_uses_reverse_direction() {
        let lighting = Lighting {
            enabled: true,
            ambient: 0.5,
            point: None,
            directional: Some(DirectionalLight {
                direction: -Vec3::Y,
                color: Color::WHITE,
                intensity: 1.0,
            }),
            spot: None,
        };
        let out = shade([0.4; 3], Vec3::Y, Vec3::ZERO, Vec3::Z, &lit(), &lighting);
        assert!((out[0] - 0.6).abs() < EPS);
    }

    #[test]
    fn normal_visualization_maps_to_unit_cube() {
        assert_eq!(normal_color(Vec3::Y), [0.5, 1.0, 0.5]);
        assert_eq!(normal_color(-Vec3::X), [0.0, 0.5, 0.5]);
    }
}
