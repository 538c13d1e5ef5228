//! Hierarchical penguin shared by the block world and the lit scene.
//!
//! Every part starts from a copy of its parent's matrix and appends local
//! transforms, so moving the root moves the whole bird.

use cglab_common::{Color, ModelMatrix};
use cglab_render::{Material, Shape};
use glam::Vec3;

pub const COAT: Color = Color::rgba(0.05, 0.05, 0.05, 0.8);
pub const BELLY: Color = Color::WHITE;
pub const ORANGE: Color = Color::rgb(1.0, 0.65, 0.0);

/// Part offsets in body space (the unit cube the body is scaled from).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenguinLayout {
    pub stomach: Vec3,
    /// Offsets in head space.
    pub beak: Vec3,
    pub left_eye: Vec3,
    pub right_eye: Vec3,
    pub right_foot: Vec3,
    pub left_foot: Vec3,
    pub right_wing: Vec3,
    pub left_wing: Vec3,
    /// Hinge points; `None` keeps the wings rigid.
    pub right_hinge: Option<Vec3>,
    pub left_hinge: Option<Vec3>,
}

impl PenguinLayout {
    /// Faces -Z, wings fixed.
    pub const fn block_world() -> Self {
        Self {
            stomach: Vec3::new(0.05, 0.05, -0.05),
            beak: Vec3::new(0.4, 0.5, -0.3),
            left_eye: Vec3::new(0.2, 0.7, -0.05),
            right_eye: Vec3::new(0.75, 0.7, -0.05),
            right_foot: Vec3::new(0.2, -0.1, -0.15),
            left_foot: Vec3::new(0.55, -0.1, -0.15),
            right_wing: Vec3::new(1.0, 0.35, 0.3),
            left_wing: Vec3::new(-0.1, 0.35, 0.3),
            right_hinge: None,
            left_hinge: None,
        }
    }

    /// Faces +Z, wings hinged at the shoulder.
    pub const fn lit_scene() -> Self {
        Self {
            stomach: Vec3::new(0.05, 0.05, 1.0),
            beak: Vec3::new(0.4, 0.5, 0.8),
            left_eye: Vec3::new(0.2, 0.7, 0.95),
            right_eye: Vec3::new(0.75, 0.7, 0.95),
            right_foot: Vec3::new(0.2, -0.1, 0.2),
            left_foot: Vec3::new(0.55, -0.1, 0.2),
            right_wing: Vec3::new(1.0, 0.35, 0.3),
            left_wing: Vec3::new(-0.15, 0.35, 0.3),
            right_hinge: Some(Vec3::new(0.0, 0.5, 0.0)),
            left_hinge: Some(Vec3::new(0.15, 0.5, 0.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penguin {
    pub root: ModelMatrix,
    pub layout: PenguinLayout,
    /// Degrees about Z, applied at the hinge.
    pub left_wing: f32,
    pub right_wing: f32,
}

fn offset(m: ModelMatrix, v: Vec3) -> ModelMatrix {
    m.translate(v.x, v.y, v.z)
}

fn hinged(m: ModelMatrix, hinge: Option<Vec3>, degrees: f32) -> ModelMatrix {
    match hinge {
        Some(h) => offset(m, h).rotate(degrees, 0.0, 0.0, 1.0).translate(-h.x, -h.y, -h.z),
        None => m,
    }
}

impl Penguin {
    pub fn new(root: ModelMatrix, layout: PenguinLayout) -> Self {
        Self {
            root,
            layout,
            left_wing: 0.0,
            right_wing: 0.0,
        }
    }

    /// Parts in draw order: body, stomach, head, beak, eyes, feet, wings.
    pub fn shapes(&self) -> Vec<Shape> {
        let l = &self.layout;
        let flat = |m: ModelMatrix, color: Color| Shape::cube(m, Material::flat(color));

        let body = self.root.translate(0.0, -0.2, 0.0).scale(0.5, 0.7, 0.5);
        let head = body.translate(0.1, 0.65, 0.1).scale(0.8, 0.8, 0.8);

        let right_wing = hinged(offset(body, l.right_wing), l.right_hinge, self.right_wing);
        let left_wing = hinged(offset(body, l.left_wing), l.left_hinge, -self.left_wing);

        vec![
            flat(body, COAT),
            flat(offset(body, l.stomach).scale(0.9, 0.9, 0.1), BELLY),
            flat(head, COAT),
            flat(offset(head, l.beak).scale(0.25, 0.25, 0.5), ORANGE),
            flat(offset(head, l.left_eye).scale(0.1, 0.1, 0.1), BELLY),
            flat(offset(head, l.right_eye).scale(0.1, 0.1, 0.1), BELLY),
            flat(offset(body, l.right_foot).scale(0.3, 0.1, 1.0), ORANGE),
            flat(offset(body, l.left_foot).scale(0.3, 0.1, 1.0), ORANGE),
            flat(right_wing.scale(0.15, 0.65, 0.4), COAT),
            flat(left_wing.scale(0.15, 0.65, 0.4), COAT),
        ]
    }
}
