//! Watermelon slice drawn with flat triangles in normalized device coordinates.

use crate::demo::{Demo, DemoKind};
use cglab_common::{Color, FrameClock};
use cglab_input::{Action, KeyMap};
use cglab_render::{FlatTriangle, Frame};
use glam::Vec2;

const CLEAR: Color = Color::rgb(0.8, 0.9, 1.0);
const FLESH: Color = Color::rgb(0.9, 0.2, 0.2);
const RIND: Color = Color::rgb(0.2, 0.7, 0.2);
const SEED: Color = Color::rgb(0.1, 0.1, 0.1);

const BODY: [[f32; 2]; 3] = [[-0.8, -0.2], [0.8, -0.2], [0.0, 0.6]];
const SKIN: [[f32; 2]; 4] = [[-0.8, -0.2], [-0.6, -0.4], [0.6, -0.4], [0.8, -0.2]];
const SEEDS: [[[f32; 2]; 3]; 4] = [
    [[-0.4, 0.1], [-0.35, 0.2], [-0.3, 0.1]],
    [[-0.1, -0.05], [-0.05, 0.05], [0.0, -0.05]],
    [[0.2, 0.05], [0.25, 0.15], [0.3, 0.05]],
    [[0.5, -0.1], [0.55, 0.0], [0.6, -0.1]],
];

fn triangle(points: [[f32; 2]; 3], color: Color) -> FlatTriangle {
    FlatTriangle {
        points: points.map(Vec2::from_array),
        color,
    }
}

/// Static picture; no state, no input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FruitDemo;

impl Demo for FruitDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Fruit
    }

    fn key_map(&self) -> KeyMap {
        KeyMap::empty()
    }

    fn handle(&mut self, _action: Action) {}

    fn update(&mut self, _clock: &FrameClock) {}

    fn frame(&self) -> Frame {
        let mut frame = Frame::new(CLEAR);
        let overlay = &mut frame.overlay;
        overlay.triangles.push(triangle(BODY, FLESH));
        overlay.push_fan(&SKIN.map(Vec2::from_array), RIND);
        overlay
            .triangles
            .extend(SEEDS.iter().map(|&seed| triangle(seed, SEED)));
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_has_body_skin_and_seeds() {
        let frame = FruitDemo.frame();
        let tris = &frame.overlay.triangles;
        assert_eq!(tris.len(), 1 + 2 + 4);
        assert_eq!(tris[0].color, FLESH);
        assert_eq!(tris[1].color, RIND);
        assert_eq!(tris[2].color, RIND);
        assert!(tris[3..].iter().all(|t| t.color == SEED));
        assert_eq!(frame.clear_color, CLEAR);
        assert!(frame.shapes.is_empty());
    }

    #[test]
    fn everything_stays_on_screen() {
        let frame = FruitDemo.frame();
        for tri in &frame.overlay.triangles {
            for p in tri.points {
                assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0);
            }
        }
    }

    #[test]
    fn seeds_sit_above_the_rind() {
        let frame = FruitDemo.frame();
        for seed in &frame.overlay.triangles[3..] {
            assert!(seed.points.iter().all(|p| p.y > -0.2));
        }
    }
}
