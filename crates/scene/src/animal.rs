//! Blocky penguin built from flat-placed cubes, with leg and wing animation
//! and a shift-click "poke" that makes it hop, sway and flash pink.

use crate::demo::{Demo, DemoKind};
use cglab_common::{Color, FrameClock, ModelMatrix};
use cglab_input::{Action, KeyMap};
use cglab_render::{Frame, Material, MeshKind, Shape};

const CLEAR: Color = Color::rgb(0.5, 0.9, 0.9);
const BLACK: Color = Color::rgba(0.05, 0.05, 0.05, 0.8);
const PINK: Color = Color::rgb(0.9, 0.5, 0.5);
const WHITE: Color = Color::WHITE;
const ORANGE: Color = Color::rgb(1.0, 0.65, 0.0);
const PATTERN: Color = Color::rgb(0.8, 0.8, 0.8);

/// Radians of jump phase per second while poked.
pub const JUMP_RATE: f32 = 4.8;
pub const JUMP_HEIGHT: f32 = 0.15;
pub const IDLE_BEAK_DEPTH: f32 = 0.2;

/// Offsets of the triangle pattern on the stomach.
const PATTERN_SPOTS: [[f32; 2]; 5] = [
    [-0.2, -0.2],
    [0.1, -0.1],
    [0.1, -0.4],
    [-0.1, 0.0],
    [-0.15, -0.5],
];

/// Joint angles in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pose {
    pub left_wing: f32,
    pub right_wing: f32,
    pub left_leg: f32,
    pub right_leg: f32,
}

impl Pose {
    fn stride(&mut self, t: f32) {
        self.left_leg = 30.0 * (2.0 * t).sin();
        self.right_leg = -30.0 * (2.0 * t).sin();
    }

    fn flap(&mut self, angle: f32) {
        self.left_wing = angle;
        self.right_wing = angle;
    }
}

#[derive(Debug, Clone)]
pub struct AnimalDemo {
    /// Rotation about Y in degrees.
    pub angle_x: f32,
    /// Rotation about X in degrees.
    pub angle_y: f32,
    pub pose: Pose,
    animating: bool,
    poking: bool,
    jump_phase: f32,
    jump: f32,
    sway: f32,
    beak_depth: f32,
    fps: Option<f32>,
}

impl Default for AnimalDemo {
    fn default() -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            pose: Pose::default(),
            animating: false,
            poking: false,
            jump_phase: 0.0,
            jump: 0.0,
            sway: 0.0,
            beak_depth: IDLE_BEAK_DEPTH,
            fps: None,
        }
    }
}

impl AnimalDemo {
    /// Slider positions are the negated angles.
    pub fn set_angles_from_sliders(&mut self, x: f32, y: f32) {
        self.angle_x = -x;
        self.angle_y = -y;
    }

    pub fn sliders(&self) -> (f32, f32) {
        (-self.angle_x, -self.angle_y)
    }

    pub fn animating(&self) -> bool {
        self.animating
    }

    /// Turning animation off puts every joint back to rest.
    pub fn set_animating(&mut self, on: bool) {
        self.animating = on;
        if !on {
            self.pose = Pose::default();
        }
        tracing::debug!(on, "animal animation");
    }

    pub fn poking(&self) -> bool {
        self.poking
    }

    pub fn set_poking(&mut self, on: bool) {
        self.poking = on;
        if !on {
            self.jump_phase = 0.0;
            self.jump = 0.0;
            self.sway = 0.0;
            self.beak_depth = IDLE_BEAK_DEPTH;
        }
    }

    pub fn jump(&self) -> f32 {
        self.jump
    }

    pub fn beak_depth(&self) -> f32 {
        self.beak_depth
    }

    pub fn fps(&self) -> Option<f32> {
        self.fps
    }

    /// Whole-model rotation, hop and sway.
    pub fn global_matrix(&self) -> ModelMatrix {
        ModelMatrix::identity()
            .rotate(self.angle_x, 0.0, 1.0, 0.0)
            .rotate(self.angle_y, 1.0, 0.0, 0.0)
            .translate(0.0, self.jump, 0.0)
            .rotate(self.sway, 0.0, 1.0, 0.0)
    }

    fn shapes(&self) -> Vec<Shape> {
        let coat = if self.poking { PINK } else { BLACK };
        let p = &self.pose;
        let cube = |m: ModelMatrix, color: Color| Shape::cube(m, Material::flat(color));
        let at = |x: f32, y: f32, z: f32| ModelMatrix::identity().translate(x, y, z);

        let mut shapes = vec![
            cube(at(0.0, -0.2, 0.0).scale(0.5, 0.7, 0.5), coat),
            cube(at(0.0, -0.2, -0.25).scale(0.45, 0.65, 0.05), WHITE),
        ];
        for [x, y] in PATTERN_SPOTS {
            shapes.push(Shape::new(
                MeshKind::Triangle,
                at(x, y, -0.3).scale(0.05, 0.05, 0.05),
                Material::flat(PATTERN),
            ));
        }
        shapes.extend([
            cube(at(0.0, 0.3, 0.0).scale(0.4, 0.4, 0.4), coat),
            cube(at(0.0, 0.25, -0.3).scale(0.1, 0.1, self.beak_depth), ORANGE),
            // Feet, then upper legs.
            cube(at(-0.15, -0.8, -0.15).rotate(-p.right_leg, 1.0, 0.0, 0.0).scale(0.1, 0.1, 0.5), ORANGE),
            cube(at(0.15, -0.8, -0.15).rotate(-p.left_leg, 1.0, 0.0, 0.0).scale(0.1, 0.1, 0.5), ORANGE),
            cube(at(-0.15, -0.6, 0.0).rotate(-p.right_leg, 1.0, 0.0, 0.0).scale(0.1, 0.4, 0.15), ORANGE),
            cube(at(0.15, -0.6, 0.0).rotate(-p.left_leg, 1.0, 0.0, 0.0).scale(0.1, 0.4, 0.15), ORANGE),
            cube(at(-0.1, 0.4, -0.2).scale(0.05, 0.05, 0.05), WHITE),
            cube(at(0.1, 0.4, -0.2).scale(0.05, 0.05, 0.05), WHITE),
            cube(wing(0.27, p.right_wing), coat),
            cube(wing(-0.27, -p.left_wing), coat),
        ]);
        shapes
    }
}

/// Wing hinged at its top edge.
fn wing(x: f32, degrees: f32) -> ModelMatrix {
    ModelMatrix::identity()
        .translate(x, -0.1, 0.0)
        .translate(0.0, 0.25, 0.0)
        .rotate(degrees, 0.0, 0.0, 1.0)
        .translate(0.0, -0.25, 0.0)
        .scale(0.1, 0.5, 0.2)
}

impl Demo for AnimalDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Animal
    }

    fn key_map(&self) -> KeyMap {
        KeyMap::animal()
    }

    fn handle(&mut self, action: Action) {
        match action {
            Action::Drag { dx, dy } => {
                self.angle_x -= dx;
                self.angle_y += dy;
            }
            Action::PokeStart => self.set_poking(true),
            Action::PokeEnd => self.set_poking(false),
            Action::ToggleAnimation => self.set_animating(!self.animating),
            _ => {}
        }
    }

    fn update(&mut self, clock: &FrameClock) {
        let t = clock.elapsed;
        self.fps = clock.fps();

        if self.poking {
            self.jump_phase += JUMP_RATE * clock.dt;
            self.jump = self.jump_phase.sin() * JUMP_HEIGHT;
            self.sway = (0.5 * t).sin() * 60.0;
            self.pose.flap(((2.0 * t).sin() * 45.0).max(0.0));
            self.pose.stride(t);
            self.beak_depth = 0.3 + 0.15 * (5.0 * t).sin();
        }

        if self.animating {
            self.pose.stride(t);
            let flap = (10.0 * t).sin();
            self.pose.flap(if flap > 0.0 { flap * 30.0 } else { 0.0 });
        }
    }

    fn frame(&self) -> Frame {
        let mut frame = Frame::new(CLEAR);
        frame.global_rotation = self.global_matrix().mat4();
        frame.shapes = self.shapes();
        if let Some(fps) = self.fps {
            frame.annotations.push(format!("fps: {fps:.2}"));
        }
        frame
    }
}
