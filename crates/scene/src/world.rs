//! First-person walk through a textured block world with two penguins.

use crate::block_map::{BlockMap, Cell};
use crate::config::DemoConfig;
use crate::demo::{Demo, DemoKind};
use crate::penguin::{Penguin, PenguinLayout};
use cglab_common::{Color, FrameClock, ModelMatrix};
use cglab_input::{Action, KeyMap, MoveDir, PanDir};
use cglab_render::{Frame, LookAtCamera, Material, Shape, TextureSlot};
use glam::Mat4;

/// Height of the ground plane and of every block's base.
pub const GROUND_Y: f32 = -0.75;
pub const FLOOR_SIZE: f32 = 32.0;
pub const SKY_SIZE: f32 = 75.0;

/// Camera movement shared by the first-person demos.
#[derive(Debug, Clone)]
pub struct Walker {
    pub camera: LookAtCamera,
    pub move_speed: f32,
    pub pan_degrees: f32,
    /// Degrees of drag rotation per surface height.
    pub drag_degrees: f32,
    surface_height: u32,
}

impl Walker {
    pub fn new(config: &DemoConfig) -> Self {
        let cam = &config.camera;
        Self {
            camera: LookAtCamera {
                fov_degrees: cam.fov_degrees,
                aspect: config.aspect(),
                ..LookAtCamera::default()
            },
            move_speed: cam.move_speed,
            pan_degrees: cam.pan_degrees,
            drag_degrees: cam.drag_degrees,
            surface_height: config.height.max(1),
        }
    }

    /// Apply a movement action. Returns false for actions it does not handle.
    pub fn handle(&mut self, action: Action) -> bool {
        let cam = &mut self.camera;
        match action {
            Action::Move(MoveDir::Forward) => cam.move_forward(self.move_speed),
            Action::Move(MoveDir::Backward) => cam.move_backward(self.move_speed),
            Action::Move(MoveDir::Left) => cam.move_left(self.move_speed),
            Action::Move(MoveDir::Right) => cam.move_right(self.move_speed),
            Action::Pan(PanDir::Left) => cam.pan_left(self.pan_degrees),
            Action::Pan(PanDir::Right) => cam.pan_right(self.pan_degrees),
            Action::Drag { dx, dy } => {
                let factor = self.drag_degrees / self.surface_height as f32;
                cam.pan_left(factor * dx);
                cam.pan_up(factor * dy);
            }
            _ => return false,
        }
        true
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_height = height.max(1);
        self.camera.aspect = width as f32 / self.surface_height as f32;
    }

    /// Point the frame at this camera.
    pub fn apply(&self, frame: &mut Frame) {
        frame.view = self.camera.view_matrix();
        frame.projection = self.camera.projection_matrix();
        frame.eye = self.camera.eye;
    }
}

#[derive(Debug, Clone)]
pub struct WorldDemo {
    pub walker: Walker,
    pub map: BlockMap,
    /// Whole-scene rotation about Y in degrees.
    pub global_angle: f32,
    fps: Option<f32>,
}

impl WorldDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            walker: Walker::new(config),
            map: BlockMap::default(),
            global_angle: 0.0,
            fps: None,
        }
    }

    /// Cell under the camera's look-at point.
    pub fn target_cell(&self) -> Option<(usize, usize)> {
        let at = self.walker.camera.at;
        self.map.cell_at_world(at.x, at.z)
    }

    fn edit(&mut self, cell: Cell) -> bool {
        match self.target_cell() {
            Some((x, z)) => {
                self.map.set(x, z, cell);
                tracing::info!(x, z, ?cell, "block edited");
                true
            }
            None => {
                let at = self.walker.camera.at;
                tracing::debug!(x = at.x, z = at.z, "block edit out of range");
                false
            }
        }
    }

    pub fn place_block(&mut self) -> bool {
        self.edit(Cell::Block)
    }

    pub fn remove_block(&mut self) -> bool {
        self.edit(Cell::Empty)
    }

    fn surroundings() -> [Shape; 2] {
        let floor = ModelMatrix::identity()
            .translate(0.0, GROUND_Y, 0.0)
            .scale(FLOOR_SIZE, 0.0, FLOOR_SIZE)
            .translate(-0.5, 0.0, -0.5);
        let sky = ModelMatrix::identity()
            .scale(SKY_SIZE, SKY_SIZE, SKY_SIZE)
            .translate(-0.5, -0.5, -0.5);
        [
            Shape::cube(floor, Material::textured(TextureSlot::Grass)),
            Shape::cube(sky, Material::textured(TextureSlot::Sky)),
        ]
    }

    fn penguins() -> [Penguin; 2] {
        let layout = PenguinLayout::block_world();
        let baby = ModelMatrix::identity()
            .scale(0.5, 0.5, 0.5)
            .translate(-31.0, -0.25, 0.0)
            .rotate(-90.0, 0.0, 1.0, 0.0);
        let mom = ModelMatrix::identity()
            .translate(0.0, -0.5, 0.0)
            .rotate(180.0, 0.0, 1.0, 0.0);
        [Penguin::new(baby, layout), Penguin::new(mom, layout)]
    }

    fn blocks(&self) -> impl Iterator<Item = Shape> + '_ {
        self.map.occupied().map(|(x, z, cell)| {
            let base = ModelMatrix::identity().translate(x as f32 - 16.0, GROUND_Y, z as f32 - 16.0);
            match cell {
                Cell::Wall => Shape::cube(base.scale(1.0, 0.5, 1.0), Material::textured(TextureSlot::Block)),
                _ => Shape::cube(base, Material::textured(TextureSlot::Dirt)),
            }
        })
    }
}

impl Demo for WorldDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::World
    }

    fn key_map(&self) -> KeyMap {
        KeyMap::block_world()
    }

    fn handle(&mut self, action: Action) {
        if self.walker.handle(action) {
            return;
        }
        match action {
            Action::AddBlock => {
                self.place_block();
            }
            Action::RemoveBlock => {
                self.remove_block();
            }
            _ => {}
        }
    }

    fn update(&mut self, clock: &FrameClock) {
        self.fps = clock.fps();
    }

    fn frame(&self) -> Frame {
        let mut frame = Frame::new(Color::BLACK);
        self.walker.apply(&mut frame);
        frame.global_rotation = Mat4::from_rotation_y(self.global_angle.to_radians());
        frame.shapes.extend(Self::surroundings());
        for penguin in Self::penguins() {
            frame.shapes.extend(penguin.shapes());
        }
        frame.shapes.extend(self.blocks());
        if let Some(fps) = self.fps {
            frame.annotations.push(format!("fps: {fps:.2}"));
        }
        frame
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.walker.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const EPS: f32 = 1e-4;

    fn demo() -> WorldDemo {
        WorldDemo::new(&DemoConfig::default())
    }

    #[test]
    fn scene_contains_every_cell() {
        let demo = demo();
        let frame = demo.frame();
        let occupied = demo.map.occupied().count();
        assert_eq!(frame.shapes.len(), 2 + 20 + occupied);
        assert_eq!(frame.clear_color, Color::BLACK);
        assert_eq!(frame.shapes[0].material, Material::textured(TextureSlot::Grass));
        assert_eq!(frame.shapes[1].material, Material::textured(TextureSlot::Sky));
    }

    #[test]
    fn wasd_moves_by_configured_speed() {
        let mut demo = demo();
        demo.handle(Action::Move(MoveDir::Forward));
        assert!((demo.walker.camera.eye - Vec3::new(0.0, 0.0, 1.5)).length() < EPS);
        demo.handle(Action::Move(MoveDir::Right));
        assert!((demo.walker.camera.eye - Vec3::new(0.5, 0.0, 1.5)).length() < EPS);
    }

    #[test]
    fn pan_turns_the_view() {
        let mut demo = demo();
        demo.handle(Action::Pan(PanDir::Left));
        let f = demo.walker.camera.forward().normalize();
        // Looking down -Z, a left turn swings toward -X.
        assert!(f.x < 0.0);
        assert!((f.angle_between(-Vec3::Z).to_degrees() - 10.0).abs() < 1e-2);
    }

    #[test]
    fn drag_scales_with_surface_height() {
        let mut demo = demo();
        demo.resize(800, 100);
        demo.handle(Action::Drag { dx: 1.0, dy: 0.0 });
        let f = demo.walker.camera.forward().normalize();
        assert!((f.angle_between(-Vec3::Z).to_degrees() - 1.0).abs() < 1e-2);
        assert_eq!(demo.walker.camera.aspect, 8.0);
    }

    #[test]
    fn add_and_remove_block_at_look_target() {
        let mut demo = demo();
        // at = (0, 0, 0) -> cell (16, 16)
        assert_eq!(demo.target_cell(), Some((16, 16)));
        let before = demo.map.get(16, 16);
        demo.handle(Action::AddBlock);
        assert_eq!(demo.map.get(16, 16), Some(Cell::Block));
        demo.handle(Action::RemoveBlock);
        assert_eq!(demo.map.get(16, 16), Some(Cell::Empty));
        assert_ne!(before, None);
    }

    #[test]
    fn edits_outside_the_map_are_ignored() {
        let mut demo = demo();
        demo.walker.camera.at = Vec3::new(40.0, 0.0, 0.0);
        let map = demo.map.clone();
        assert!(!demo.place_block());
        assert_eq!(demo.map, map);
    }

    #[test]
    fn blocks_sit_on_the_grid() {
        let mut demo = demo();
        demo.map = BlockMap::parse("12").unwrap();
        let frame = demo.frame();
        let wall = &frame.shapes[22];
        let block = &frame.shapes[23];
        assert!((wall.origin() - Vec3::new(-16.0, GROUND_Y, -16.0)).length() < EPS);
        assert_eq!(wall.material.surface, cglab_render::Surface::Texture(TextureSlot::Block));
        assert!((block.origin() - Vec3::new(-15.0, GROUND_Y, -16.0)).length() < EPS);
        assert_eq!(block.material.surface, cglab_render::Surface::Texture(TextureSlot::Dirt));
    }
}
