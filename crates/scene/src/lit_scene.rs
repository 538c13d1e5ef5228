//! Phong-lit scene: penguin, specular sphere and a block, under a moving
//! point light with an optional spotlight cone.

use crate::config::DemoConfig;
use crate::demo::{Demo, DemoKind};
use crate::penguin::{Penguin, PenguinLayout};
use crate::world::Walker;
use cglab_common::{Color, FrameClock, ModelMatrix};
use cglab_input::{Action, KeyMap};
use cglab_render::{
    Frame, Lighting, Material, MeshKind, PointLight, Shape, SpotLight, Surface, TextureSlot,
};
use glam::{Mat4, Vec3};

pub const AMBIENT: f32 = 0.2;
pub const LIGHT_INTENSITY: f32 = 0.7;
pub const DEFAULT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 1.0, -2.0);
/// Amplitude of the light's swing along X.
pub const LIGHT_SWING: f32 = 2.3;
pub const SPOT_HALF_ANGLE_DEGREES: f32 = 15.0;

const SKY_GRAY: Color = Color::rgb(0.8, 0.8, 0.8);
const MARKER: Color = Color::rgb(2.0, 2.0, 0.0);
const FLOOR_Y: f32 = -2.49;

#[derive(Debug, Clone)]
pub struct LitSceneDemo {
    pub walker: Walker,
    /// Whole-scene rotation about Y in degrees.
    pub global_angle: f32,
    pub light_position: Vec3,
    pub light_color: Color,
    pub light_on: bool,
    pub spotlight_on: bool,
    pub show_normals: bool,
    /// Light swings along X with time.
    pub light_animating: bool,
    pub left_wing: f32,
    pub right_wing: f32,
    animating: bool,
    fps: Option<f32>,
}

impl LitSceneDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            walker: Walker::new(config),
            global_angle: 0.0,
            light_position: DEFAULT_LIGHT_POSITION,
            light_color: Color::WHITE,
            light_on: true,
            spotlight_on: false,
            show_normals: false,
            light_animating: true,
            left_wing: 0.0,
            right_wing: 0.0,
            animating: false,
            fps: None,
        }
    }

    pub fn animating(&self) -> bool {
        self.animating
    }

    /// Turning wing animation off folds both wings.
    pub fn set_animating(&mut self, on: bool) {
        self.animating = on;
        if !on {
            self.left_wing = 0.0;
            self.right_wing = 0.0;
        }
    }

    /// Posing a wing by hand stops the animation.
    pub fn set_wings(&mut self, left: f32, right: f32) {
        self.animating = false;
        self.left_wing = left;
        self.right_wing = right;
    }

    /// Slider holds the negated angle.
    pub fn set_angle_from_slider(&mut self, value: f32) {
        self.global_angle = -value;
    }

    /// Color channels from 0..=255 sliders.
    pub fn set_light_color_bytes(&mut self, r: u8, g: u8, b: u8) {
        self.light_color = Color::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    }

    /// Position from sliders in hundredths of a unit.
    pub fn set_light_position_slider(&mut self, x: f32, y: f32, z: f32) {
        self.light_position = Vec3::new(x, y, z) / 100.0;
    }

    pub fn lighting(&self) -> Lighting {
        Lighting {
            enabled: self.light_on,
            ambient: AMBIENT,
            point: Some(PointLight {
                position: self.light_position,
                color: self.light_color,
                intensity: LIGHT_INTENSITY,
            }),
            directional: None,
            spot: self.spotlight_on.then(|| SpotLight {
                direction: Vec3::Y,
                cutoff: SPOT_HALF_ANGLE_DEGREES.to_radians().cos(),
            }),
        }
    }

    fn shapes(&self) -> Vec<Shape> {
        let unit = ModelMatrix::identity;
        let p = self.light_position;

        let mut shapes = vec![
            // Inside-out so its faces point at the viewer.
            Shape::cube(
                unit().scale(-5.0, -5.0, -5.0).translate(-0.5, -0.5, -0.5),
                Material::flat(SKY_GRAY),
            ),
            Shape::cube(
                unit()
                    .translate(0.0, FLOOR_Y, 0.0)
                    .scale(10.0, 0.0, 10.0)
                    .translate(-0.5, 0.0, -0.5),
                Material::textured(TextureSlot::Grass),
            ),
            Shape::cube(
                unit()
                    .translate(p.x, p.y, p.z)
                    .scale(-0.1, -0.1, -0.1)
                    .translate(-0.5, -0.5, -0.5),
                Material::flat(MARKER),
            ),
        ];

        let mut penguin = Penguin::new(
            unit().scale(2.0, 2.0, 2.0).translate(-0.25, -1.0, -1.5),
            PenguinLayout::lit_scene(),
        );
        penguin.left_wing = self.left_wing;
        penguin.right_wing = self.right_wing;
        shapes.extend(penguin.shapes());

        shapes.push(Shape::new(
            MeshKind::Sphere,
            unit().translate(-0.75, -1.0, 0.5).scale(0.25, 0.25, 0.25),
            Material::textured(TextureSlot::Dirt).with_specular(),
        ));
        shapes.push(Shape::cube(
            unit().translate(0.5, -1.3, 0.0).scale(0.5, 0.5, 0.5),
            Material::textured(TextureSlot::Block),
        ));

        for shape in &mut shapes {
            shape.material = shape.material.lit();
            if self.show_normals {
                shape.material = shape.material.with_surface(Surface::Normal);
            }
        }
        shapes
    }
}

impl Demo for LitSceneDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Lighting
    }

    fn key_map(&self) -> KeyMap {
        KeyMap::lighting()
    }

    fn handle(&mut self, action: Action) {
        if self.walker.handle(action) {
            return;
        }
        match action {
            Action::ToggleAnimation => self.set_animating(!self.animating),
            Action::ToggleNormals => self.show_normals = !self.show_normals,
            Action::ToggleLight => self.light_on = !self.light_on,
            Action::ToggleSpotlight => self.spotlight_on = !self.spotlight_on,
            _ => {}
        }
    }

    fn update(&mut self, clock: &FrameClock) {
        let t = clock.elapsed;
        self.fps = clock.fps();
        if self.light_animating {
            self.light_position.x = LIGHT_SWING * t.cos();
        }
        if self.animating {
            let flap = (10.0 * t).sin();
            let angle = if flap > 0.0 { flap * 30.0 } else { 0.0 };
            self.left_wing = angle;
            self.right_wing = angle;
        }
    }

    fn frame(&self) -> Frame {
        let mut frame = Frame::new(Color::BLACK);
        self.walker.apply(&mut frame);
        frame.global_rotation = Mat4::from_rotation_y(self.global_angle.to_radians());
        frame.lighting = self.lighting();
        frame.shapes = self.shapes();
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

    const EPS: f32 = 1e-4;

    fn demo() -> LitSceneDemo {
        LitSceneDemo::new(&DemoConfig::default())
    }

    #[test]
    fn scene_layout() {
        let frame = demo().frame();
        // sky, floor, marker, 10 penguin parts, sphere, cube
        assert_eq!(frame.shapes.len(), 15);
        assert!(frame.shapes.iter().all(|s| s.material.lit));
        let specular: Vec<_> = frame.shapes.iter().filter(|s| s.material.specular).collect();
        assert_eq!(specular.len(), 1);
        assert_eq!(specular[0].mesh, MeshKind::Sphere);
        assert!(frame.lighting.enabled);
        assert!(frame.lighting.spot.is_none());
    }

    #[test]
    fn light_swings_along_x() {
        let mut demo = demo();
        demo.update(&FrameClock::at(1.0));
        assert!((demo.light_position.x - LIGHT_SWING * 1.0_f32.cos()).abs() < EPS);
        assert_eq!(demo.light_position.y, 1.0);

        demo.light_animating = false;
        demo.set_light_position_slider(50.0, 100.0, -150.0);
        demo.update(&FrameClock::at(2.0));
        assert_eq!(demo.light_position, Vec3::new(0.5, 1.0, -1.5));
    }

    #[test]
    fn marker_follows_the_light() {
        let mut demo = demo();
        demo.light_animating = false;
        demo.light_position = Vec3::new(1.0, 2.0, 3.0);
        let marker = demo.frame().shapes[2];
        let center = ModelMatrix::from_mat4(marker.model).transform_point(Vec3::splat(0.5));
        assert!((center - demo.light_position).length() < EPS);
    }

    #[test]
    fn toggles() {
        let mut demo = demo();
        demo.handle(Action::ToggleLight);
        assert!(!demo.frame().lighting.enabled);
        demo.handle(Action::ToggleSpotlight);
        let spot = demo.lighting().spot.unwrap();
        assert!((spot.cutoff - 15.0_f32.to_radians().cos()).abs() < EPS);
        demo.handle(Action::ToggleNormals);
        assert!(demo.frame().shapes.iter().all(|s| s.material.surface == Surface::Normal));
    }

    #[test]
    fn wing_slider_stops_animation() {
        let mut demo = demo();
        demo.handle(Action::ToggleAnimation);
        demo.update(&FrameClock::at(0.1));
        assert!(demo.left_wing > 0.0);
        demo.set_wings(10.0, 20.0);
        assert!(!demo.animating());
        demo.update(&FrameClock::at(0.2));
        assert_eq!((demo.left_wing, demo.right_wing), (10.0, 20.0));
        demo.set_animating(false);
        assert_eq!(demo.left_wing, 0.0);
    }

    #[test]
    fn light_color_from_bytes() {
        let mut demo = demo();
        demo.set_light_color_bytes(255, 0, 51);
        assert_eq!(demo.light_color, Color::rgb(1.0, 0.0, 0.2));
    }

    #[test]
    fn global_angle_slider_is_negated() {
        let mut demo = demo();
        demo.set_angle_from_slider(90.0);
        let frame = demo.frame();
        let p = frame.global_rotation.transform_point3(Vec3::X);
        assert!((p - Vec3::Z).length() < EPS);
    }
}
