//! Orbit-camera showcase of spinning primitives under directional light.
//!
//! The full variant scatters seeded-random cubes, spheres and cylinders;
//! the basic one shows one of each at fixed spots with a fixed camera.

use crate::config::DemoConfig;
use crate::demo::{Demo, DemoKind};
use cglab_common::{Color, FrameClock, ModelMatrix};
use cglab_input::{Action, KeyMap};
use cglab_render::{
    DirectionalLight, Frame, Lighting, Material, MeshKind, OrbitCamera, PointLight, Shape,
    TextureSlot,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const EYE: Vec3 = Vec3::new(0.0, 12.0, 30.0);
pub const TARGET: Vec3 = Vec3::new(0.0, 12.0, 0.0);
const LIGHT_FROM: Vec3 = Vec3::new(0.0, 10.0, 10.0);
const POINT_LIGHT_AT: Vec3 = Vec3::new(0.0, 10.0, 0.0);
/// Half-extent of the cube random props are placed in.
const SPREAD: f32 = 10.0;
const SKY_SIZE: f32 = 80.0;

/// One spinning primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prop {
    pub mesh: MeshKind,
    pub position: Vec3,
    pub size: Vec3,
    pub material: Material,
    /// Radians per second about both X and Y.
    pub spin_rate: f32,
}

impl Prop {
    pub fn model(&self, t: f32) -> ModelMatrix {
        let angle = (t * self.spin_rate).to_degrees();
        let s = self.size;
        let m = ModelMatrix::identity()
            .translate(self.position.x, self.position.y, self.position.z)
            .rotate(angle, 1.0, 0.0, 0.0)
            .rotate(angle, 0.0, 1.0, 0.0)
            .scale(s.x, s.y, s.z);
        // The cube mesh has its corner at the origin.
        match self.mesh {
            MeshKind::Cube => m.translate(-0.5, -0.5, -0.5),
            _ => m,
        }
    }
}

fn random_position(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.random_range(-SPREAD..SPREAD),
        rng.random_range(-SPREAD..SPREAD),
        rng.random_range(-SPREAD..SPREAD),
    )
}

fn random_color(rng: &mut StdRng) -> Color {
    Color::from_hex(rng.random_range(0..0xff_ffff))
}

fn sky_cube() -> Material {
    Material::textured(TextureSlot::Sky)
}

/// Ten textured cubes, five spheres and five cylinders.
pub fn scatter(seed: u64) -> Vec<Prop> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut props = Vec::with_capacity(20);
    for i in 0..10 {
        props.push(Prop {
            mesh: MeshKind::Cube,
            position: random_position(&mut rng),
            size: Vec3::ONE,
            material: sky_cube(),
            spin_rate: 2.0 + i as f32 * 0.1,
        });
    }
    for _ in 0..5 {
        let radius = rng.random_range(0.5..2.5);
        let color = random_color(&mut rng);
        props.push(Prop {
            mesh: MeshKind::Sphere,
            position: random_position(&mut rng),
            size: Vec3::splat(radius),
            material: Material::flat(color).lit().with_specular(),
            spin_rate: 0.1,
        });
    }
    for _ in 0..5 {
        let radius = rng.random_range(0.5..1.5);
        let height = rng.random_range(1.0..6.0);
        let color = random_color(&mut rng);
        props.push(Prop {
            mesh: MeshKind::Cylinder,
            position: random_position(&mut rng),
            size: Vec3::new(radius, height, radius),
            material: Material::flat(color).lit(),
            spin_rate: 0.05,
        });
    }
    props
}

/// One cube, a red sphere and a green cylinder in a row.
pub fn basic_props() -> Vec<Prop> {
    vec![
        Prop {
            mesh: MeshKind::Cube,
            position: Vec3::ZERO,
            size: Vec3::ONE,
            material: sky_cube(),
            spin_rate: 2.0,
        },
        Prop {
            mesh: MeshKind::Sphere,
            position: Vec3::new(-5.0, 0.0, 0.0),
            size: Vec3::ONE,
            material: Material::flat(Color::from_hex(0xff0000)).lit().with_specular(),
            spin_rate: 0.1,
        },
        Prop {
            mesh: MeshKind::Cylinder,
            position: Vec3::new(5.0, 0.0, 0.0),
            size: Vec3::new(1.0, 3.0, 1.0),
            material: Material::flat(Color::from_hex(0x00ff00)).lit(),
            spin_rate: 0.0,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct ShowcaseDemo {
    pub camera: OrbitCamera,
    basic: bool,
    props: Vec<Prop>,
    time: f32,
}

impl ShowcaseDemo {
    pub fn new(config: &DemoConfig) -> Self {
        let (target, props) = if config.basic_showcase {
            // No orbit controls: the camera looks straight down -Z.
            (EYE - Vec3::Z, basic_props())
        } else {
            (TARGET, scatter(config.seed))
        };
        let mut camera = OrbitCamera::from_position(EYE, target);
        camera.aspect = config.aspect();
        tracing::debug!(basic = config.basic_showcase, seed = config.seed, props = props.len(), "showcase built");
        Self {
            camera,
            basic: config.basic_showcase,
            props,
            time: 0.0,
        }
    }

    pub fn is_basic(&self) -> bool {
        self.basic
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn lighting(&self) -> Lighting {
        let directional = Some(DirectionalLight {
            direction: (Vec3::ZERO - LIGHT_FROM).normalize(),
            color: Color::WHITE,
            intensity: 1.0,
        });
        if self.basic {
            return Lighting {
                enabled: true,
                ambient: 0.0,
                point: None,
                directional,
                spot: None,
            };
        }
        Lighting {
            enabled: true,
            ambient: 0.5,
            point: Some(PointLight {
                position: POINT_LIGHT_AT,
                color: Color::WHITE,
                intensity: 1.0,
            }),
            directional,
            spot: None,
        }
    }
}

impl Demo for ShowcaseDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Showcase
    }

    fn key_map(&self) -> KeyMap {
        KeyMap::empty()
    }

    fn handle(&mut self, action: Action) {
        if self.basic {
            return;
        }
        match action {
            Action::Drag { dx, dy } => self.camera.orbit(dx, dy),
            Action::Zoom { delta } => self.camera.zoom(delta),
            _ => {}
        }
    }

    fn update(&mut self, clock: &FrameClock) {
        self.time = clock.elapsed;
    }

    fn frame(&self) -> Frame {
        let mut frame = Frame::new(Color::BLACK);
        frame.view = self.camera.view_matrix();
        frame.projection = self.camera.projection_matrix();
        frame.eye = self.camera.eye();
        frame.lighting = self.lighting();

        if !self.basic {
            let e = frame.eye;
            let sky = ModelMatrix::identity()
                .translate(e.x, e.y, e.z)
                .scale(-SKY_SIZE, -SKY_SIZE, -SKY_SIZE)
                .translate(-0.5, -0.5, -0.5);
            frame.push(Shape::cube(sky, sky_cube()));
        }
        for prop in &self.props {
            frame.push(Shape::new(prop.mesh, prop.model(self.time), prop.material));
        }
        frame
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn full() -> ShowcaseDemo {
        ShowcaseDemo::new(&DemoConfig::default())
    }

    fn basic() -> ShowcaseDemo {
        ShowcaseDemo::new(&DemoConfig {
            basic_showcase: true,
            ..DemoConfig::default()
        })
    }

    #[test]
    fn scatter_is_reproducible() {
        assert_eq!(scatter(7), scatter(7));
        assert_ne!(scatter(7), scatter(8));
    }

    #[test]
    fn scatter_respects_ranges() {
        let props = scatter(42);
        assert_eq!(props.len(), 20);
        for (i, p) in props.iter().enumerate() {
            assert!(p.position.abs().max_element() <= SPREAD);
            match p.mesh {
                MeshKind::Cube => {
                    assert!((p.spin_rate - (2.0 + i as f32 * 0.1)).abs() < EPS);
                    assert!(!p.material.lit);
                }
                MeshKind::Sphere => {
                    assert!((0.5..2.5).contains(&p.size.x));
                    assert!(p.material.specular);
                }
                MeshKind::Cylinder => {
                    assert!((0.5..1.5).contains(&p.size.x));
                    assert!((1.0..6.0).contains(&p.size.y));
                }
                MeshKind::Triangle => panic!("unexpected triangle"),
            }
        }
    }

    #[test]
    fn camera_starts_behind_the_scene() {
        let demo = full();
        assert!((demo.camera.eye() - EYE).length() < EPS);
        assert_eq!(demo.camera.target, TARGET);
        assert_eq!(demo.camera.fov_degrees, 80.0);
    }

    #[test]
    fn props_spin_in_place() {
        let prop = basic_props()[0];
        let center = Vec3::splat(0.5);
        let a = prop.model(0.0).transform_point(center);
        let b = prop.model(1.3).transform_point(center);
        assert!(a.length() < EPS && b.length() < EPS);
        assert_ne!(prop.model(0.0), prop.model(1.3));
    }

    #[test]
    fn full_frame_has_sky_and_props() {
        let mut demo = full();
        demo.update(&FrameClock::at(2.0));
        let frame = demo.frame();
        assert_eq!(frame.shapes.len(), 21);
        assert_eq!(frame.shapes[0].material, sky_cube());
        assert!(frame.lighting.point.is_some());
        assert_eq!(frame.lighting.ambient, 0.5);
    }

    #[test]
    fn basic_variant_is_fixed() {
        let mut demo = basic();
        let eye = demo.camera.eye();
        demo.handle(Action::Drag { dx: 100.0, dy: 0.0 });
        demo.handle(Action::Zoom { delta: 5.0 });
        assert!((demo.camera.eye() - eye).length() < EPS);
        let frame = demo.frame();
        assert_eq!(frame.shapes.len(), 3);
        assert!(frame.lighting.point.is_none());
        assert_eq!(frame.shapes[1].material.color, Color::RED);
    }

    #[test]
    fn orbit_and_zoom_move_the_eye() {
        let mut demo = full();
        let before = demo.camera.distance;
        demo.handle(Action::Zoom { delta: 5.0 });
        assert!((demo.camera.distance - (before - 5.0)).abs() < EPS);
        demo.handle(Action::Drag { dx: 100.0, dy: 0.0 });
        assert!((demo.camera.eye() - demo.camera.target).length() - demo.camera.distance < EPS);
        assert!(demo.camera.eye().x.abs() > 0.1);
    }

    #[test]
    fn light_points_at_origin() {
        let l = full().lighting().directional.unwrap();
        assert!((l.direction - Vec3::new(0.0, -1.0, -1.0).normalize()).length() < EPS);
    }
}
