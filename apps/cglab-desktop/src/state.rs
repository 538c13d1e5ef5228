use cglab_common::FrameClock;
use cglab_input::{Action, DragTracker, Key, MoveDir, PanDir};
use cglab_render::Frame;
use cglab_scene::animal::AnimalDemo;
use cglab_scene::fruit::FruitDemo;
use cglab_scene::lit_scene::LitSceneDemo;
use cglab_scene::showcase::ShowcaseDemo;
use cglab_scene::vectors::VectorDemo;
use cglab_scene::world::WorldDemo;
use cglab_scene::{Demo, DemoConfig, DemoKind};
use winit::keyboard::KeyCode;

/// Pixels of touchpad scroll per zoom unit.
const PIXELS_PER_ZOOM: f32 = 20.0;

/// The running demo, kept concrete so the control panel can reach its state.
pub enum ActiveDemo {
    Vectors(VectorDemo),
    Fruit(FruitDemo),
    Animal(AnimalDemo),
    World(WorldDemo),
    Lighting(LitSceneDemo),
    Showcase(ShowcaseDemo),
}

impl ActiveDemo {
    pub fn new(kind: DemoKind, config: &DemoConfig) -> Self {
        tracing::info!(demo = %kind, "starting demo");
        match kind {
            DemoKind::Vectors => Self::Vectors(VectorDemo::default()),
            DemoKind::Fruit => Self::Fruit(FruitDemo),
            DemoKind::Animal => Self::Animal(AnimalDemo::default()),
            DemoKind::World => Self::World(WorldDemo::new(config)),
            DemoKind::Lighting => Self::Lighting(LitSceneDemo::new(config)),
            DemoKind::Showcase => Self::Showcase(ShowcaseDemo::new(config)),
        }
    }

    pub fn demo(&self) -> &dyn Demo {
        match self {
            Self::Vectors(d) => d,
            Self::Fruit(d) => d,
            Self::Animal(d) => d,
            Self::World(d) => d,
            Self::Lighting(d) => d,
            Self::Showcase(d) => d,
        }
    }

    pub fn demo_mut(&mut self) -> &mut dyn Demo {
        match self {
            Self::Vectors(d) => d,
            Self::Fruit(d) => d,
            Self::Animal(d) => d,
            Self::World(d) => d,
            Self::Lighting(d) => d,
            Self::Showcase(d) => d,
        }
    }
}

pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyK => Key::K,
        KeyCode::Space => Key::Space,
        _ => Key::Other,
    }
}

/// Held keys keep walking; everything else fires once per press.
fn repeats(action: Action) -> bool {
    matches!(action, Action::Move(_) | Action::Pan(_))
}

/// Application state.
pub struct AppState {
    pub config: DemoConfig,
    pub active: ActiveDemo,
    pub clock: FrameClock,
    pub show_panel: bool,
    drag: DragTracker,
    cursor: (f32, f32),
    shift: bool,
    size: (u32, u32),
}

impl AppState {
    pub fn new(config: DemoConfig) -> Self {
        let active = ActiveDemo::new(config.demo, &config);
        let size = (config.width, config.height);
        Self {
            config,
            active,
            clock: FrameClock::new(),
            show_panel: true,
            drag: DragTracker::new(),
            cursor: (0.0, 0.0),
            shift: false,
            size,
        }
    }

    pub fn kind(&self) -> DemoKind {
        self.active.demo().kind()
    }

    /// Replace the running demo with a fresh `kind`.
    pub fn switch(&mut self, kind: DemoKind) {
        self.active = ActiveDemo::new(kind, &self.config);
        self.active.demo_mut().resize(self.size.0, self.size.1);
        self.drag = DragTracker::new();
    }

    pub fn dispatch(&mut self, action: Action) {
        if !action.is_noop() {
            self.active.demo_mut().handle(action);
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        if !pressed {
            return;
        }
        if code == KeyCode::F1 {
            if !repeat {
                self.show_panel = !self.show_panel;
            }
            return;
        }
        let action = self.active.demo().key_map().resolve(map_key(code));
        if repeat && !repeats(action) {
            return;
        }
        self.dispatch(action);
    }

    pub fn set_shift(&mut self, held: bool) {
        self.shift = held;
    }

    pub fn mouse_button(&mut self, pressed: bool) {
        let (x, y) = self.cursor;
        let action = if pressed {
            self.drag.press(x, y, self.shift)
        } else {
            self.drag.release()
        };
        self.dispatch(action);
    }

    /// A drag or poke is active and waits for the button release.
    pub fn button_held(&self) -> bool {
        self.drag.is_dragging() || self.drag.is_poking()
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
        let action = self.drag.moved(x, y);
        self.dispatch(action);
    }

    pub fn cursor_left(&mut self) {
        self.drag.leave();
    }

    pub fn scroll_lines(&mut self, lines: f32) {
        self.dispatch(Action::Zoom { delta: lines });
    }

    pub fn scroll_pixels(&mut self, pixels: f32) {
        self.scroll_lines(pixels / PIXELS_PER_ZOOM);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width.max(1), height.max(1));
        self.active.demo_mut().resize(self.size.0, self.size.1);
    }

    /// Advance the clock and the demo, then build this frame.
    pub fn step(&mut self) -> Frame {
        self.clock.tick();
        let demo = self.active.demo_mut();
        demo.update(&self.clock);
        demo.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(kind: DemoKind) -> AppState {
        AppState::new(DemoConfig {
            demo: kind,
            ..DemoConfig::default()
        })
    }

    #[test]
    fn keys_map_to_bindings() {
        assert_eq!(map_key(KeyCode::KeyW), Key::W);
        assert_eq!(map_key(KeyCode::Space), Key::Space);
        assert_eq!(map_key(KeyCode::Digit1), Key::Other);
    }

    #[test]
    fn held_walk_keys_repeat() {
        assert!(repeats(Action::Move(MoveDir::Forward)));
        assert!(repeats(Action::Pan(PanDir::Left)));
        assert!(!repeats(Action::AddBlock));
    }

    #[test]
    fn walking_moves_the_world_camera() {
        let mut app = state(DemoKind::World);
        app.handle_key(KeyCode::KeyW, true, false);
        app.handle_key(KeyCode::KeyW, true, true);
        let ActiveDemo::World(world) = &app.active else {
            panic!("expected the block world");
        };
        assert!((world.walker.camera.eye.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn repeated_toggle_fires_once() {
        let mut app = state(DemoKind::Lighting);
        app.handle_key(KeyCode::KeyL, true, false);
        app.handle_key(KeyCode::KeyL, true, true);
        let ActiveDemo::Lighting(lit) = &app.active else {
            panic!("expected the lit scene");
        };
        assert!(!lit.light_on);
    }

    #[test]
    fn f1_toggles_the_panel() {
        let mut app = state(DemoKind::Fruit);
        app.handle_key(KeyCode::F1, true, false);
        assert!(!app.show_panel);
        app.handle_key(KeyCode::F1, false, false);
        assert!(!app.show_panel);
    }

    #[test]
    fn shift_click_pokes_the_animal() {
        let mut app = state(DemoKind::Animal);
        app.set_shift(true);
        app.mouse_button(true);
        let ActiveDemo::Animal(animal) = &app.active else {
            panic!("expected the animal");
        };
        assert!(animal.poking());
        app.mouse_button(false);
        let ActiveDemo::Animal(animal) = &app.active else {
            panic!("expected the animal");
        };
        assert!(!animal.poking());
    }

    #[test]
    fn release_clears_held_button() {
        let mut app = state(DemoKind::Animal);
        assert!(!app.button_held());
        app.mouse_button(true);
        assert!(app.button_held());
        app.mouse_button(false);
        assert!(!app.button_held());

        app.set_shift(true);
        app.mouse_button(true);
        assert!(app.button_held());
        app.mouse_button(false);
        assert!(!app.button_held());
    }

    #[test]
    fn drag_rotates_the_animal() {
        let mut app = state(DemoKind::Animal);
        app.cursor_moved(10.0, 10.0);
        app.mouse_button(true);
        app.cursor_moved(15.0, 12.0);
        let ActiveDemo::Animal(animal) = &app.active else {
            panic!("expected the animal");
        };
        assert_eq!((animal.angle_x, animal.angle_y), (-5.0, 2.0));
    }

    #[test]
    fn switching_keeps_the_surface_size() {
        let mut app = state(DemoKind::Fruit);
        app.resize(1000, 500);
        app.switch(DemoKind::Showcase);
        assert_eq!(app.kind(), DemoKind::Showcase);
        let ActiveDemo::Showcase(show) = &app.active else {
            panic!("expected the showcase");
        };
        assert_eq!(show.camera.aspect, 2.0);
    }
}
