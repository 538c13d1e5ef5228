use crate::config::DemoConfig;
use crate::{animal, fruit, lit_scene, showcase, vectors, world};
use cglab_common::FrameClock;
use cglab_input::{Action, KeyMap};
use cglab_render::Frame;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which exercise to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Vectors,
    Fruit,
    Animal,
    World,
    Lighting,
    Showcase,
}

impl DemoKind {
    pub const ALL: [DemoKind; 6] = [
        DemoKind::Vectors,
        DemoKind::Fruit,
        DemoKind::Animal,
        DemoKind::World,
        DemoKind::Lighting,
        DemoKind::Showcase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::Vectors => "vectors",
            DemoKind::Fruit => "fruit",
            DemoKind::Animal => "animal",
            DemoKind::World => "world",
            DemoKind::Lighting => "lighting",
            DemoKind::Showcase => "showcase",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DemoKind::Vectors => "Vector Canvas",
            DemoKind::Fruit => "Watermelon",
            DemoKind::Animal => "Blocky Penguin",
            DemoKind::World => "Block World",
            DemoKind::Lighting => "Lighting",
            DemoKind::Showcase => "Showcase",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown demo '{0}' (expected one of vectors, fruit, animal, world, lighting, showcase)")]
pub struct ParseDemoKindError(pub String);

impl FromStr for DemoKind {
    type Err = ParseDemoKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DemoKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| ParseDemoKindError(s.to_string()))
    }
}

/// A self-contained exercise.
pub trait Demo {
    fn kind(&self) -> DemoKind;

    /// Key bindings this demo responds to.
    fn key_map(&self) -> KeyMap;

    /// Apply one input action.
    fn handle(&mut self, action: Action);

    /// Advance animations.
    fn update(&mut self, clock: &FrameClock);

    /// Build this frame's shapes from the current state.
    fn frame(&self) -> Frame;

    /// Surface size changed.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Construct the demo selected by `kind`.
pub fn build_demo(kind: DemoKind, config: &DemoConfig) -> Box<dyn Demo> {
    tracing::info!(demo = %kind, "building demo");
    match kind {
        DemoKind::Vectors => Box::new(vectors::VectorDemo::default()),
        DemoKind::Fruit => Box::new(fruit::FruitDemo),
        DemoKind::Animal => Box::new(animal::AnimalDemo::default()),
        DemoKind::World => Box::new(world::WorldDemo::new(config)),
        DemoKind::Lighting => Box::new(lit_scene::LitSceneDemo::new(config)),
        DemoKind::Showcase => Box::new(showcase::ShowcaseDemo::new(config)),
    }
}
