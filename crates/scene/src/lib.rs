//! The coursework demos.
//!
//! Each demo owns its state, reacts to `Action`s, advances with a
//! `FrameClock` and rebuilds a `Frame` from scratch on request.
//!
//! # Invariants
//! - `Demo::frame` never mutates state; animation happens in `update`.
//! - Randomized scenes are seeded, so a frame at a given time is reproducible.

pub mod animal;
pub mod block_map;
pub mod config;
mod demo;
pub mod fruit;
pub mod lit_scene;
pub mod penguin;
pub mod showcase;
pub mod vectors;
pub mod world;

pub use config::{CameraConfig, ConfigError, DemoConfig};
pub use demo::{Demo, DemoKind, ParseDemoKindError, build_demo};
