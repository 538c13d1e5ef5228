//! Input layer: keyboard and mouse input mapped to demo actions.
//!
//! # Invariants
//! - Demos consume `Action`s, never raw window events.
//! - This crate does not depend on the windowing backend; the desktop app
//!   translates its key codes into `Key`.

pub mod action;
pub mod drag;
pub mod keymap;

pub use action::{Action, MoveDir, PanDir};
pub use drag::DragTracker;
pub use keymap::{Key, KeyMap};
