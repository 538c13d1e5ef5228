use serde::{Deserialize, Serialize};

/// Camera translation direction, relative to where the camera looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDir {
    Forward,
    Backward,
    Left,
    Right,
}

/// Camera rotation about the up axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDir {
    Left,
    Right,
}

/// A high-level action produced by keyboard, mouse, or control panel.
///
/// Each demo picks the actions it understands and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Step the camera in a direction.
    Move(MoveDir),
    /// Turn the camera by the demo's configured step.
    Pan(PanDir),
    /// Mouse dragged by a pixel delta while the button is held.
    Drag { dx: f32, dy: f32 },
    /// Scroll wheel; positive moves closer.
    Zoom { delta: f32 },
    /// Shift-click held: start the poke animation.
    PokeStart,
    /// Mouse released after a poke.
    PokeEnd,
    /// Place a block where the camera looks.
    AddBlock,
    /// Remove the block where the camera looks.
    RemoveBlock,
    ToggleAnimation,
    ToggleNormals,
    ToggleLight,
    ToggleSpotlight,
    /// Unbound input.
    Noop,
}

impl Action {
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_is_constructible() {
        let a = Action::Move(MoveDir::Forward);
        assert!(matches!(a, Action::Move(MoveDir::Forward)));
    }

    #[test]
    fn drag_carries_delta() {
        let a = Action::Drag { dx: 3.0, dy: -1.0 };
        assert_eq!(a, Action::Drag { dx: 3.0, dy: -1.0 });
    }

    #[test]
    fn noop_detection() {
        assert!(Action::Noop.is_noop());
        assert!(!Action::AddBlock.is_noop());
    }
}
