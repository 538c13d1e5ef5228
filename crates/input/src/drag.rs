use crate::action::Action;

/// Tracks a left-button drag and turns cursor motion into `Action::Drag`.
///
/// A press with shift held starts a poke instead of a drag.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    last: Option<(f32, f32)>,
    poking: bool,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    pub fn is_poking(&self) -> bool {
        self.poking
    }

    /// Button pressed at cursor position `(x, y)`.
    pub fn press(&mut self, x: f32, y: f32, shift: bool) -> Action {
        if shift {
            self.poking = true;
            return Action::PokeStart;
        }
        self.last = Some((x, y));
        Action::Noop
    }

    /// Cursor moved. Produces a drag delta only while dragging.
    pub fn moved(&mut self, x: f32, y: f32) -> Action {
        let Some((lx, ly)) = self.last else {
            return Action::Noop;
        };
        self.last = Some((x, y));
        Action::Drag {
            dx: x - lx,
            dy: y - ly,
        }
    }

    /// Button released.
    pub fn release(&mut self) -> Action {
        self.last = None;
        if std::mem::take(&mut self.poking) {
            Action::PokeEnd
        } else {
            Action::Noop
        }
    }

    /// Cursor left the window: end the drag but keep any poke running.
    pub fn leave(&mut self) {
        self.last = None;
    }
}
