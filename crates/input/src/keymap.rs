use crate::action::{Action, MoveDir, PanDir};
use std::collections::HashMap;

/// Keys the demos react to. The desktop app maps its physical key codes here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    F,
    R,
    N,
    L,
    K,
    Space,
    Other,
}

/// Binding table from keys to actions.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<Key, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::walker()
    }
}

impl KeyMap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// WASD movement and Q/E panning, as in the first-person demos.
    pub fn walker() -> Self {
        let mut map = Self::empty();
        map.bind(Key::W, Action::Move(MoveDir::Forward));
        map.bind(Key::S, Action::Move(MoveDir::Backward));
        map.bind(Key::A, Action::Move(MoveDir::Left));
        map.bind(Key::D, Action::Move(MoveDir::Right));
        map.bind(Key::Q, Action::Pan(PanDir::Left));
        map.bind(Key::E, Action::Pan(PanDir::Right));
        map
    }

    /// Walker bindings plus F/R to place and remove blocks.
    pub fn block_world() -> Self {
        let mut map = Self::walker();
        map.bind(Key::F, Action::AddBlock);
        map.bind(Key::R, Action::RemoveBlock);
        map
    }

    /// Walker bindings plus lighting toggles.
    pub fn lighting() -> Self {
        let mut map = Self::walker();
        map.bind(Key::N, Action::ToggleNormals);
        map.bind(Key::L, Action::ToggleLight);
        map.bind(Key::K, Action::ToggleSpotlight);
        map.bind(Key::Space, Action::ToggleAnimation);
        map
    }

    /// Space toggles the animal's animation.
    pub fn animal() -> Self {
        let mut map = Self::empty();
        map.bind(Key::Space, Action::ToggleAnimation);
        map
    }

    pub fn bind(&mut self, key: Key, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Action for a key press, `Action::Noop` when unbound.
    pub fn resolve(&self, key: Key) -> Action {
        let action = self.bindings.get(&key).copied().unwrap_or(Action::Noop);
        tracing::trace!(?key, ?action, "key resolved");
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walker_binds_wasd_and_qe() {
        let map = KeyMap::walker();
        assert_eq!(map.resolve(Key::W), Action::Move(MoveDir::Forward));
        assert_eq!(map.resolve(Key::D), Action::Move(MoveDir::Right));
        assert_eq!(map.resolve(Key::Q), Action::Pan(PanDir::Left));
        assert_eq!(map.resolve(Key::F), Action::Noop);
    }

    #[test]
    fn block_world_adds_edit_keys() {
        let map = KeyMap::block_world();
        assert_eq!(map.resolve(Key::F), Action::AddBlock);
        assert_eq!(map.resolve(Key::R), Action::RemoveBlock);
        assert_eq!(map.resolve(Key::S), Action::Move(MoveDir::Backward));
    }

    #[test]
    fn unbound_key_is_noop() {
        assert!(KeyMap::empty().resolve(Key::Other).is_noop());
    }

    #[test]
    fn rebinding_overrides() {
        let mut map = KeyMap::animal();
        map.bind(Key::Space, Action::ToggleNormals);
        assert_eq!(map.resolve(Key::Space), Action::ToggleNormals);
    }
}
