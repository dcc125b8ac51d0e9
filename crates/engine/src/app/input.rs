use std::collections::HashMap;

/// Logical key identifier as reported by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    Left,
    Right,
    Up,
    Down,
    Scancode(u32),
}

/// Held/released state per key. Keys that were never seen read as released.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<KeyId, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: KeyId, held: bool) {
        self.held.insert(key, held);
    }

    pub fn is_held(&self, key: KeyId) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }
}
