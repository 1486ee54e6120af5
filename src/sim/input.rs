//! Held-key input state
//!
//! The host feeds raw key identifiers in through [`Key::from_code`]; the
//! simulation only ever sees the four directional keys. Unknown identifiers
//! never make it past the parse boundary.

use glam::Vec2;

/// The four directional keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Map a DOM-style key identifier to a directional key.
    ///
    /// Arrow keys plus the usual WASD aliases; anything else is ignored.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Up => 2,
            Key::Down => 3,
        }
    }
}

/// Which directional keys are currently held.
///
/// Written only by the host's key event handlers, read once per tick by the
/// integrator.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn key_up(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Drop every held key (listener teardown, focus loss)
    pub fn clear(&mut self) {
        self.held = [false; 4];
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// True when any directional key is held (the binary speed rule)
    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    /// Accumulated direction vector, unit length when non-zero.
    ///
    /// Opposing keys cancel. Diagonals are normalized so two-key movement is
    /// no faster than one-key movement.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_held(Key::Left) {
            dir.x -= 1.0;
        }
        if self.is_held(Key::Right) {
            dir.x += 1.0;
        }
        if self.is_held(Key::Up) {
            dir.y -= 1.0;
        }
        if self.is_held(Key::Down) {
            dir.y += 1.0;
        }
        dir.normalize_or_zero()
    }
}
