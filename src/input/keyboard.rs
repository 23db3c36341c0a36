//! Keyboard input source
//!
//! Tracks held keys and derives discrete stick values (-1, 0, or 1 per
//! axis) from configured directional keys. Discrete values are never
//! blended with analog sources; arbitration happens in the aggregator.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::snapshot::{Stick, StickVector};

/// Physical key identity, decoupled from any window backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Space,
    Enter,
    Escape,
    Tab,
    ShiftLeft,
    ShiftRight,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other,
}

impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WK;
        match key {
            WK::Space => Self::Space,
            WK::Enter => Self::Enter,
            WK::Escape => Self::Escape,
            WK::Tab => Self::Tab,
            WK::ShiftLeft => Self::ShiftLeft,
            WK::ShiftRight => Self::ShiftRight,
            WK::KeyA => Self::A,
            WK::KeyB => Self::B,
            WK::KeyC => Self::C,
            WK::KeyD => Self::D,
            WK::KeyE => Self::E,
            WK::KeyF => Self::F,
            WK::KeyG => Self::G,
            WK::KeyH => Self::H,
            WK::KeyI => Self::I,
            WK::KeyJ => Self::J,
            WK::KeyK => Self::K,
            WK::KeyL => Self::L,
            WK::KeyM => Self::M,
            WK::KeyN => Self::N,
            WK::KeyO => Self::O,
            WK::KeyP => Self::P,
            WK::KeyQ => Self::Q,
            WK::KeyR => Self::R,
            WK::KeyS => Self::S,
            WK::KeyT => Self::T,
            WK::KeyU => Self::U,
            WK::KeyV => Self::V,
            WK::KeyW => Self::W,
            WK::KeyX => Self::X,
            WK::KeyY => Self::Y,
            WK::KeyZ => Self::Z,
            WK::ArrowLeft => Self::ArrowLeft,
            WK::ArrowRight => Self::ArrowRight,
            WK::ArrowUp => Self::ArrowUp,
            WK::ArrowDown => Self::ArrowDown,
            _ => Self::Other,
        }
    }
}

/// Directional keys emulating one stick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickKeys {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl StickKeys {
    /// WASD, the conventional left-stick emulation
    pub fn wasd() -> Self {
        Self {
            up: KeyCode::W,
            down: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
        }
    }

    /// Arrow keys, the conventional right-stick emulation
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }
}

/// Held-key tracking with digital stick derivation
pub struct KeyboardSource {
    held: HashSet<KeyCode>,
    left_keys: StickKeys,
    right_keys: StickKeys,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            left_keys: StickKeys::wasd(),
            right_keys: StickKeys::arrows(),
        }
    }

    /// Overrides the directional key layout for a stick
    pub fn set_stick_keys(&mut self, stick: Stick, keys: StickKeys) {
        match stick {
            Stick::Left => self.left_keys = keys,
            Stick::Right => self.right_keys = keys,
        }
    }

    /// Records a key transition
    pub fn on_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Discrete stick value: each axis is -1, 0, or 1; up is +y
    pub fn stick(&self, stick: Stick) -> StickVector {
        let keys = match stick {
            Stick::Left => &self.left_keys,
            Stick::Right => &self.right_keys,
        };
        let axis = |neg: KeyCode, pos: KeyCode| -> f32 {
            (self.is_held(pos) as i8 - self.is_held(neg) as i8) as f32
        };
        StickVector::new(axis(keys.left, keys.right), axis(keys.down, keys.up))
    }

    /// True when any directional key for the stick is held, even if the
    /// opposing keys cancel out to a neutral vector
    pub fn stick_engaged(&self, stick: Stick) -> bool {
        let keys = match stick {
            Stick::Left => &self.left_keys,
            Stick::Right => &self.right_keys,
        };
        [keys.up, keys.down, keys.left, keys.right]
            .iter()
            .any(|&k| self.is_held(k))
    }

    /// Releases every key, e.g. on focus loss
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl Default for KeyboardSource {
    fn default() -> Self {
        Self::new()
    }
}
