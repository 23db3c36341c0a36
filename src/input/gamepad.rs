//! Gamepad input source using gilrs
//!
//! Axes and buttons are read fresh every tick, never cached across ticks —
//! after a disconnect the read collapses to neutral values instead of
//! retaining stale stick positions.

use gilrs::{Axis, Button, EventType, Gilrs};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::snapshot::StickVector;

/// Physical gamepad button in the standard layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadButton {
    South,
    East,
    North,
    West,
    LeftTrigger,
    LeftTrigger2,
    RightTrigger,
    RightTrigger2,
    Select,
    Start,
    Mode,
    LeftThumb,
    RightThumb,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl PadButton {
    pub const ALL: [PadButton; 17] = [
        PadButton::South,
        PadButton::East,
        PadButton::North,
        PadButton::West,
        PadButton::LeftTrigger,
        PadButton::LeftTrigger2,
        PadButton::RightTrigger,
        PadButton::RightTrigger2,
        PadButton::Select,
        PadButton::Start,
        PadButton::Mode,
        PadButton::LeftThumb,
        PadButton::RightThumb,
        PadButton::DPadUp,
        PadButton::DPadDown,
        PadButton::DPadLeft,
        PadButton::DPadRight,
    ];

    fn to_gilrs(self) -> Button {
        match self {
            PadButton::South => Button::South,
            PadButton::East => Button::East,
            PadButton::North => Button::North,
            PadButton::West => Button::West,
            PadButton::LeftTrigger => Button::LeftTrigger,
            PadButton::LeftTrigger2 => Button::LeftTrigger2,
            PadButton::RightTrigger => Button::RightTrigger,
            PadButton::RightTrigger2 => Button::RightTrigger2,
            PadButton::Select => Button::Select,
            PadButton::Start => Button::Start,
            PadButton::Mode => Button::Mode,
            PadButton::LeftThumb => Button::LeftThumb,
            PadButton::RightThumb => Button::RightThumb,
            PadButton::DPadUp => Button::DPadUp,
            PadButton::DPadDown => Button::DPadDown,
            PadButton::DPadLeft => Button::DPadLeft,
            PadButton::DPadRight => Button::DPadRight,
        }
    }
}

/// One fresh read of gamepad state, valid for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadRead {
    pub left: StickVector,
    pub right: StickVector,
    pub trigger_left: f32,
    pub trigger_right: f32,
    pub held: Vec<PadButton>,
}

/// Gamepad pump and per-tick reader
pub struct GamepadSource {
    gilrs: Option<Gilrs>,
    connected: usize,
}

impl GamepadSource {
    /// Initializes gilrs; gamepad support is optional and failure to
    /// initialize only disables this source
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                warn!(error = %e, "failed to initialize gamepad support");
                None
            }
        };
        let connected = gilrs.as_ref().map_or(0, |g| g.gamepads().count());
        Self { gilrs, connected }
    }

    /// Drains pending gilrs events; returns true on connect/disconnect
    pub fn pump(&mut self) -> bool {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return false;
        };
        while let Some(event) = gilrs.next_event() {
            match event.event {
                EventType::Connected => debug!(id = ?event.id, "gamepad connected"),
                EventType::Disconnected => debug!(id = ?event.id, "gamepad disconnected"),
                _ => {}
            }
        }
        let connected = gilrs.gamepads().count();
        let changed = connected != self.connected;
        self.connected = connected;
        changed
    }

    /// At least one gamepad currently connected
    pub fn connected(&self) -> bool {
        self.connected > 0
    }

    /// Fresh read of the first connected gamepad, neutral when none
    pub fn read(&self) -> GamepadRead {
        let Some(gilrs) = self.gilrs.as_ref() else {
            return GamepadRead::default();
        };
        let Some((_, pad)) = gilrs.gamepads().next() else {
            return GamepadRead::default();
        };

        let axis = |a: Axis| pad.value(a);
        let trigger = |b: Button| {
            pad.button_data(b)
                .map(|data| data.value().clamp(0.0, 1.0))
                .unwrap_or(0.0)
        };

        GamepadRead {
            left: StickVector::new(axis(Axis::LeftStickX), axis(Axis::LeftStickY)).clamped(),
            right: StickVector::new(axis(Axis::RightStickX), axis(Axis::RightStickY)).clamped(),
            trigger_left: trigger(Button::LeftTrigger2),
            trigger_right: trigger(Button::RightTrigger2),
            held: PadButton::ALL
                .iter()
                .copied()
                .filter(|b| pad.is_pressed(b.to_gilrs()))
                .collect(),
        }
    }
}

impl Default for GamepadSource {
    fn default() -> Self {
        Self::new()
    }
}
