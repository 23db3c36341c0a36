//! Canonical per-tick input state
//!
//! One [`InputSnapshot`] is emitted per aggregator tick, fully formed before
//! publication. Consumers hold an `Arc` to the latest snapshot and never
//! mutate it.

use std::collections::HashMap;

use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

/// Logical analog stick identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stick {
    Left,
    Right,
}

/// Logical analog trigger identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Left,
    Right,
}

/// Stick deflection, each axis in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StickVector {
    pub x: f32,
    pub y: f32,
}

impl StickVector {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both axes are at rest
    pub fn is_neutral(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Clamps both axes into [-1, 1]; non-finite axes collapse to 0
    pub fn clamped(self) -> Self {
        fn clamp(v: f32) -> f32 {
            if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 }
        }
        Self {
            x: clamp(self.x),
            y: clamp(self.y),
        }
    }
}

/// One active touch contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    /// Screen position in CSS pixels
    pub x: f32,
    pub y: f32,
}

/// Point-in-time capture of every active input source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Microseconds since aggregator start; strictly increasing per emission
    pub timestamp_us: u64,
    /// Resolved stick values after source arbitration
    pub sticks: EnumMap<Stick, StickVector>,
    /// Logical action name to currently-held
    pub buttons: HashMap<String, bool>,
    /// Analog trigger values in [0, 1]
    pub triggers: EnumMap<Trigger, f32>,
    /// Active touches ordered by first contact, stable until release
    pub touches: Vec<TouchPoint>,
}

impl InputSnapshot {
    /// Whether a logical action is held according to `buttons` alone
    ///
    /// Touch-region resolution happens in the query facade, which also
    /// consults `touches`.
    pub fn button_held(&self, action: &str) -> bool {
        self.buttons.get(action).copied().unwrap_or(false)
    }
}
