//! Logical action bindings
//!
//! A static table mapping logical action names (e.g. "jump") to the physical
//! triggers that satisfy them: key codes, gamepad buttons, and screen
//! regions. Read-only after initialization; the query facade resolves against
//! it without runtime string matching scattered through call sites.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::gamepad::PadButton;
use super::keyboard::KeyCode;

/// Rectangular screen region for touch hit testing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Physical triggers bound to one logical action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct ActionBinding {
    /// Keyboard keys that hold this action
    #[builder(default)]
    pub keys: Vec<KeyCode>,
    /// Gamepad buttons that hold this action
    #[builder(default)]
    pub buttons: Vec<PadButton>,
    /// Screen regions where a touch counts as holding this action
    #[builder(default)]
    pub regions: Vec<Rect>,
}

impl ActionBinding {
    /// True when the binding has no physical trigger at all
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.buttons.is_empty() && self.regions.is_empty()
    }
}

/// The full action table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionBindings {
    actions: HashMap<String, ActionBinding>,
}

impl ActionBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action binding, builder style
    pub fn with_action(mut self, name: impl Into<String>, binding: ActionBinding) -> Self {
        self.actions.insert(name.into(), binding);
        self
    }

    /// Looks up a logical action; unbound names are `None`
    pub fn get(&self, action: &str) -> Option<&ActionBinding> {
        self.actions.get(action)
    }

    /// Iterates all (name, binding) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionBinding)> {
        self.actions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
