//! Raw device signals as reported by a capability provider
//!
//! Plain structured values only: no platform-specific types leak upward.

use serde::{Deserialize, Serialize};

use crate::profile::{Platform, SafeArea};

/// Everything a provider can tell us about the device, unclassified
///
/// Every field is best effort. Missing or malformed values are legal; the
/// classifier clamps and defaults rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDeviceSignals {
    /// Browser/webview user agent, empty when the platform has none
    pub user_agent: String,
    /// Screen width in CSS pixels
    pub screen_width: f64,
    /// Screen height in CSS pixels
    pub screen_height: f64,
    /// Device pixel ratio as reported, unvalidated
    pub pixel_ratio: f64,
    /// Touchscreen present
    pub has_touch: bool,
    /// Fine pointer (mouse/trackpad) present
    pub has_pointer: bool,
    /// At least one gamepad connected
    pub has_gamepad: bool,
    /// Platform identity when the provider knows it; `None` lets the
    /// classifier sniff the user agent
    pub platform: Option<Platform>,
    /// Dedicated foldable form-factor signal, when the platform has one
    pub foldable_hint: Option<bool>,
    /// Raw safe-area rectangle, when the platform reports one
    pub safe_area: Option<SafeArea>,
    /// OS low-power / battery-saver flag
    pub low_power_mode: Option<bool>,
    /// Hardware model string
    pub model: Option<String>,
    /// OS version string
    pub os_version: Option<String>,
}

impl RawDeviceSignals {
    /// Convenience constructor for the common web-style triple
    pub fn with_screen(user_agent: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            user_agent: user_agent.into(),
            screen_width: width,
            screen_height: height,
            pixel_ratio: 1.0,
            ..Self::default()
        }
    }
}
