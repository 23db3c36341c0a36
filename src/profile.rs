//! Normalized device description
//!
//! A [`DeviceProfile`] is an immutable value: recomputation on resize,
//! orientation change, or gamepad hotplug replaces the whole profile, never
//! patches a field in place.

use serde::{Deserialize, Serialize};

/// Mutually exclusive device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

/// Platform the active capability provider runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Ios,
    Android,
}

/// Dominant input source
///
/// `Hybrid` means more than one source is concurrently viable. A device with
/// only a pointer reports `Keyboard`: a mouse implies a desktop keyboard
/// pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Keyboard,
    Touch,
    Gamepad,
    Hybrid,
}

/// Screen orientation derived from dimensions at classification time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Safe-area insets in CSS pixels, all non-negative
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SafeArea {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl SafeArea {
    /// Clamps every inset to be non-negative and finite
    pub fn sanitized(self) -> Self {
        fn clamp(v: f64) -> f64 {
            if v.is_finite() && v > 0.0 { v } else { 0.0 }
        }
        Self {
            top: clamp(self.top),
            right: clamp(self.right),
            bottom: clamp(self.bottom),
            left: clamp(self.left),
        }
    }
}

/// Classified, normalized view of the device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub device_type: DeviceType,
    pub platform: Platform,
    pub input_mode: InputMode,
    pub orientation: Orientation,
    pub has_touch: bool,
    pub has_pointer: bool,
    pub has_gamepad: bool,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    /// Orthogonal refinement of mobile/tablet; best effort, defaults false
    pub is_foldable: bool,
    /// Physical CSS pixels
    pub screen_width: f64,
    pub screen_height: f64,
    /// Device pixel ratio, always >= 1
    pub pixel_ratio: f64,
    pub safe_area: SafeArea,
    /// Hardware model string when the native shim reports one
    pub model: Option<String>,
    /// OS version string when the native shim reports one
    pub os_version: Option<String>,
}

impl DeviceProfile {
    /// The conservative fallback when no raw signals are available:
    /// a desktop keyboard machine with every capability flag off.
    pub fn conservative() -> Self {
        Self {
            device_type: DeviceType::Desktop,
            platform: Platform::Web,
            input_mode: InputMode::Keyboard,
            orientation: Orientation::Landscape,
            has_touch: false,
            has_pointer: false,
            has_gamepad: false,
            is_mobile: false,
            is_tablet: false,
            is_desktop: true,
            is_foldable: false,
            screen_width: 0.0,
            screen_height: 0.0,
            pixel_ratio: 1.0,
            safe_area: SafeArea::default(),
            model: None,
            os_version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conservative_profile_is_consistent() {
        let profile = DeviceProfile::conservative();
        assert_eq!(profile.device_type, DeviceType::Desktop);
        assert!(profile.is_desktop && !profile.is_mobile && !profile.is_tablet);
        assert_eq!(profile.input_mode, InputMode::Keyboard);
        assert!(profile.pixel_ratio >= 1.0);
    }

    #[test]
    fn test_safe_area_sanitized() {
        let area = SafeArea {
            top: -4.0,
            right: f64::NAN,
            bottom: 34.0,
            left: 0.0,
        };
        let clean = area.sanitized();
        assert_eq!(clean.top, 0.0);
        assert_eq!(clean.right, 0.0);
        assert_eq!(clean.bottom, 34.0);
        assert_eq!(clean.left, 0.0);
    }
}
