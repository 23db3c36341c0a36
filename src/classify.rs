//! Device classification
//!
//! Pure function from raw signals to a [`DeviceProfile`]. Classification is
//! total: malformed or missing signals clamp and default to the conservative
//! guess (desktop, keyboard, all flags false) rather than erroring.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ClassifierConfig;
use crate::profile::{DeviceProfile, DeviceType, InputMode, Orientation, Platform};
use crate::provider::signals::RawDeviceSignals;

static MOBILE_UA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile UA pattern")
});

static TABLET_UA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)iPad|Tablet").expect("tablet UA pattern"));

static IOS_UA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"iPhone|iPad|iPod").expect("iOS UA pattern"));

static ANDROID_UA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Android").expect("Android UA pattern"));

/// Classifies raw signals into a device profile
///
/// Deterministic for a given input; no state beyond the arguments.
pub fn classify(signals: &RawDeviceSignals, config: &ClassifierConfig) -> DeviceProfile {
    let screen_width = clamp_dimension(signals.screen_width);
    let screen_height = clamp_dimension(signals.screen_height);
    let pixel_ratio = clamp_pixel_ratio(signals.pixel_ratio);

    let platform = signals
        .platform
        .unwrap_or_else(|| sniff_platform(&signals.user_agent));

    let device_type = classify_device_type(&signals.user_agent, screen_width, screen_height, config);
    let input_mode = classify_input_mode(signals.has_touch, signals.has_pointer, signals.has_gamepad);

    let orientation = if screen_height >= screen_width {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    };

    let is_mobile = device_type == DeviceType::Mobile;
    let is_tablet = device_type == DeviceType::Tablet;
    let is_foldable = (is_mobile || is_tablet)
        && signals.foldable_hint.unwrap_or_else(|| {
            foldable_by_aspect(signals.has_touch, screen_width, screen_height, config)
        });

    DeviceProfile {
        device_type,
        platform,
        input_mode,
        orientation,
        has_touch: signals.has_touch,
        has_pointer: signals.has_pointer,
        has_gamepad: signals.has_gamepad,
        is_mobile,
        is_tablet,
        is_desktop: device_type == DeviceType::Desktop,
        is_foldable,
        screen_width,
        screen_height,
        pixel_ratio,
        safe_area: signals.safe_area.unwrap_or_default().sanitized(),
        model: signals.model.clone(),
        os_version: signals.os_version.clone(),
    }
}

fn classify_device_type(
    user_agent: &str,
    width: f64,
    height: f64,
    config: &ClassifierConfig,
) -> DeviceType {
    let max_dimension = width.max(height);
    if TABLET_UA.is_match(user_agent) {
        DeviceType::Tablet
    } else if MOBILE_UA.is_match(user_agent) {
        if max_dimension < config.tablet_min_dimension {
            DeviceType::Mobile
        } else {
            DeviceType::Tablet
        }
    } else {
        DeviceType::Desktop
    }
}

fn classify_input_mode(has_touch: bool, has_pointer: bool, has_gamepad: bool) -> InputMode {
    let sources = [has_touch, has_pointer, has_gamepad]
        .iter()
        .filter(|&&v| v)
        .count();
    if sources >= 2 {
        InputMode::Hybrid
    } else if has_touch {
        InputMode::Touch
    } else if has_gamepad {
        InputMode::Gamepad
    } else {
        // A lone pointer means a mouse on a keyboard machine.
        InputMode::Keyboard
    }
}

fn sniff_platform(user_agent: &str) -> Platform {
    if IOS_UA.is_match(user_agent) {
        Platform::Ios
    } else if ANDROID_UA.is_match(user_agent) {
        Platform::Android
    } else {
        Platform::Web
    }
}

fn foldable_by_aspect(
    has_touch: bool,
    width: f64,
    height: f64,
    config: &ClassifierConfig,
) -> bool {
    if !has_touch {
        return false;
    }
    let (short, long) = if width <= height {
        (width, height)
    } else {
        (height, width)
    };
    short > 0.0 && long / short < config.foldable_max_aspect
}

fn clamp_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

fn clamp_pixel_ratio(value: f64) -> f64 {
    if value.is_finite() && value >= 1.0 { value } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const ANDROID_TABLET_UA: &str =
        "Mozilla/5.0 (Linux; Android 14; SM-X910) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";

    fn config() -> ClassifierConfig {
        ClassifierConfig::default()
    }

    #[test]
    fn test_iphone_portrait_touch() {
        let mut signals = RawDeviceSignals::with_screen(IPHONE_UA, 390.0, 844.0);
        signals.has_touch = true;
        let profile = classify(&signals, &config());
        assert_eq!(profile.device_type, DeviceType::Mobile);
        assert_eq!(profile.platform, Platform::Ios);
        assert_eq!(profile.input_mode, InputMode::Touch);
        assert_eq!(profile.orientation, Orientation::Portrait);
        assert!(profile.is_mobile && !profile.is_tablet && !profile.is_desktop);
    }

    #[test]
    fn test_tablet_range_hybrid_landscape() {
        let mut signals = RawDeviceSignals::with_screen(ANDROID_TABLET_UA, 1280.0, 800.0);
        signals.has_touch = true;
        signals.has_gamepad = true;
        let profile = classify(&signals, &config());
        assert_eq!(profile.device_type, DeviceType::Tablet);
        assert_eq!(profile.input_mode, InputMode::Hybrid);
        assert_eq!(profile.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_explicit_tablet_ua_wins_over_dimensions() {
        let mut signals = RawDeviceSignals::with_screen(
            "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
            768.0,
            820.0,
        );
        signals.has_touch = true;
        let profile = classify(&signals, &config());
        assert_eq!(profile.device_type, DeviceType::Tablet);
        assert_eq!(profile.platform, Platform::Ios);
    }

    #[test]
    fn test_unknown_signals_fall_back_conservatively() {
        let profile = classify(&RawDeviceSignals::default(), &config());
        assert_eq!(profile.device_type, DeviceType::Desktop);
        assert_eq!(profile.platform, Platform::Web);
        assert_eq!(profile.input_mode, InputMode::Keyboard);
        assert!(!profile.is_foldable);
    }

    #[test]
    fn test_malformed_signals_clamp() {
        let mut signals = RawDeviceSignals::with_screen(DESKTOP_UA, -100.0, f64::NAN);
        signals.pixel_ratio = f64::NAN;
        let profile = classify(&signals, &config());
        assert_eq!(profile.screen_width, 0.0);
        assert_eq!(profile.screen_height, 0.0);
        assert_eq!(profile.pixel_ratio, 1.0);
    }

    #[test]
    fn test_pointer_only_is_keyboard_mode() {
        let mut signals = RawDeviceSignals::with_screen(DESKTOP_UA, 1920.0, 1080.0);
        signals.has_pointer = true;
        let profile = classify(&signals, &config());
        assert_eq!(profile.input_mode, InputMode::Keyboard);
    }

    #[test]
    fn test_foldable_hint_overrides_heuristic() {
        let mut signals = RawDeviceSignals::with_screen(IPHONE_UA, 390.0, 844.0);
        signals.has_touch = true;
        signals.foldable_hint = Some(true);
        assert!(classify(&signals, &config()).is_foldable);

        signals.foldable_hint = Some(false);
        assert!(!classify(&signals, &config()).is_foldable);
    }

    #[test]
    fn test_near_square_touch_panel_flags_foldable() {
        // Unfolded inner panel: almost square
        let mut signals = RawDeviceSignals::with_screen(ANDROID_TABLET_UA, 840.0, 900.0);
        signals.has_touch = true;
        let profile = classify(&signals, &config());
        assert!(profile.is_foldable);
        assert!(profile.is_tablet || profile.is_mobile);
    }

    #[test]
    fn test_desktop_never_foldable() {
        let mut signals = RawDeviceSignals::with_screen(DESKTOP_UA, 1000.0, 1000.0);
        signals.has_touch = true;
        signals.foldable_hint = Some(true);
        let profile = classify(&signals, &config());
        assert_eq!(profile.device_type, DeviceType::Desktop);
        assert!(!profile.is_foldable);
    }
}
