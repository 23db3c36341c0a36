//! Capability provider health check

use crate::classify::classify;
use crate::config::ClassifierConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::provider::{CapabilityProvider, DesktopProvider};

/// Checks that the bound provider yields usable raw signals and that
/// classification over them is internally consistent
pub struct ProviderCheck {
    provider: Box<dyn CapabilityProvider>,
}

impl ProviderCheck {
    pub fn new(provider: Box<dyn CapabilityProvider>) -> Self {
        Self { provider }
    }
}

impl Default for ProviderCheck {
    fn default() -> Self {
        Self::new(Box::new(DesktopProvider::new()))
    }
}

impl SystemCheck for ProviderCheck {
    fn name(&self) -> &'static str {
        "Capability Provider"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates raw signal fetch and classification consistency")
    }

    fn check(&self) -> CheckResult {
        let signals = match self.provider.raw_device_signals() {
            Ok(signals) => signals,
            Err(e) => return CheckResult::fail(format!("raw signal fetch failed: {}", e)),
        };

        let area = match self.provider.safe_area_insets() {
            Ok(area) => area,
            Err(e) => {
                return CheckResult::warn(format!("safe area unavailable: {}", e))
                    .with_details(format!("  signals: {:?}", signals));
            }
        };
        if area.top < 0.0 || area.right < 0.0 || area.bottom < 0.0 || area.left < 0.0 {
            return CheckResult::fail("safe area reports negative insets");
        }

        let profile = classify(&signals, &ClassifierConfig::default());
        let exclusive =
            [profile.is_mobile, profile.is_tablet, profile.is_desktop]
                .iter()
                .filter(|&&v| v)
                .count();
        if exclusive != 1 {
            return CheckResult::fail("device class flags are not mutually exclusive");
        }

        CheckResult::pass(format!(
            "{:?} on {:?}, input mode {:?}",
            profile.device_type, profile.platform, profile.input_mode
        ))
        .with_details(format!(
            "  screen: {}x{} @ {}x\n  touch: {} pointer: {} gamepad: {}",
            profile.screen_width,
            profile.screen_height,
            profile.pixel_ratio,
            profile.has_touch,
            profile.has_pointer,
            profile.has_gamepad
        ))
    }
}
