//! Haptics / orientation / touch-handling dispatch
//!
//! Translates the closed intent vocabulary into the one call the active
//! capability provider understands. Capability-absent failures are swallowed
//! here: the caller only ever sees an error for a genuine provider fault.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::HapticsConfig;
use crate::error::ProviderError;
use crate::provider::CapabilityProvider;

/// Haptic intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticKind {
    Impact,
    Notification,
    Selection,
}

/// Impact strength; only meaningful for [`HapticKind::Impact`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticStyle {
    Light,
    Medium,
    Heavy,
}

/// A haptic request with its style already resolved against configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticEffect {
    pub kind: HapticKind,
    pub style: HapticStyle,
}

/// Orientation lock vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrientationLock {
    Any,
    Portrait,
    PortraitPrimary,
    PortraitSecondary,
    Landscape,
    LandscapePrimary,
    LandscapeSecondary,
}

/// Touch handling options; both flags are independent and idempotent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TouchHandling {
    pub prevent_scrolling: bool,
    pub prevent_zooming: bool,
}

/// Fires a haptic effect on the provider
///
/// An absent style resolves to the configured default for impact haptics;
/// notification and selection ignore style entirely.
pub fn trigger_haptic(
    provider: &mut dyn CapabilityProvider,
    kind: HapticKind,
    style: Option<HapticStyle>,
    config: &HapticsConfig,
) -> Result<(), ProviderError> {
    let style = style.unwrap_or(config.default_impact_style);
    let effect = HapticEffect { kind, style };
    swallow_unsupported(provider.invoke_haptic(&effect), "haptic")
}

/// Requests an orientation lock; best effort by contract
pub fn lock_orientation(
    provider: &mut dyn CapabilityProvider,
    lock: OrientationLock,
) -> Result<(), ProviderError> {
    swallow_unsupported(provider.lock_orientation(lock), "orientation lock")
}

/// Applies touch handling options
pub fn configure_touch_handling(
    provider: &mut dyn CapabilityProvider,
    options: TouchHandling,
) -> Result<(), ProviderError> {
    swallow_unsupported(provider.set_touch_handling(options), "touch handling")
}

fn swallow_unsupported(
    result: Result<(), ProviderError>,
    what: &'static str,
) -> Result<(), ProviderError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_unsupported() => {
            debug!(capability = what, "capability absent, completing without effect");
            Ok(())
        }
        Err(e) => {
            warn!(capability = what, error = %e, "provider call failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::HeadlessProvider;
    use crate::provider::signals::RawDeviceSignals;

    #[test]
    fn test_haptic_without_vibration_support_resolves() {
        let mut provider = HeadlessProvider::new(RawDeviceSignals::default());
        provider.set_haptics_supported(false);
        let result = trigger_haptic(
            &mut provider,
            HapticKind::Impact,
            Some(HapticStyle::Heavy),
            &HapticsConfig::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_absent_style_resolves_to_configured_default() {
        let mut provider = HeadlessProvider::new(RawDeviceSignals::default());
        trigger_haptic(&mut provider, HapticKind::Impact, None, &HapticsConfig::default())
            .unwrap();
        assert_eq!(
            provider.last_haptic(),
            Some(HapticEffect {
                kind: HapticKind::Impact,
                style: HapticStyle::Medium,
            })
        );
    }

    #[test]
    fn test_orientation_lock_is_best_effort() {
        let mut provider = HeadlessProvider::new(RawDeviceSignals::default());
        provider.set_orientation_lock_supported(false);
        assert!(lock_orientation(&mut provider, OrientationLock::Landscape).is_ok());
    }
}
