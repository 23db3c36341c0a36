//! Web capability provider
//!
//! Mirrors browser semantics: vibration patterns for haptics, body
//! overflow/touch-action toggling for scroll prevention, and a viewport
//! `user-scalable=no` directive for zoom prevention. The document pieces the
//! browser would own are modeled as plain state here so the save/restore
//! contract is observable.

use tracing::debug;

use crate::dispatch::{HapticEffect, HapticKind, HapticStyle, OrientationLock, TouchHandling};
use crate::error::ProviderError;
use crate::profile::{Platform, SafeArea};

use super::CapabilityProvider;
use super::signals::RawDeviceSignals;

/// Impact vibration durations in milliseconds, by style
const IMPACT_LIGHT_MS: u64 = 20;
const IMPACT_MEDIUM_MS: u64 = 50;
const IMPACT_HEAVY_MS: u64 = 100;
/// Double-pulse notification pattern
const NOTIFICATION_PATTERN_MS: [u64; 3] = [100, 30, 100];
const SELECTION_MS: u64 = 10;

const ZOOM_DIRECTIVE: &str = "user-scalable=no";

/// Scroll-relevant document body style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BodyStyle {
    pub overflow: String,
    pub touch_action: String,
}

/// Provider with browser-style effect semantics
pub struct WebProvider {
    signals: RawDeviceSignals,
    vibration_supported: bool,
    orientation_lock_supported: bool,
    last_vibration: Option<Vec<u64>>,
    locked_orientation: Option<OrientationLock>,
    body: BodyStyle,
    /// Body style saved when scroll prevention engaged, restored on release
    saved_body: Option<BodyStyle>,
    viewport_content: String,
    touch_handling: TouchHandling,
}

impl WebProvider {
    /// Creates a provider over the given raw signals
    pub fn new(signals: RawDeviceSignals) -> Self {
        Self {
            signals,
            vibration_supported: true,
            orientation_lock_supported: true,
            last_vibration: None,
            locked_orientation: None,
            body: BodyStyle::default(),
            saved_body: None,
            viewport_content: "width=device-width, initial-scale=1".to_string(),
            touch_handling: TouchHandling::default(),
        }
    }

    /// Replaces signals, e.g. after a resize or orientation change
    pub fn set_signals(&mut self, signals: RawDeviceSignals) {
        self.signals = signals;
    }

    pub fn set_vibration_supported(&mut self, supported: bool) {
        self.vibration_supported = supported;
    }

    pub fn set_orientation_lock_supported(&mut self, supported: bool) {
        self.orientation_lock_supported = supported;
    }

    /// Last vibration pattern fired (milliseconds)
    pub fn last_vibration(&self) -> Option<&[u64]> {
        self.last_vibration.as_deref()
    }

    pub fn locked_orientation(&self) -> Option<OrientationLock> {
        self.locked_orientation
    }

    /// Current scroll-relevant body style
    pub fn body_style(&self) -> &BodyStyle {
        &self.body
    }

    /// Current viewport meta content
    pub fn viewport_content(&self) -> &str {
        &self.viewport_content
    }

    fn vibrate(&mut self, pattern: Vec<u64>) -> Result<(), ProviderError> {
        if !self.vibration_supported {
            return Err(ProviderError::Unsupported("vibration"));
        }
        debug!(?pattern, "vibrating");
        self.last_vibration = Some(pattern);
        Ok(())
    }
}

impl CapabilityProvider for WebProvider {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn raw_device_signals(&self) -> Result<RawDeviceSignals, ProviderError> {
        Ok(self.signals.clone())
    }

    fn safe_area_insets(&self) -> Result<SafeArea, ProviderError> {
        // Browsers only expose insets through CSS env() vars; default to zero
        // unless the embedder injected a rectangle into the signals.
        Ok(self.signals.safe_area.unwrap_or_default().sanitized())
    }

    fn low_power_mode(&self) -> Result<bool, ProviderError> {
        Ok(self.signals.low_power_mode.unwrap_or(false))
    }

    fn invoke_haptic(&mut self, effect: &HapticEffect) -> Result<(), ProviderError> {
        match effect.kind {
            HapticKind::Impact => {
                let duration = match effect.style {
                    HapticStyle::Light => IMPACT_LIGHT_MS,
                    HapticStyle::Medium => IMPACT_MEDIUM_MS,
                    HapticStyle::Heavy => IMPACT_HEAVY_MS,
                };
                self.vibrate(vec![duration])
            }
            HapticKind::Notification => self.vibrate(NOTIFICATION_PATTERN_MS.to_vec()),
            HapticKind::Selection => self.vibrate(vec![SELECTION_MS]),
        }
    }

    fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), ProviderError> {
        if !self.orientation_lock_supported {
            return Err(ProviderError::Unsupported("orientation lock"));
        }
        self.locked_orientation = Some(lock);
        Ok(())
    }

    fn set_touch_handling(&mut self, options: TouchHandling) -> Result<(), ProviderError> {
        if options.prevent_scrolling {
            // Save the prior body style exactly once so re-invocation is
            // idempotent and release restores the pre-lock state.
            if self.saved_body.is_none() {
                self.saved_body = Some(self.body.clone());
                self.body = BodyStyle {
                    overflow: "hidden".to_string(),
                    touch_action: "none".to_string(),
                };
            }
        } else if let Some(saved) = self.saved_body.take() {
            self.body = saved;
        }

        if options.prevent_zooming {
            if !self.viewport_content.contains(ZOOM_DIRECTIVE) {
                self.viewport_content = format!("{}, {}", self.viewport_content, ZOOM_DIRECTIVE);
            }
        } else if self.viewport_content.contains(ZOOM_DIRECTIVE) {
            self.viewport_content = self
                .viewport_content
                .replace(&format!(", {}", ZOOM_DIRECTIVE), "");
        }

        self.touch_handling = options;
        Ok(())
    }
}
