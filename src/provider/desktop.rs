//! Desktop capability provider
//!
//! Folds winit window events into raw device signals for desktop builds.
//! Screen metrics come from resize events (converted to CSS pixels through
//! the scale factor); touch and pointer presence are learned from the first
//! event of each kind. Haptics and orientation locks do not exist on this
//! platform and report as unsupported.

use winit::event::WindowEvent;

use crate::dispatch::{HapticEffect, OrientationLock, TouchHandling};
use crate::error::ProviderError;
use crate::profile::{Platform, SafeArea};

use super::CapabilityProvider;
use super::signals::RawDeviceSignals;

/// Provider driven by winit window events
pub struct DesktopProvider {
    signals: RawDeviceSignals,
    scale_factor: f64,
    touch_handling: TouchHandling,
}

impl DesktopProvider {
    pub fn new() -> Self {
        let mut signals = RawDeviceSignals::default();
        signals.pixel_ratio = 1.0;
        signals.platform = Some(Platform::Web);
        Self {
            signals,
            scale_factor: 1.0,
            touch_handling: TouchHandling::default(),
        }
    }

    /// Folds a winit window event into the current signals
    ///
    /// Returns true when the event changed a classification-relevant signal,
    /// so the caller knows to recompute the device profile.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.signals.screen_width = size.width as f64 / self.scale_factor;
                self.signals.screen_height = size.height as f64 / self.scale_factor;
                true
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                self.signals.pixel_ratio = *scale_factor;
                true
            }
            WindowEvent::Touch(_) => {
                let changed = !self.signals.has_touch;
                self.signals.has_touch = true;
                changed
            }
            WindowEvent::CursorMoved { .. } => {
                let changed = !self.signals.has_pointer;
                self.signals.has_pointer = true;
                changed
            }
            _ => false,
        }
    }

    /// Records gamepad presence, driven by the aggregator's hotplug events
    pub fn set_gamepad_connected(&mut self, connected: bool) {
        self.signals.has_gamepad = connected;
    }

    pub fn touch_handling(&self) -> TouchHandling {
        self.touch_handling
    }
}

impl Default for DesktopProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProvider for DesktopProvider {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn raw_device_signals(&self) -> Result<RawDeviceSignals, ProviderError> {
        Ok(self.signals.clone())
    }

    fn safe_area_insets(&self) -> Result<SafeArea, ProviderError> {
        // Desktop windows have no notch or system bars to inset around.
        Ok(SafeArea::default())
    }

    fn invoke_haptic(&mut self, _effect: &HapticEffect) -> Result<(), ProviderError> {
        Err(ProviderError::Unsupported("haptics"))
    }

    fn lock_orientation(&mut self, _lock: OrientationLock) -> Result<(), ProviderError> {
        Err(ProviderError::Unsupported("orientation lock"))
    }

    fn set_touch_handling(&mut self, options: TouchHandling) -> Result<(), ProviderError> {
        // Nothing to suppress in a desktop window; remembered so repeated
        // calls stay observable and idempotent.
        self.touch_handling = options;
        Ok(())
    }
}
