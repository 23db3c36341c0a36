//! Headless provider for tests, CI, and platforms with no effects
//!
//! Signals are whatever the caller injected; every effect either records
//! itself or reports the capability as absent. State lives behind a shared
//! cell so a clone kept outside a context can keep steering signals and
//! inspecting recorded effects after the provider has been boxed away.

use std::cell::RefCell;
use std::rc::Rc;

use crate::dispatch::{HapticEffect, OrientationLock, TouchHandling};
use crate::error::ProviderError;
use crate::profile::{Platform, SafeArea};

use super::CapabilityProvider;
use super::signals::RawDeviceSignals;

struct HeadlessState {
    signals: RawDeviceSignals,
    orientation_lock_supported: bool,
    haptics_supported: bool,
    last_haptic: Option<HapticEffect>,
    locked_orientation: Option<OrientationLock>,
    touch_handling: TouchHandling,
    induced_failure: Option<String>,
}

/// Provider backed by injected signals with recorded effects
#[derive(Clone)]
pub struct HeadlessProvider {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessProvider {
    /// Creates a provider reporting the given signals
    pub fn new(signals: RawDeviceSignals) -> Self {
        Self {
            state: Rc::new(RefCell::new(HeadlessState {
                signals,
                orientation_lock_supported: false,
                haptics_supported: true,
                last_haptic: None,
                locked_orientation: None,
                touch_handling: TouchHandling::default(),
                induced_failure: None,
            })),
        }
    }

    /// Handle sharing this provider's state; survives boxing the provider
    pub fn handle(&self) -> HeadlessProvider {
        self.clone()
    }

    /// Replaces the injected signals (e.g. to simulate a resize)
    pub fn set_signals(&self, signals: RawDeviceSignals) {
        self.state.borrow_mut().signals = signals;
    }

    pub fn set_orientation_lock_supported(&self, supported: bool) {
        self.state.borrow_mut().orientation_lock_supported = supported;
    }

    pub fn set_haptics_supported(&self, supported: bool) {
        self.state.borrow_mut().haptics_supported = supported;
    }

    /// Makes the next effect call fail with a transient error
    pub fn induce_transient_failure(&self, message: impl Into<String>) {
        self.state.borrow_mut().induced_failure = Some(message.into());
    }

    /// Last haptic effect delivered, if any
    pub fn last_haptic(&self) -> Option<HapticEffect> {
        self.state.borrow().last_haptic
    }

    /// Orientation lock currently held, if any
    pub fn locked_orientation(&self) -> Option<OrientationLock> {
        self.state.borrow().locked_orientation
    }

    /// Touch handling options currently applied
    pub fn touch_handling(&self) -> TouchHandling {
        self.state.borrow().touch_handling
    }

    fn take_induced_failure(&self) -> Result<(), ProviderError> {
        match self.state.borrow_mut().induced_failure.take() {
            Some(message) => Err(ProviderError::Transient(message)),
            None => Ok(()),
        }
    }
}

impl CapabilityProvider for HeadlessProvider {
    fn platform(&self) -> Platform {
        self.state.borrow().signals.platform.unwrap_or(Platform::Web)
    }

    fn raw_device_signals(&self) -> Result<RawDeviceSignals, ProviderError> {
        Ok(self.state.borrow().signals.clone())
    }

    fn safe_area_insets(&self) -> Result<SafeArea, ProviderError> {
        let state = self.state.borrow();
        Ok(state.signals.safe_area.unwrap_or_default().sanitized())
    }

    fn low_power_mode(&self) -> Result<bool, ProviderError> {
        Ok(self.state.borrow().signals.low_power_mode.unwrap_or(false))
    }

    fn invoke_haptic(&mut self, effect: &HapticEffect) -> Result<(), ProviderError> {
        self.take_induced_failure()?;
        let mut state = self.state.borrow_mut();
        if !state.haptics_supported {
            return Err(ProviderError::Unsupported("haptics"));
        }
        state.last_haptic = Some(*effect);
        Ok(())
    }

    fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), ProviderError> {
        self.take_induced_failure()?;
        let mut state = self.state.borrow_mut();
        if !state.orientation_lock_supported {
            return Err(ProviderError::Unsupported("orientation lock"));
        }
        state.locked_orientation = Some(lock);
        Ok(())
    }

    fn set_touch_handling(&mut self, options: TouchHandling) -> Result<(), ProviderError> {
        self.take_induced_failure()?;
        self.state.borrow_mut().touch_handling = options;
        Ok(())
    }
}
