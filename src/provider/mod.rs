//! Capability providers
//!
//! A provider is the per-platform adapter behind the whole crate: it exposes
//! raw device signals upward and accepts the three imperative effects.
//! Platforms are swapped by binding a different implementation at startup,
//! never by subclassing a shared base.

mod desktop;
mod headless;
pub mod signals;
mod web;

pub use desktop::DesktopProvider;
pub use headless::HeadlessProvider;
pub use web::WebProvider;

use crate::dispatch::{HapticEffect, OrientationLock, TouchHandling};
use crate::error::ProviderError;
use crate::profile::{Platform, SafeArea};
use signals::RawDeviceSignals;

/// Per-platform adapter exposing raw signals and accepting effect intents
///
/// Every method returns plain structured values; no platform types leak
/// upward. Calls are blocking and are always driven from the single
/// scheduling loop that owns the context, so implementations need no
/// internal synchronization.
pub trait CapabilityProvider {
    /// Platform identity of this provider
    fn platform(&self) -> Platform;

    /// Current raw device signals
    fn raw_device_signals(&self) -> Result<RawDeviceSignals, ProviderError>;

    /// Raw safe-area rectangle; all-zero when the platform has none
    fn safe_area_insets(&self) -> Result<SafeArea, ProviderError>;

    /// OS low-power / battery-saver flag
    fn low_power_mode(&self) -> Result<bool, ProviderError> {
        Ok(false)
    }

    /// Fires a resolved haptic effect
    fn invoke_haptic(&mut self, effect: &HapticEffect) -> Result<(), ProviderError>;

    /// Requests an orientation lock
    fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), ProviderError>;

    /// Applies touch handling options
    fn set_touch_handling(&mut self, options: TouchHandling) -> Result<(), ProviderError>;
}
