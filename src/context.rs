//! Process-scoped context
//!
//! [`StrataContext`] owns the bound capability provider, the current
//! [`DeviceProfile`], the latest [`InputSnapshot`], and all subscriptions.
//! State is scoped to the context instance, never ambient, so multiple
//! instances (e.g. in tests) cannot cross-contaminate. Both shared values
//! are published by atomic replacement of an `Arc`; consumers only ever see
//! fully formed values.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::classify::classify;
use crate::config::StrataConfig;
use crate::dispatch::{self, HapticKind, HapticStyle, OrientationLock, TouchHandling};
use crate::error::ProviderError;
use crate::input::{ActionBindings, InputAggregator, InputSnapshot};
use crate::profile::DeviceProfile;
use crate::provider::CapabilityProvider;
use crate::query::SnapshotQuery;

/// Handle identifying one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ProfileCallback = Box<dyn FnMut(&DeviceProfile)>;
type SnapshotCallback = Box<dyn FnMut(&InputSnapshot)>;

/// Owner of the current profile, current snapshot, and the bound provider
pub struct StrataContext {
    config: StrataConfig,
    provider: Box<dyn CapabilityProvider>,
    bindings: Arc<ActionBindings>,
    aggregator: InputAggregator,
    profile: Arc<DeviceProfile>,
    snapshot: Arc<InputSnapshot>,
    profile_subs: Vec<(SubscriptionId, ProfileCallback)>,
    snapshot_subs: Vec<(SubscriptionId, SnapshotCallback)>,
    next_subscription: u64,
}

impl StrataContext {
    /// Initializes a context over the given provider and binding table
    ///
    /// The initial profile is classified immediately; a provider failure at
    /// startup falls back to the conservative profile and is logged, never
    /// raised.
    pub fn new(
        provider: Box<dyn CapabilityProvider>,
        bindings: ActionBindings,
        config: StrataConfig,
    ) -> Self {
        let bindings = Arc::new(bindings);
        let aggregator = InputAggregator::new(bindings.clone());
        let mut context = Self {
            config,
            provider,
            bindings,
            aggregator,
            profile: Arc::new(DeviceProfile::conservative()),
            snapshot: Arc::new(InputSnapshot::default()),
            profile_subs: Vec::new(),
            snapshot_subs: Vec::new(),
            next_subscription: 0,
        };
        context.refresh_profile();
        info!(
            platform = ?context.profile.platform,
            device_type = ?context.profile.device_type,
            input_mode = ?context.profile.input_mode,
            "context initialized"
        );
        context
    }

    /// Context with configuration loaded from the environment profile
    pub fn with_env_config(provider: Box<dyn CapabilityProvider>, bindings: ActionBindings) -> Self {
        let config = StrataConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load config, using defaults");
            StrataConfig::default()
        });
        Self::new(provider, bindings, config)
    }

    /// Current device profile
    pub fn profile(&self) -> Arc<DeviceProfile> {
        self.profile.clone()
    }

    /// Latest input snapshot
    pub fn snapshot(&self) -> Arc<InputSnapshot> {
        self.snapshot.clone()
    }

    /// Query facade over the latest snapshot
    pub fn query(&self) -> SnapshotQuery {
        SnapshotQuery::new(self.snapshot.clone(), self.bindings.clone())
    }

    /// Input event entry points
    pub fn input(&mut self) -> &mut InputAggregator {
        &mut self.aggregator
    }

    /// Recomputes and atomically replaces the device profile
    ///
    /// Called on resize, orientation change, and gamepad hotplug. On a
    /// transient provider failure the previous valid profile is retained.
    pub fn refresh_profile(&mut self) {
        match self.compute_profile() {
            Ok(profile) => {
                if *self.profile != profile {
                    self.profile = Arc::new(profile);
                    let profile = self.profile.clone();
                    for (_, callback) in &mut self.profile_subs {
                        callback(&profile);
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "profile refresh failed, keeping previous profile");
            }
        }
    }

    /// Viewport size changed
    pub fn notify_resize(&mut self) {
        self.refresh_profile();
    }

    /// Screen orientation changed
    pub fn notify_orientation_change(&mut self) {
        self.refresh_profile();
    }

    /// Runs one input tick: pumps gamepad hotplug, emits a snapshot,
    /// notifies subscribers, and returns the snapshot
    pub fn tick(&mut self) -> Arc<InputSnapshot> {
        if self.aggregator.pump_gamepad() {
            debug!("gamepad connectivity changed");
            self.refresh_profile();
        }
        self.snapshot = self.aggregator.tick();
        let snapshot = self.snapshot.clone();
        for (_, callback) in &mut self.snapshot_subs {
            callback(&snapshot);
        }
        snapshot
    }

    /// Subscribes to profile replacements
    pub fn subscribe_profile(
        &mut self,
        callback: impl FnMut(&DeviceProfile) + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription_id();
        self.profile_subs.push((id, Box::new(callback)));
        id
    }

    /// Subscribes to snapshot emissions
    pub fn subscribe_snapshot(
        &mut self,
        callback: impl FnMut(&InputSnapshot) + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription_id();
        self.snapshot_subs.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription; effective before the next emission
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.profile_subs.len() + self.snapshot_subs.len();
        self.profile_subs.retain(|(sub, _)| *sub != id);
        self.snapshot_subs.retain(|(sub, _)| *sub != id);
        before != self.profile_subs.len() + self.snapshot_subs.len()
    }

    /// Fires a haptic effect; never fails for capability-absent platforms
    pub fn trigger_haptic(
        &mut self,
        kind: HapticKind,
        style: Option<HapticStyle>,
    ) -> Result<(), ProviderError> {
        dispatch::trigger_haptic(self.provider.as_mut(), kind, style, &self.config.haptics)
    }

    /// Requests an orientation lock; best effort by contract
    pub fn lock_orientation(&mut self, lock: OrientationLock) -> Result<(), ProviderError> {
        dispatch::lock_orientation(self.provider.as_mut(), lock)
    }

    /// Applies touch handling options; idempotent
    pub fn configure_touch_handling(&mut self, options: TouchHandling) -> Result<(), ProviderError> {
        dispatch::configure_touch_handling(self.provider.as_mut(), options)
    }

    /// OS low-power flag; conservative false when the provider cannot say
    pub fn low_power_mode(&self) -> bool {
        self.provider.low_power_mode().unwrap_or(false)
    }

    /// Drops all subscriptions and held input state
    ///
    /// The context remains usable afterwards; this is the explicit teardown
    /// for embedders that reuse the process.
    pub fn shutdown(&mut self) {
        self.profile_subs.clear();
        self.snapshot_subs.clear();
        self.aggregator.release_all();
        debug!("context shut down");
    }

    fn next_subscription_id(&mut self) -> SubscriptionId {
        self.next_subscription += 1;
        SubscriptionId(self.next_subscription)
    }

    fn compute_profile(&self) -> Result<DeviceProfile, ProviderError> {
        let mut signals = self.provider.raw_device_signals()?;
        // Safe-area failure is not fatal: the raw rectangle stays default.
        if let Ok(area) = self.provider.safe_area_insets() {
            signals.safe_area = Some(area);
        }
        // The aggregator can see pads the platform signals miss (gilrs).
        signals.has_gamepad = signals.has_gamepad || self.aggregator.gamepad_connected();
        Ok(classify(&signals, &self.config.classifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::HeadlessProvider;
    use crate::provider::signals::RawDeviceSignals;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn context_with(signals: RawDeviceSignals) -> StrataContext {
        StrataContext::new(
            Box::new(HeadlessProvider::new(signals)),
            ActionBindings::new(),
            StrataConfig::default(),
        )
    }

    #[test]
    fn test_initial_profile_classified_at_startup() {
        let mut signals = RawDeviceSignals::with_screen("iPhone", 390.0, 844.0);
        signals.has_touch = true;
        let context = context_with(signals);
        assert!(context.profile().is_mobile);
    }

    #[test]
    fn test_unsubscribed_callback_not_invoked() {
        let mut context = context_with(RawDeviceSignals::default());
        let count = Rc::new(RefCell::new(0));
        let seen = count.clone();
        let id = context.subscribe_snapshot(move |_| *seen.borrow_mut() += 1);
        context.tick();
        assert_eq!(*count.borrow(), 1);
        assert!(context.unsubscribe(id));
        context.tick();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_two_contexts_do_not_cross_contaminate() {
        let mut a = context_with(RawDeviceSignals::default());
        let b = context_with(RawDeviceSignals::default());
        let first = a.tick().timestamp_us;
        a.tick();
        assert_eq!(b.snapshot().timestamp_us, 0);
        assert!(first > 0);
    }
}
