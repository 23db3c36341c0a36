//! Strata
//!
//! A platform-independent view of "what device am I running on and how is
//! the player providing input". Raw platform signals are normalized into a
//! classified [`DeviceProfile`] and a per-tick [`input::InputSnapshot`], so
//! the same control logic works on desktop-web, touch-mobile, and
//! gamepad-equipped devices without per-platform branching.

/// Device classification: raw signals to [`DeviceProfile`]
pub mod classify;

/// Layered configuration (classifier thresholds, haptic policy)
pub mod config;

/// Process-scoped context owning the current profile and snapshot
pub mod context;

/// Haptics / orientation / touch-handling dispatch
pub mod dispatch;

/// Provider and dispatcher error types
pub mod error;

/// Health check system
pub mod health;

/// Input aggregation into per-tick snapshots
pub mod input;

/// Normalized device description types
pub mod profile;

/// Per-platform capability providers
pub mod provider;

/// Read-only query facade over the latest snapshot
pub mod query;

pub use config::StrataConfig;
pub use context::{StrataContext, SubscriptionId};
pub use dispatch::{HapticKind, HapticStyle, OrientationLock, TouchHandling};
pub use error::ProviderError;
pub use profile::{DeviceProfile, DeviceType, InputMode, Orientation, Platform, SafeArea};
pub use query::SnapshotQuery;
