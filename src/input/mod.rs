//! Input aggregation
//!
//! This module provides:
//! - [`InputAggregator`]: per-tick merge of keyboard, pointer/touch, and
//!   gamepad state into one [`InputSnapshot`]
//! - [`ActionBindings`]: the static logical-action-to-physical-trigger table
//! - Source trackers for each physical input family
//!
//! ```text
//! Raw events → KeyboardSource / PointerSource / GamepadSource
//!                              ↓
//!                      InputAggregator::tick()
//!                              ↓
//!                      Arc<InputSnapshot> → SnapshotQuery
//! ```

mod aggregator;
pub mod bindings;
mod gamepad;
mod keyboard;
mod pointer;
pub mod snapshot;

pub use aggregator::InputAggregator;
pub use bindings::{ActionBinding, ActionBindings, Rect};
pub use gamepad::{GamepadRead, GamepadSource, PadButton};
pub use keyboard::{KeyCode, KeyboardSource, StickKeys};
pub use pointer::PointerSource;
pub use snapshot::{InputSnapshot, Stick, StickVector, TouchPoint, Trigger};
