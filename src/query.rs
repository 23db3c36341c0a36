//! Snapshot query facade
//!
//! A read-only projection over the latest [`InputSnapshot`], resolving
//! logical actions against the static binding table. Queries are total:
//! unbound action names are simply not pressed.

use std::sync::Arc;

use crate::input::bindings::ActionBindings;
use crate::input::snapshot::{InputSnapshot, Stick, StickVector, Trigger};

/// Read-only view over the latest snapshot
#[derive(Clone)]
pub struct SnapshotQuery {
    snapshot: Arc<InputSnapshot>,
    bindings: Arc<ActionBindings>,
}

impl SnapshotQuery {
    pub fn new(snapshot: Arc<InputSnapshot>, bindings: Arc<ActionBindings>) -> Self {
        Self { snapshot, bindings }
    }

    /// Whether any physical trigger bound to the action is currently held
    ///
    /// True when the snapshot reports the action held (keyboard or gamepad)
    /// or any active touch lands inside a bound screen region. Unbound names
    /// always resolve to false.
    pub fn is_pressed(&self, action: &str) -> bool {
        if self.snapshot.button_held(action) {
            return true;
        }
        let Some(binding) = self.bindings.get(action) else {
            return false;
        };
        binding.regions.iter().any(|region| {
            self.snapshot
                .touches
                .iter()
                .any(|touch| region.contains(touch.x, touch.y))
        })
    }

    /// Resolved stick value for the tick
    pub fn axis(&self, stick: Stick) -> StickVector {
        self.snapshot.sticks[stick]
    }

    /// Analog trigger value in [0, 1]
    pub fn trigger_value(&self, trigger: Trigger) -> f32 {
        self.snapshot.triggers[trigger]
    }

    /// Timestamp of the snapshot being queried
    pub fn timestamp_us(&self) -> u64 {
        self.snapshot.timestamp_us
    }

    /// The snapshot under this view
    pub fn snapshot(&self) -> &InputSnapshot {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::bindings::{ActionBinding, Rect};
    use crate::input::snapshot::TouchPoint;

    fn query_with(snapshot: InputSnapshot, bindings: ActionBindings) -> SnapshotQuery {
        SnapshotQuery::new(Arc::new(snapshot), Arc::new(bindings))
    }

    #[test]
    fn test_pressed_from_snapshot_buttons() {
        let mut snapshot = InputSnapshot::default();
        snapshot.buttons.insert("jump".to_string(), true);
        snapshot.sticks[Stick::Left] = StickVector::new(0.5, -0.5);
        let q = query_with(snapshot, ActionBindings::new());
        assert!(q.is_pressed("jump"));
        assert_eq!(q.axis(Stick::Left), StickVector::new(0.5, -0.5));
    }

    #[test]
    fn test_unbound_action_is_false_not_an_error() {
        let q = query_with(InputSnapshot::default(), ActionBindings::new());
        assert!(!q.is_pressed("nonexistent-action"));
    }

    #[test]
    fn test_touch_in_bound_region_counts_as_press() {
        let bindings = ActionBindings::new().with_action(
            "fire",
            ActionBinding::builder()
                .regions(vec![Rect::new(0.0, 0.0, 100.0, 100.0)])
                .build(),
        );
        let mut snapshot = InputSnapshot::default();
        snapshot.touches.push(TouchPoint {
            id: 1,
            x: 50.0,
            y: 50.0,
        });
        let q = query_with(snapshot.clone(), bindings.clone());
        assert!(q.is_pressed("fire"));

        snapshot.touches[0].x = 500.0;
        let q = query_with(snapshot, bindings);
        assert!(!q.is_pressed("fire"));
    }
}
