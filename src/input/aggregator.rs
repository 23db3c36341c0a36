//! Per-tick input aggregation
//!
//! Merges the keyboard, pointer/touch, and gamepad sources into exactly one
//! [`InputSnapshot`] per tick. Tie-breaks:
//! - touch is authoritative over the mouse pointer for the same stick
//! - gamepad axes are read fresh every tick; a disconnected pad collapses to
//!   neutral instead of retaining its last values
//! - discrete keyboard values are never blended with analog values; the most
//!   recently engaged source owns the stick for the tick

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use enum_map::{Enum, EnumMap};

use super::bindings::ActionBindings;
use super::gamepad::{GamepadRead, GamepadSource};
use super::keyboard::{KeyCode, KeyboardSource};
use super::pointer::PointerSource;
use super::snapshot::{InputSnapshot, Stick, StickVector, Trigger};

/// Where a stick value can come from; declaration order is the tie-break
/// priority when two sources engaged on the same tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
enum StickSource {
    Touch,
    Gamepad,
    Keyboard,
    Pointer,
}

/// Tracks which source most recently engaged a stick
#[derive(Default)]
struct StickArbiter {
    was_engaged: EnumMap<StickSource, bool>,
    engaged_at: EnumMap<StickSource, u64>,
}

impl StickArbiter {
    fn resolve(
        &mut self,
        tick: u64,
        candidates: EnumMap<StickSource, Option<StickVector>>,
    ) -> StickVector {
        for (source, candidate) in &candidates {
            let engaged = candidate.is_some();
            if engaged && !self.was_engaged[source] {
                self.engaged_at[source] = tick;
            }
            self.was_engaged[source] = engaged;
        }

        let touch_engaged = candidates[StickSource::Touch].is_some();
        let mut winner: Option<(u64, StickVector)> = None;
        for (source, candidate) in &candidates {
            let Some(value) = candidate else { continue };
            // Touch is authoritative over the pointer.
            if source == StickSource::Pointer && touch_engaged {
                continue;
            }
            let engaged_at = self.engaged_at[source];
            // Strict comparison keeps the higher-priority (earlier) source
            // on a same-tick tie.
            if winner.is_none_or(|(best, _)| engaged_at > best) {
                winner = Some((engaged_at, *value));
            }
        }
        winner.map(|(_, v)| v).unwrap_or_default()
    }
}

/// Polls and merges all connected sources into canonical snapshots
pub struct InputAggregator {
    keyboard: KeyboardSource,
    pointer: PointerSource,
    gamepad: GamepadSource,
    /// Pad state fed from a platform bridge (e.g. the web gamepad API);
    /// consumed by the next tick only, so stale reads cannot linger
    fed_gamepad: Option<GamepadRead>,
    bindings: Arc<ActionBindings>,
    start: Instant,
    last_timestamp_us: u64,
    tick_index: u64,
    arbiters: EnumMap<Stick, StickArbiter>,
}

impl InputAggregator {
    pub fn new(bindings: Arc<ActionBindings>) -> Self {
        Self {
            keyboard: KeyboardSource::new(),
            pointer: PointerSource::new(),
            gamepad: GamepadSource::new(),
            fed_gamepad: None,
            bindings,
            start: Instant::now(),
            last_timestamp_us: 0,
            tick_index: 0,
            arbiters: EnumMap::default(),
        }
    }

    pub fn keyboard_mut(&mut self) -> &mut KeyboardSource {
        &mut self.keyboard
    }

    /// Records a key transition
    pub fn on_key(&mut self, key: KeyCode, pressed: bool) {
        self.keyboard.on_key(key, pressed);
    }

    pub fn on_cursor_move(&mut self, x: f32, y: f32) {
        self.pointer.on_cursor_move(x, y);
    }

    pub fn on_pointer_button(&mut self, pressed: bool) {
        self.pointer.on_button(pressed);
    }

    pub fn on_touch_start(&mut self, id: u64, x: f32, y: f32) {
        self.pointer.on_touch_start(id, x, y);
    }

    pub fn on_touch_move(&mut self, id: u64, x: f32, y: f32) {
        self.pointer.on_touch_move(id, x, y);
    }

    pub fn on_touch_end(&mut self, id: u64) {
        self.pointer.on_touch_end(id);
    }

    /// Supplies one tick's worth of pad state from a platform bridge
    ///
    /// Overrides the gilrs read for the next emitted snapshot only; feeding
    /// must happen every tick while the bridge pad is held, which keeps the
    /// no-caching rule intact.
    pub fn feed_gamepad(&mut self, read: GamepadRead) {
        self.fed_gamepad = Some(read);
    }

    /// Drops every held key, drag, and touch, e.g. on focus loss
    pub fn release_all(&mut self) {
        self.keyboard.release_all();
        self.pointer.release_all();
        self.fed_gamepad = None;
    }

    /// Drains gamepad hotplug events; returns true when connectivity changed
    /// so the owner can recompute the device profile
    pub fn pump_gamepad(&mut self) -> bool {
        self.gamepad.pump()
    }

    pub fn gamepad_connected(&self) -> bool {
        self.gamepad.connected()
    }

    /// Collects the state of every source and emits one snapshot
    pub fn tick(&mut self) -> Arc<InputSnapshot> {
        self.tick_index += 1;

        // Monotonic device clock; strictly increasing even when two ticks
        // land in the same microsecond.
        let now_us = self.start.elapsed().as_micros() as u64;
        let timestamp_us = now_us.max(self.last_timestamp_us + 1);
        self.last_timestamp_us = timestamp_us;

        // Fresh pad read, no caching across ticks.
        let pad = self
            .fed_gamepad
            .take()
            .unwrap_or_else(|| self.gamepad.read());

        let mut sticks: EnumMap<Stick, StickVector> = EnumMap::default();
        for stick in [Stick::Left, Stick::Right] {
            let mut candidates: EnumMap<StickSource, Option<StickVector>> = EnumMap::default();
            // Drag emulation maps to the left stick; the right stick is
            // analog- and arrow-key-only.
            if stick == Stick::Left {
                if self.pointer.touch_active() {
                    candidates[StickSource::Touch] =
                        Some(self.pointer.touch_stick().unwrap_or_default());
                }
                if self.pointer.pointer_dragging() {
                    candidates[StickSource::Pointer] =
                        Some(self.pointer.pointer_stick().unwrap_or_default());
                }
            }
            let pad_value = match stick {
                Stick::Left => pad.left,
                Stick::Right => pad.right,
            };
            if !pad_value.is_neutral() {
                candidates[StickSource::Gamepad] = Some(pad_value);
            }
            if self.keyboard.stick_engaged(stick) {
                candidates[StickSource::Keyboard] = Some(self.keyboard.stick(stick));
            }
            sticks[stick] = self.arbiters[stick]
                .resolve(self.tick_index, candidates)
                .clamped();
        }

        let mut buttons = HashMap::with_capacity(self.bindings.len());
        for (name, binding) in self.bindings.iter() {
            let held = binding.keys.iter().any(|&k| self.keyboard.is_held(k))
                || binding.buttons.iter().any(|b| pad.held.contains(b));
            buttons.insert(name.to_string(), held);
        }

        let mut triggers: EnumMap<Trigger, f32> = EnumMap::default();
        triggers[Trigger::Left] = pad.trigger_left.clamp(0.0, 1.0);
        triggers[Trigger::Right] = pad.trigger_right.clamp(0.0, 1.0);

        Arc::new(InputSnapshot {
            timestamp_us,
            sticks,
            buttons,
            triggers,
            touches: self.pointer.touches(),
        })
    }
}
