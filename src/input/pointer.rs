//! Pointer and touch input source
//!
//! Tracks active touch contacts in order of first contact (stable until
//! release) and derives an emulated stick vector from the primary drag.
//! Touch is authoritative over the mouse pointer on touch-capable devices;
//! the aggregator enforces that precedence.

use super::snapshot::{StickVector, TouchPoint};

/// Drag distance in CSS pixels that fully deflects an emulated stick
const DRAG_FULL_DEFLECTION_PX: f32 = 96.0;

#[derive(Debug, Clone, Copy)]
struct TouchTrack {
    point: TouchPoint,
    origin: [f32; 2],
}

/// Mouse and touchscreen state
pub struct PointerSource {
    cursor: Option<[f32; 2]>,
    /// Cursor position when the primary button went down
    drag_origin: Option<[f32; 2]>,
    touches: Vec<TouchTrack>,
}

impl PointerSource {
    pub fn new() -> Self {
        Self {
            cursor: None,
            drag_origin: None,
            touches: Vec::new(),
        }
    }

    pub fn on_cursor_move(&mut self, x: f32, y: f32) {
        self.cursor = Some([x, y]);
    }

    /// Primary button transition; a press starts a drag at the cursor
    pub fn on_button(&mut self, pressed: bool) {
        self.drag_origin = if pressed { self.cursor } else { None };
    }

    pub fn on_touch_start(&mut self, id: u64, x: f32, y: f32) {
        if self.touches.iter().any(|t| t.point.id == id) {
            return;
        }
        self.touches.push(TouchTrack {
            point: TouchPoint { id, x, y },
            origin: [x, y],
        });
    }

    pub fn on_touch_move(&mut self, id: u64, x: f32, y: f32) {
        if let Some(track) = self.touches.iter_mut().find(|t| t.point.id == id) {
            track.point.x = x;
            track.point.y = y;
        }
    }

    pub fn on_touch_end(&mut self, id: u64) {
        self.touches.retain(|t| t.point.id != id);
    }

    /// Active touches in order of first contact
    pub fn touches(&self) -> Vec<TouchPoint> {
        self.touches.iter().map(|t| t.point).collect()
    }

    pub fn touch_active(&self) -> bool {
        !self.touches.is_empty()
    }

    pub fn pointer_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Emulated stick from the first touch's drag, if any
    pub fn touch_stick(&self) -> Option<StickVector> {
        let track = self.touches.first()?;
        Some(drag_vector(
            track.origin,
            [track.point.x, track.point.y],
        ))
    }

    /// Emulated stick from the mouse drag, if the button is held
    pub fn pointer_stick(&self) -> Option<StickVector> {
        let origin = self.drag_origin?;
        let current = self.cursor?;
        Some(drag_vector(origin, current))
    }

    /// Drops all contacts and drags, e.g. on focus loss
    pub fn release_all(&mut self) {
        self.drag_origin = None;
        self.touches.clear();
    }
}

impl Default for PointerSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen y grows downward; dragging up deflects the stick to +y
fn drag_vector(origin: [f32; 2], current: [f32; 2]) -> StickVector {
    StickVector::new(
        (current[0] - origin[0]) / DRAG_FULL_DEFLECTION_PX,
        (origin[1] - current[1]) / DRAG_FULL_DEFLECTION_PX,
    )
    .clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_order_is_first_contact_and_stable() {
        let mut src = PointerSource::new();
        src.on_touch_start(7, 10.0, 10.0);
        src.on_touch_start(3, 20.0, 20.0);
        src.on_touch_move(7, 15.0, 15.0);
        let touches = src.touches();
        assert_eq!(touches.len(), 2);
        assert_eq!(touches[0].id, 7);
        assert_eq!(touches[1].id, 3);

        src.on_touch_end(7);
        assert_eq!(src.touches()[0].id, 3);
    }

    #[test]
    fn test_touch_drag_deflects_stick() {
        let mut src = PointerSource::new();
        src.on_touch_start(1, 100.0, 100.0);
        src.on_touch_move(1, 148.0, 52.0);
        let stick = src.touch_stick().unwrap();
        assert!((stick.x - 0.5).abs() < 1e-6);
        assert!((stick.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_drag_requires_button() {
        let mut src = PointerSource::new();
        src.on_cursor_move(50.0, 50.0);
        assert!(src.pointer_stick().is_none());
        src.on_button(true);
        src.on_cursor_move(50.0, 2.0);
        let stick = src.pointer_stick().unwrap();
        assert!(stick.y > 0.0);
        src.on_button(false);
        assert!(src.pointer_stick().is_none());
    }

    #[test]
    fn test_duplicate_touch_start_keeps_origin() {
        let mut src = PointerSource::new();
        src.on_touch_start(1, 0.0, 0.0);
        src.on_touch_start(1, 500.0, 500.0);
        assert_eq!(src.touches().len(), 1);
        assert_eq!(src.touches()[0].x, 0.0);
    }
}
