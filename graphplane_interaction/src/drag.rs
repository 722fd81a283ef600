// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: pointer deltas between successive move events.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`] at the pointer-down position.
//! 2) On each move event, call [`DragState::update`] to get the movement since
//!    the previous event. The last position is recorded on every call.
//! 3) End the drag with [`DragState::end`] on pointer up or when the pointer
//!    leaves the surface. Nothing is buffered across drags.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use graphplane_interaction::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! drag.end();
//! assert!(drag.update(Point::new(30.0, 30.0)).is_none());
//! ```

use kurbo::{Point, Vec2};

/// Tracks the pointer across one drag gesture.
///
/// Only the previous pointer position is kept; pan applies each move's delta
/// as it arrives.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    last_pos: Option<Point>,
}

impl DragState {
    /// Start tracking a new drag from `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Record `pos` and return the movement since the last recorded position.
    ///
    /// Returns `None` while idle.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    /// End the current drag and return to idle.
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_idle() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn update_while_idle_records_nothing() {
        let mut drag = DragState::default();

        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(!drag.is_dragging());
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn successive_updates_are_incremental() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(drag.update(Point::new(6.0, 7.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn restart_discards_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 10.0));

        drag.start(Point::new(50.0, 60.0));
        assert_eq!(drag.update(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn end_resets_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.end();

        assert_eq!(drag, DragState::default());
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
    }
}
