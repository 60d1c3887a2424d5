// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-source helper: turn pointer positions into [`DragInfo`] updates.
//!
//! ## Usage
//!
//! 1) On pointer down over a draggable element, call [`DragTracker::start`] with
//!    the element's bounding box and the pointer position.
//! 2) On each move event, call [`DragTracker::update`] to get the element box
//!    translated by the total pointer offset, ready to feed into
//!    [`DragDrop::drag`](crate::session::DragDrop::drag).
//! 3) End the gesture with [`DragTracker::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_dnd::geometry::rect;
//! use understory_dnd::tracker::DragTracker;
//!
//! let mut tracker = DragTracker::default();
//! tracker.start(rect(100.0, 100.0, 80.0, 40.0), Point::new(110.0, 120.0));
//!
//! let info = tracker.update(Point::new(160.0, 150.0)).unwrap();
//! assert_eq!(info.rect, rect(150.0, 130.0, 80.0, 40.0));
//! assert_eq!(info.pointer, Point::new(160.0, 150.0));
//! ```

use kurbo::{Point, Rect, Vec2};

use crate::types::DragInfo;

/// Tracks the dragged element for move event processing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    /// Element bounds when the drag started.
    pub origin_rect: Option<Rect>,
    /// Pointer position when the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
}

impl DragTracker {
    /// Start tracking a drag of an element with bounds `rect`, grabbed at `pos`.
    pub fn start(&mut self, rect: Rect, pos: Point) {
        self.origin_rect = Some(rect);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a new pointer position and return the updated drag geometry.
    ///
    /// Returns `None` when no drag is being tracked.
    pub fn update(&mut self, pos: Point) -> Option<DragInfo> {
        let info = self.info_at(pos)?;
        self.last_pos = Some(pos);
        Some(info)
    }

    /// Movement since the last recorded position, without recording `pos`.
    pub fn delta(&self, pos: Point) -> Option<Vec2> {
        self.last_pos.map(|last| pos - last)
    }

    /// Total pointer offset from the drag start.
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Drag geometry at the last recorded pointer position.
    pub fn current(&self) -> Option<DragInfo> {
        self.info_at(self.last_pos?)
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is being tracked.
    pub fn is_dragging(&self) -> bool {
        self.origin_rect.is_some() && self.start_pos.is_some()
    }

    fn info_at(&self, pos: Point) -> Option<DragInfo> {
        let rect = self.origin_rect? + self.total_offset(pos)?;
        Some(DragInfo::new(rect, pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect;

    #[test]
    fn new_tracker_is_idle() {
        let t = DragTracker::default();
        assert!(!t.is_dragging());
        assert!(t.current().is_none());
    }

    #[test]
    fn update_without_start_returns_none() {
        let mut t = DragTracker::default();
        assert_eq!(t.update(Point::new(5.0, 5.0)), None);
        assert!(t.last_pos.is_none());
    }

    #[test]
    fn start_records_origin() {
        let mut t = DragTracker::default();
        let r = rect(10.0, 20.0, 30.0, 40.0);
        t.start(r, Point::new(15.0, 25.0));
        assert!(t.is_dragging());
        assert_eq!(t.current(), Some(DragInfo::new(r, Point::new(15.0, 25.0))));
    }

    #[test]
    fn rect_follows_total_offset() {
        let mut t = DragTracker::default();
        t.start(rect(0.0, 0.0, 10.0, 10.0), Point::new(5.0, 5.0));
        t.update(Point::new(8.0, 6.0));
        let info = t.update(Point::new(25.0, 45.0)).unwrap();
        assert_eq!(info.rect, rect(20.0, 40.0, 10.0, 10.0));
        assert_eq!(t.total_offset(Point::new(25.0, 45.0)), Some(Vec2::new(20.0, 40.0)));
    }

    #[test]
    fn delta_is_relative_to_last_update() {
        let mut t = DragTracker::default();
        t.start(rect(0.0, 0.0, 10.0, 10.0), Point::new(0.0, 0.0));
        t.update(Point::new(5.0, 3.0));
        assert_eq!(t.delta(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        // Peeking does not record.
        assert_eq!(t.last_pos, Some(Point::new(5.0, 3.0)));
    }

    #[test]
    fn negative_movement() {
        let mut t = DragTracker::default();
        t.start(rect(100.0, 100.0, 10.0, 10.0), Point::new(100.0, 100.0));
        let info = t.update(Point::new(90.0, 85.0)).unwrap();
        assert_eq!(info.rect, rect(90.0, 85.0, 10.0, 10.0));
    }

    #[test]
    fn end_resets_state() {
        let mut t = DragTracker::default();
        t.start(rect(0.0, 0.0, 1.0, 1.0), Point::new(0.0, 0.0));
        t.end();
        assert!(!t.is_dragging());
        assert!(t.origin_rect.is_none());
        assert!(t.last_pos.is_none());
    }

    #[test]
    fn restart_overwrites_previous_drag() {
        let mut t = DragTracker::default();
        t.start(rect(0.0, 0.0, 1.0, 1.0), Point::new(0.0, 0.0));
        t.update(Point::new(10.0, 10.0));
        t.start(rect(50.0, 60.0, 1.0, 1.0), Point::new(50.0, 60.0));
        let info = t.update(Point::new(55.0, 65.0)).unwrap();
        assert_eq!(info.rect, rect(55.0, 65.0, 1.0, 1.0));
    }
}
