// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dnd --heading-base-level=0

//! Understory DnD: drop-zone arbitration for drag-and-drop UIs.
//!
//! ## Overview
//!
//! This crate decides which drop zone a dragged element is over. Drop targets
//! register a [`Matcher`](crate::matcher::Matcher) plus hover/cancel/drop
//! callbacks; the drag source reports the dragged element's bounds and the
//! pointer position on every move. Among all zones that intersect the drag, a
//! single winner is chosen and notified.
//! It does not render anything or read input devices.
//!
//! ## Arbitration
//!
//! - Zones whose matcher returns `None` are ignored.
//! - A single intersecting zone always wins.
//! - Among several, a zone that contains the pointer wins; otherwise the zone
//!   with the largest overlap area wins.
//! - Ties go to the zone registered first (see [`TieBreakPolicy`](crate::types::TieBreakPolicy)).
//!
//! When the winner changes, the previous winner receives
//! [`CancelKind::Leave`](crate::types::CancelKind::Leave). When the drag ends,
//! every zone receives [`CancelKind::Global`](crate::types::CancelKind::Global).
//!
//! ## Geometry
//!
//! Rectangles are [`kurbo::Rect`] in a top-left-origin, y-down space. Overlap
//! and pointer tests treat the right and bottom edges as exclusive, so rects
//! that only touch do not intersect. See [`geometry`].
//!
//! ## Workflow
//!
//! 1) Build a [`DragDrop`](crate::session::DragDrop) (or a bare
//!    [`DropZones`](crate::zones::DropZones) if you manage the payload yourself).
//! 2) Register a [`DropZone`](crate::zones::DropZone) per target, typically
//!    around a [`RectMatcher`](crate::matcher::RectMatcher). Use
//!    [`ZoneRect::Dynamic`](crate::matcher::ZoneRect::Dynamic) for zones that
//!    scroll, and namespaces to keep unrelated drag domains apart.
//! 3) On pointer down, [`start`](crate::session::DragDrop::start) a session and
//!    a [`DragTracker`](crate::tracker::DragTracker).
//! 4) On pointer move, feed `tracker.update(pos)` into
//!    [`drag`](crate::session::DragDrop::drag).
//! 5) On pointer up, [`drop`](crate::session::DragDrop::drop); on escape,
//!    [`cancel`](crate::session::DragDrop::cancel).
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use understory_dnd::geometry::rect;
//! use understory_dnd::matcher::RectMatcher;
//! use understory_dnd::session::DragDrop;
//! use understory_dnd::tracker::DragTracker;
//! use understory_dnd::zones::DropZone;
//!
//! let received = Rc::new(RefCell::new(None));
//! let sink = received.clone();
//!
//! let mut dnd: DragDrop<&str, u32> = DragDrop::new();
//! dnd.register("todo", DropZone::new(RectMatcher::new(rect(0.0, 0.0, 200.0, 600.0))));
//! dnd.register(
//!     "done",
//!     DropZone::new(RectMatcher::new(rect(250.0, 0.0, 200.0, 600.0)))
//!         .on_drop(move |task: &u32| *sink.borrow_mut() = Some(*task)),
//! );
//!
//! // Grab task 42 in the "todo" column.
//! let mut tracker = DragTracker::default();
//! tracker.start(rect(10.0, 10.0, 180.0, 40.0), Point::new(20.0, 20.0));
//! dnd.start(42, None).unwrap();
//!
//! // Move it across into "done".
//! let info = tracker.update(Point::new(300.0, 40.0)).unwrap();
//! assert_eq!(dnd.drag(&info), Some("done"));
//!
//! assert_eq!(dnd.drop(), Some("done"));
//! assert_eq!(*received.borrow(), Some(42));
//! ```
//!
//! ## Logging
//!
//! Registration changes, winner transitions, cancels and drops are reported as
//! [`tracing`] events at `trace`/`debug` level. Install a subscriber in the
//! application to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arbiter;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod session;
pub mod tracker;
pub mod types;
pub mod zones;

pub use error::SessionError;
pub use session::DragDrop;
pub use types::{ArbiterPolicy, CancelKind, DragInfo, Intersection, TieBreakPolicy};
pub use zones::{DropZone, DropZones};
