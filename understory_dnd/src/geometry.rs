// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle overlap and pointer containment for drop zones.
//!
//! Coordinates use a top-left origin with +y pointing down (viewport pixels).
//! Both tests treat the max edges as exclusive, so two rectangles that only
//! share an edge do not overlap, and a pointer on a zone's right or bottom
//! edge is outside it.
//!
//! ```
//! use understory_dnd::geometry::{overlap, pointer_in, rect};
//! use kurbo::Point;
//!
//! let zone = rect(500.0, 500.0, 200.0, 200.0);
//! let dragged = rect(690.0, 510.0, 200.0, 150.0);
//!
//! let o = overlap(&dragged, &zone).unwrap();
//! assert_eq!(o, rect(690.0, 510.0, 10.0, 150.0));
//! assert!(!pointer_in(&zone, Point::new(700.0, 600.0)));
//! ```

use kurbo::{Point, Rect};

/// Build a rectangle from its origin and size.
///
/// Unlike [`Rect::from_origin_size`], negative sizes are kept as given rather
/// than normalized, so degenerate input stays degenerate.
#[inline]
pub const fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

/// Whether `a` and `b` share at least one point.
///
/// Intervals are half-open on the max side for both rectangles.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// The overlap rectangle of `a` and `b`, or `None` when they do not overlap.
#[inline]
pub fn overlap(a: &Rect, b: &Rect) -> Option<Rect> {
    if !overlaps(a, b) {
        return None;
    }
    let x0 = a.x0.max(b.x0);
    let y0 = a.y0.max(b.y0);
    let x1 = a.x1.min(b.x1);
    let y1 = a.y1.min(b.y1);
    Some(Rect::new(x0, y0, x1, y1))
}

/// Whether `pt` lies in `[x0, x1) × [y0, y1)` of `zone`.
#[inline]
pub fn pointer_in(zone: &Rect, pt: Point) -> bool {
    zone.x0 <= pt.x && pt.x < zone.x1 && zone.y0 <= pt.y && pt.y < zone.y1
}
