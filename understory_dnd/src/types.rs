// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core value types shared by matchers, the registry, and the session.

use kurbo::{Point, Rect};

/// Geometry of an in-flight drag, supplied on every evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragInfo {
    /// Current bounding box of the dragged element.
    pub rect: Rect,
    /// Current pointer position.
    pub pointer: Point,
}

impl DragInfo {
    /// Create drag geometry from the element rectangle and pointer position.
    pub const fn new(rect: Rect, pointer: Point) -> Self {
        Self { rect, pointer }
    }
}

/// Overlap between a dragged element and one candidate drop zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// The overlap rectangle.
    pub rect: Rect,
    /// Whether the pointer itself lies inside the zone.
    pub pointer: bool,
}

impl Intersection {
    /// Area of the overlap rectangle (`width * height`).
    ///
    /// Degenerate rectangles produce zero (or, for inverted input, possibly
    /// negative) area; they are not rejected.
    #[inline]
    pub fn area(&self) -> f64 {
        self.rect.width() * self.rect.height()
    }
}

impl AsRef<Self> for Intersection {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Why a drop zone's cancel callback is being invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CancelKind {
    /// The zone lost arbitration to another zone (or to none) while the drag
    /// continues. Hover feedback should be cleared.
    Leave,
    /// The whole drag ended, either cancelled or after a drop.
    Global,
}

impl CancelKind {
    /// Returns `true` for [`CancelKind::Global`].
    #[inline]
    pub const fn is_global(self) -> bool {
        matches!(self, Self::Global)
    }
}

/// How to break ties between equally ranked candidates.
///
/// Applies both when several candidates contain the pointer and when several
/// candidates share the largest overlap area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreakPolicy {
    /// The first candidate in registration order wins.
    #[default]
    First,
    /// The last candidate in registration order wins.
    Last,
}

/// Arbitration settings for a [`DropZones`](crate::zones::DropZones) registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArbiterPolicy {
    /// When several zones intersect, prefer one that contains the pointer
    /// before comparing overlap areas.
    pub prefer_pointer: bool,
    /// Tie-break among equally ranked candidates.
    pub tie_break: TieBreakPolicy,
}

impl Default for ArbiterPolicy {
    fn default() -> Self {
        Self {
            prefer_pointer: true,
            tie_break: TieBreakPolicy::First,
        }
    }
}
