// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Matchers: map drag geometry to an [`Intersection`] with one drop zone.
//!
//! Any `Fn(&DragInfo, &D) -> Option<Intersection>` closure is a [`Matcher`].
//! For the common case of a rectangular zone, use [`RectMatcher`]. Any matcher
//! can be restricted to payloads from particular namespaces with
//! [`NamespacedMatcher`], so that independent drag-and-drop domains on one
//! surface never cross-match.
//!
//! ```
//! use understory_dnd::geometry::rect;
//! use understory_dnd::matcher::{Matcher, RectMatcher};
//! use understory_dnd::types::DragInfo;
//! use kurbo::Point;
//!
//! let column = RectMatcher::new(rect(0.0, 0.0, 200.0, 600.0)).with_namespace("tasks");
//! let info = DragInfo::new(rect(150.0, 40.0, 100.0, 30.0), Point::new(190.0, 50.0));
//!
//! let hit = column.matches(&info, &"tasks").unwrap();
//! assert!(hit.pointer);
//! assert_eq!(hit.rect, rect(150.0, 40.0, 50.0, 30.0));
//!
//! // A payload from another domain is ignored before any geometry test.
//! assert!(column.matches(&info, &"projects").is_none());
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::geometry::{overlap, pointer_in};
use crate::types::{DragInfo, Intersection};

/// Geometry predicate for one drop zone.
///
/// Returns `None` when the drag does not concern this zone (no overlap, or a
/// filtered-out payload), otherwise the overlap description.
pub trait Matcher<D: ?Sized> {
    /// Test the current drag against this zone.
    fn matches(&self, info: &DragInfo, data: &D) -> Option<Intersection>;
}

impl<D: ?Sized, F> Matcher<D> for F
where
    F: Fn(&DragInfo, &D) -> Option<Intersection>,
{
    fn matches(&self, info: &DragInfo, data: &D) -> Option<Intersection> {
        self(info, data)
    }
}

/// Drag payloads that belong to a named drag-and-drop domain.
pub trait Namespaced {
    /// The payload's namespace, if it has one.
    fn namespace(&self) -> Option<&str>;
}

impl Namespaced for () {
    fn namespace(&self) -> Option<&str> {
        None
    }
}

impl Namespaced for str {
    fn namespace(&self) -> Option<&str> {
        Some(self)
    }
}

impl Namespaced for &str {
    fn namespace(&self) -> Option<&str> {
        Some(*self)
    }
}

impl Namespaced for String {
    fn namespace(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Which payload namespaces a [`NamespacedMatcher`] accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NamespaceFilter {
    /// Accept every payload, namespaced or not.
    #[default]
    Any,
    /// Accept payloads whose namespace equals this one.
    One(String),
    /// Accept payloads whose namespace is listed.
    Many(Vec<String>),
}

impl NamespaceFilter {
    /// Whether a payload with namespace `ns` passes the filter.
    ///
    /// Payloads without a namespace only pass [`NamespaceFilter::Any`].
    pub fn accepts(&self, ns: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::One(want) => ns == Some(want.as_str()),
            Self::Many(list) => ns.is_some_and(|ns| list.iter().any(|w| w == ns)),
        }
    }
}

/// Where a zone currently is.
///
/// Dynamic zones are re-queried on every evaluation, which keeps scrolled or
/// animated zones accurate without re-registering them.
pub enum ZoneRect {
    /// A fixed rectangle.
    Static(Rect),
    /// A provider queried on each evaluation.
    Dynamic(Box<dyn Fn() -> Rect>),
}

impl ZoneRect {
    /// Create a dynamic zone from a provider closure.
    pub fn dynamic(provider: impl Fn() -> Rect + 'static) -> Self {
        Self::Dynamic(Box::new(provider))
    }

    /// Resolve the current rectangle.
    #[inline]
    pub fn get(&self) -> Rect {
        match self {
            Self::Static(r) => *r,
            Self::Dynamic(f) => f(),
        }
    }
}

impl From<Rect> for ZoneRect {
    fn from(r: Rect) -> Self {
        Self::Static(r)
    }
}

impl fmt::Debug for ZoneRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(r) => f.debug_tuple("Static").field(r).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Stock matcher for rectangular drop zones.
///
/// Accepts every payload; wrap it with [`with_namespace`](Self::with_namespace)
/// or [`with_namespaces`](Self::with_namespaces) to filter by domain.
#[derive(Debug)]
pub struct RectMatcher {
    zone: ZoneRect,
}

impl RectMatcher {
    /// Match against `zone`.
    pub fn new(zone: impl Into<ZoneRect>) -> Self {
        Self { zone: zone.into() }
    }

    /// Only accept payloads from namespace `ns`.
    pub fn with_namespace(self, ns: impl Into<String>) -> NamespacedMatcher<Self> {
        NamespacedMatcher::new(self, NamespaceFilter::One(ns.into()))
    }

    /// Only accept payloads from one of `namespaces`.
    pub fn with_namespaces<I, S>(self, namespaces: I) -> NamespacedMatcher<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NamespacedMatcher::new(
            self,
            NamespaceFilter::Many(namespaces.into_iter().map(Into::into).collect()),
        )
    }

    /// The zone rectangle as of now.
    pub fn zone(&self) -> Rect {
        self.zone.get()
    }
}

impl<D: ?Sized> Matcher<D> for RectMatcher {
    fn matches(&self, info: &DragInfo, _data: &D) -> Option<Intersection> {
        let zone = self.zone.get();
        let rect = overlap(&info.rect, &zone)?;
        Some(Intersection {
            rect,
            pointer: pointer_in(&zone, info.pointer),
        })
    }
}

/// A matcher restricted to payloads from some namespaces.
///
/// The namespace check runs before the inner matcher, so filtered-out
/// payloads never reach any geometry code.
#[derive(Debug)]
pub struct NamespacedMatcher<M> {
    inner: M,
    filter: NamespaceFilter,
}

impl<M> NamespacedMatcher<M> {
    /// Restrict `inner` with `filter`.
    pub fn new(inner: M, filter: NamespaceFilter) -> Self {
        Self { inner, filter }
    }

    /// The namespace filter in effect.
    pub fn filter(&self) -> &NamespaceFilter {
        &self.filter
    }

    /// The wrapped matcher.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<D, M> Matcher<D> for NamespacedMatcher<M>
where
    D: Namespaced + ?Sized,
    M: Matcher<D>,
{
    fn matches(&self, info: &DragInfo, data: &D) -> Option<Intersection> {
        if !self.filter.accepts(data.namespace()) {
            return None;
        }
        self.inner.matches(info, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;
    use kurbo::Point;

    fn info(x: f64, y: f64, w: f64, h: f64, px: f64, py: f64) -> DragInfo {
        DragInfo::new(rect(x, y, w, h), Point::new(px, py))
    }

    #[test]
    fn no_overlap_returns_none() {
        let m = RectMatcher::new(rect(500.0, 500.0, 200.0, 200.0));
        assert!(
            m.matches(&info(10.0, 10.0, 200.0, 150.0, 100.0, 100.0), &())
                .is_none()
        );
    }

    #[test]
    fn touching_left_edge_returns_none() {
        let m = RectMatcher::new(rect(500.0, 500.0, 200.0, 200.0));
        assert!(
            m.matches(&info(300.0, 510.0, 200.0, 150.0, 499.0, 600.0), &())
                .is_none()
        );
    }

    #[test]
    fn reports_overlap_and_pointer() {
        let m = RectMatcher::new(rect(500.0, 500.0, 200.0, 200.0));
        let hit = m
            .matches(&info(510.0, 510.0, 200.0, 150.0, 600.0, 600.0), &())
            .unwrap();
        assert_eq!(
            hit,
            Intersection {
                rect: rect(510.0, 510.0, 190.0, 150.0),
                pointer: true,
            }
        );
    }

    #[test]
    fn pointer_outside_zone_is_reported() {
        let m = RectMatcher::new(rect(500.0, 500.0, 200.0, 200.0));
        let hit = m
            .matches(&info(690.0, 510.0, 200.0, 150.0, 710.0, 600.0), &())
            .unwrap();
        assert!(!hit.pointer);
        assert_eq!(hit.area(), 1500.0);
    }

    #[test]
    fn single_namespace_filter() {
        let m = RectMatcher::new(rect(0.0, 0.0, 100.0, 100.0)).with_namespace("tasks");
        let i = info(10.0, 10.0, 10.0, 10.0, 15.0, 15.0);
        assert!(m.matches(&i, "tasks").is_some());
        assert!(m.matches(&i, "projects").is_none());
        // A payload without a namespace never passes a namespaced zone.
        assert!(m.matches(&i, &()).is_none());
    }

    #[test]
    fn multi_namespace_filter() {
        let m = RectMatcher::new(rect(0.0, 0.0, 100.0, 100.0)).with_namespaces(["todo", "done"]);
        let i = info(10.0, 10.0, 10.0, 10.0, 15.0, 15.0);
        assert!(m.matches(&i, &String::from("done")).is_some());
        assert!(m.matches(&i, &"todo").is_some());
        assert!(m.matches(&i, &"archive").is_none());
        assert_eq!(
            m.filter(),
            &NamespaceFilter::Many(vec![String::from("todo"), String::from("done")])
        );
    }

    #[test]
    fn any_filter_accepts_plain_payloads() {
        let m = NamespacedMatcher::new(
            RectMatcher::new(rect(0.0, 0.0, 100.0, 100.0)),
            NamespaceFilter::Any,
        );
        let i = info(10.0, 10.0, 10.0, 10.0, 15.0, 15.0);
        assert!(m.matches(&i, &()).is_some());
        assert!(m.matches(&i, "anything").is_some());
        assert_eq!(m.inner().zone(), rect(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn namespace_rejects_before_geometry() {
        let calls = Rc::new(Cell::new(0_u32));
        let counter = calls.clone();
        let m = RectMatcher::new(ZoneRect::dynamic(move || {
            counter.set(counter.get() + 1);
            rect(0.0, 0.0, 100.0, 100.0)
        }))
        .with_namespace("tasks");
        let i = info(10.0, 10.0, 10.0, 10.0, 15.0, 15.0);
        assert!(m.matches(&i, "projects").is_none());
        assert_eq!(calls.get(), 0);
        assert!(m.matches(&i, "tasks").is_some());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dynamic_zone_is_requeried() {
        let offset = Rc::new(Cell::new(0.0_f64));
        let scroll = offset.clone();
        let m = RectMatcher::new(ZoneRect::dynamic(move || {
            rect(0.0, 100.0 - scroll.get(), 100.0, 100.0)
        }));
        let i = info(10.0, 10.0, 20.0, 20.0, 15.0, 15.0);
        assert!(m.matches(&i, &()).is_none());
        // Scrolling brings the zone under the dragged element.
        offset.set(95.0);
        let hit = m.matches(&i, &()).unwrap();
        assert!(hit.pointer);
        assert_eq!(m.zone(), rect(0.0, 5.0, 100.0, 100.0));
    }

    #[test]
    fn closures_are_matchers() {
        let always = |i: &DragInfo, _: &u32| {
            Some(Intersection {
                rect: i.rect,
                pointer: false,
            })
        };
        let i = info(1.0, 2.0, 3.0, 4.0, 0.0, 0.0);
        assert_eq!(always.matches(&i, &7_u32).map(|h| h.rect), Some(i.rect));
    }
}
