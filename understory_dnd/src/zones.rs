// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-zone registry and intersection arbitration.
//!
//! ## Overview
//!
//! [`DropZones`] owns the set of registered drop zones, each identified by a
//! caller-chosen key `K`, and the marker for the zone that won the most recent
//! evaluation. Zones keep the position of their first registration, so
//! iteration order (and with it the default tie-break) is deterministic.
//!
//! ## Evaluation
//!
//! [`DropZones::evaluate`] runs every matcher, selects a winner with
//! [`select_winner`], and then:
//!
//! 1. calls the winner's `on_intersect` callback with its intersection;
//! 2. if the winner changed, calls the previous winner's `on_cancel` with
//!    [`CancelKind::Leave`];
//! 3. remembers the new winner (or none) for the next evaluation.
//!
//! ## Ending a drag
//!
//! [`DropZones::drop`] delivers the payload to the current winner and then
//! resets every zone with [`DropZones::cancel_all`], which calls each zone's
//! `on_cancel` with [`CancelKind::Global`].
//!
//! Callbacks receive shared references only; they cannot reach back into the
//! registry while it is evaluating.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_dnd::geometry::rect;
//! use understory_dnd::matcher::RectMatcher;
//! use understory_dnd::types::DragInfo;
//! use understory_dnd::zones::{DropZone, DropZones};
//! use kurbo::Point;
//!
//! let dropped = Rc::new(RefCell::new(Vec::new()));
//! let sink = dropped.clone();
//!
//! let mut zones: DropZones<&str, u32> = DropZones::new();
//! zones.register(
//!     "done",
//!     DropZone::new(RectMatcher::new(rect(500.0, 500.0, 200.0, 200.0)))
//!         .on_drop(move |task: &u32| sink.borrow_mut().push(*task)),
//! );
//!
//! let info = DragInfo::new(rect(510.0, 510.0, 200.0, 150.0), Point::new(600.0, 600.0));
//! assert_eq!(zones.evaluate(&info, &7), Some("done"));
//! assert_eq!(zones.drop(&7), Some("done"));
//! assert_eq!(*dropped.borrow(), vec![7]);
//! assert_eq!(zones.winner(), None);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::arbiter::select_winner;
use crate::matcher::Matcher;
use crate::types::{ArbiterPolicy, CancelKind, DragInfo, Intersection};

type IntersectFn<D> = Box<dyn FnMut(&DragInfo, &Intersection, &D)>;
type CancelFn = Box<dyn FnMut(CancelKind)>;
type DropFn<D> = Box<dyn FnMut(&D)>;

/// A drop zone: a matcher plus its lifecycle callbacks.
///
/// All callbacks are optional; a zone without `on_drop` still takes part in
/// arbitration and hover feedback.
pub struct DropZone<D: ?Sized> {
    matcher: Box<dyn Matcher<D>>,
    on_intersect: Option<IntersectFn<D>>,
    on_cancel: Option<CancelFn>,
    on_drop: Option<DropFn<D>>,
}

impl<D: ?Sized> DropZone<D> {
    /// Create a zone around `matcher` with no callbacks.
    pub fn new(matcher: impl Matcher<D> + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
            on_intersect: None,
            on_cancel: None,
            on_drop: None,
        }
    }

    /// Called with the zone's intersection each time it wins an evaluation.
    pub fn on_intersect(mut self, f: impl FnMut(&DragInfo, &Intersection, &D) + 'static) -> Self {
        self.on_intersect = Some(Box::new(f));
        self
    }

    /// Called when the zone stops being the winner, or when the drag ends.
    pub fn on_cancel(mut self, f: impl FnMut(CancelKind) + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// Called with the payload when a drop lands on this zone.
    pub fn on_drop(mut self, f: impl FnMut(&D) + 'static) -> Self {
        self.on_drop = Some(Box::new(f));
        self
    }

    fn intersect(&mut self, info: &DragInfo, hit: &Intersection, data: &D) {
        if let Some(f) = self.on_intersect.as_mut() {
            f(info, hit, data);
        }
    }

    fn cancel(&mut self, kind: CancelKind) {
        if let Some(f) = self.on_cancel.as_mut() {
            f(kind);
        }
    }

    fn deliver(&mut self, data: &D) {
        if let Some(f) = self.on_drop.as_mut() {
            f(data);
        }
    }
}

impl<D: ?Sized> fmt::Debug for DropZone<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropZone")
            .field("on_intersect", &self.on_intersect.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy)]
struct Candidate<K> {
    index: usize,
    key: K,
    hit: Intersection,
}

impl<K> AsRef<Intersection> for Candidate<K> {
    fn as_ref(&self) -> &Intersection {
        &self.hit
    }
}

/// Registry of drop zones keyed by `K`, with the current arbitration winner.
///
/// ## Usage
///
/// - Drop targets [`register`](Self::register) when they appear and
///   [`unregister`](Self::unregister) when they go away.
/// - The drag source calls [`evaluate`](Self::evaluate) on every pointer move,
///   then [`drop`](Self::drop) on release or
///   [`cancel_all`](Self::cancel_all) on abort.
/// - Optionally configure arbitration with [`with_policy`](Self::with_policy).
///
/// For a registry that also owns the payload for the lifetime of a gesture,
/// see [`DragDrop`](crate::session::DragDrop).
pub struct DropZones<K, D: ?Sized> {
    entries: Vec<(K, DropZone<D>)>,
    winner: Option<K>,
    policy: ArbiterPolicy,
}

impl<K: Copy + Eq + fmt::Debug, D: ?Sized> fmt::Debug for DropZones<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropZones")
            .field("zones", &self.entries.len())
            .field("winner", &self.winner)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + fmt::Debug, D: ?Sized> Default for DropZones<K, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + fmt::Debug, D: ?Sized> DropZones<K, D> {
    /// Create an empty registry with the default [`ArbiterPolicy`].
    pub fn new() -> Self {
        Self::with_policy(ArbiterPolicy::default())
    }

    /// Create an empty registry with an explicit arbitration policy.
    pub fn with_policy(policy: ArbiterPolicy) -> Self {
        Self {
            entries: Vec::new(),
            winner: None,
            policy,
        }
    }

    /// The arbitration policy in effect.
    pub fn policy(&self) -> ArbiterPolicy {
        self.policy
    }

    /// Change the arbitration policy; applies from the next evaluation.
    pub fn set_policy(&mut self, policy: ArbiterPolicy) {
        self.policy = policy;
    }

    /// Register `zone` under `key`, replacing any zone already registered there.
    ///
    /// A replaced zone keeps its position in iteration order. Returns `true`
    /// if a previous registration was replaced.
    pub fn register(&mut self, key: K, zone: DropZone<D>) -> bool {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = zone;
            tracing::trace!(?key, "drop zone replaced");
            true
        } else {
            self.entries.push((key, zone));
            tracing::trace!(?key, "drop zone registered");
            false
        }
    }

    /// Remove the zone registered under `key`.
    ///
    /// Returns `false` if there was none. A removed winner is forgotten, so
    /// neither a later leave notification nor a drop can reach it.
    pub fn unregister(&mut self, key: K) -> bool {
        let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) else {
            return false;
        };
        self.entries.remove(pos);
        if self.winner == Some(key) {
            self.winner = None;
        }
        tracing::trace!(?key, "drop zone unregistered");
        true
    }

    /// Whether a zone is registered under `key`.
    pub fn contains(&self, key: K) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Number of registered zones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no zones are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// The zone that won the most recent evaluation, if any.
    pub fn winner(&self) -> Option<K> {
        self.winner
    }

    /// Evaluate the drag against every zone and notify the winner.
    ///
    /// Returns the winning key. See the [module docs](self) for the callback
    /// order.
    pub fn evaluate(&mut self, info: &DragInfo, data: &D) -> Option<K> {
        let candidates: SmallVec<[Candidate<K>; 4]> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, (key, zone))| {
                zone.matcher.matches(info, data).map(|hit| Candidate {
                    index,
                    key: *key,
                    hit,
                })
            })
            .collect();

        let winner = select_winner(&candidates[..], &self.policy).map(|i| candidates[i]);
        if let Some(c) = winner {
            self.entries[c.index].1.intersect(info, &c.hit, data);
        }

        let next = winner.map(|c| c.key);
        if let Some(prev) = self.winner
            && next != Some(prev)
        {
            tracing::debug!(?prev, ?next, "drop zone winner changed");
            if let Some(zone) = self.zone_mut(prev) {
                zone.cancel(CancelKind::Leave);
            }
        } else if self.winner.is_none() && next.is_some() {
            tracing::debug!(?next, "drop zone winner entered");
        }
        self.winner = next;
        next
    }

    /// Notify every zone that the drag ended, then forget the winner.
    ///
    /// Every registered zone is notified on every call, winner or not.
    pub fn cancel_all(&mut self) {
        tracing::debug!(zones = self.entries.len(), "drag cancelled");
        for (_, zone) in &mut self.entries {
            zone.cancel(CancelKind::Global);
        }
        self.winner = None;
    }

    /// Deliver `data` to the current winner, then [`cancel_all`](Self::cancel_all).
    ///
    /// Returns the key of the zone that received the drop, or `None` if there
    /// was no winner.
    pub fn drop(&mut self, data: &D) -> Option<K> {
        let target = self.winner;
        let delivered = target.and_then(|key| {
            let zone = self.zone_mut(key)?;
            zone.deliver(data);
            Some(key)
        });
        tracing::debug!(zone = ?delivered, "drop");
        self.cancel_all();
        delivered
    }

    fn zone_mut(&mut self, key: K) -> Option<&mut DropZone<D>> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, z)| z)
    }
}
