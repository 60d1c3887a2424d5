// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session-based drag-and-drop front-end.
//!
//! [`DragDrop`] wraps a [`DropZones`] registry and owns the payload of the
//! drag in progress, so the drag source only has to report geometry:
//!
//! 1) [`start`](DragDrop::start) with the payload (and an optional cancel hook)
//!    on pointer down. A second start while a drag is active is refused.
//! 2) [`drag`](DragDrop::drag) on every pointer move.
//! 3) [`drop`](DragDrop::drop) on pointer up, or [`cancel`](DragDrop::cancel) on
//!    abort (escape key, lost capture).
//!
//! ```
//! use understory_dnd::geometry::rect;
//! use understory_dnd::matcher::RectMatcher;
//! use understory_dnd::session::DragDrop;
//! use understory_dnd::types::DragInfo;
//! use understory_dnd::zones::DropZone;
//! use kurbo::Point;
//!
//! let mut dnd: DragDrop<u32, &str> = DragDrop::new();
//! dnd.register(1, DropZone::new(RectMatcher::new(rect(0.0, 0.0, 100.0, 100.0))));
//!
//! dnd.start("task-17", None).unwrap();
//! assert!(dnd.start("task-18", None).is_err());
//!
//! let info = DragInfo::new(rect(10.0, 10.0, 20.0, 20.0), Point::new(15.0, 15.0));
//! assert_eq!(dnd.drag(&info), Some(1));
//! assert_eq!(dnd.drop(), Some(1));
//! assert!(!dnd.is_dragging());
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::error::SessionError;
use crate::types::{ArbiterPolicy, DragInfo};
use crate::zones::{DropZone, DropZones};

type CancelHook = Box<dyn FnOnce()>;

struct Session<D> {
    data: D,
    on_cancel: Option<CancelHook>,
}

/// A drop-zone registry plus the drag session currently driving it.
pub struct DragDrop<K, D> {
    zones: DropZones<K, D>,
    session: Option<Session<D>>,
}

impl<K: Copy + Eq + fmt::Debug, D: fmt::Debug> fmt::Debug for DragDrop<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragDrop")
            .field("zones", &self.zones)
            .field("data", &self.session.as_ref().map(|s| &s.data))
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + fmt::Debug, D> Default for DragDrop<K, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + fmt::Debug, D> DragDrop<K, D> {
    /// Create an idle front-end with an empty registry.
    pub fn new() -> Self {
        Self::with_zones(DropZones::new())
    }

    /// Create an idle front-end with an empty registry using `policy`.
    pub fn with_policy(policy: ArbiterPolicy) -> Self {
        Self::with_zones(DropZones::with_policy(policy))
    }

    /// Wrap an existing registry.
    pub fn with_zones(zones: DropZones<K, D>) -> Self {
        Self {
            zones,
            session: None,
        }
    }

    /// The underlying registry.
    pub fn zones(&self) -> &DropZones<K, D> {
        &self.zones
    }

    /// The underlying registry, mutably.
    pub fn zones_mut(&mut self) -> &mut DropZones<K, D> {
        &mut self.zones
    }

    /// Register a drop zone. See [`DropZones::register`].
    pub fn register(&mut self, key: K, zone: DropZone<D>) -> bool {
        self.zones.register(key, zone)
    }

    /// Unregister a drop zone. See [`DropZones::unregister`].
    pub fn unregister(&mut self, key: K) -> bool {
        self.zones.unregister(key)
    }

    /// Begin a drag carrying `data`.
    ///
    /// `on_cancel` runs once if the drag is later cancelled (not when it is
    /// dropped). Fails with [`SessionError::AlreadyActive`] while another drag
    /// is in progress; the running drag is left untouched.
    pub fn start(
        &mut self,
        data: D,
        on_cancel: Option<Box<dyn FnOnce()>>,
    ) -> Result<(), SessionError> {
        if self.session.is_some() {
            tracing::debug!("drag start refused: session already active");
            return Err(SessionError::AlreadyActive);
        }
        tracing::debug!("drag started");
        self.session = Some(Session { data, on_cancel });
        Ok(())
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The payload of the drag in progress.
    pub fn data(&self) -> Option<&D> {
        self.session.as_ref().map(|s| &s.data)
    }

    /// The zone currently winning arbitration.
    pub fn winner(&self) -> Option<K> {
        self.zones.winner()
    }

    /// Re-evaluate drop zones against new drag geometry.
    ///
    /// Without an active drag this does nothing and returns `None`.
    pub fn drag(&mut self, info: &DragInfo) -> Option<K> {
        let Some(session) = self.session.as_ref() else {
            tracing::trace!("drag update ignored: no active session");
            return None;
        };
        self.zones.evaluate(info, &session.data)
    }

    /// Abort the drag: notify every zone, run the session's cancel hook, and
    /// end the session.
    ///
    /// Safe to call without an active drag; zones are still notified.
    pub fn cancel(&mut self) {
        self.zones.cancel_all();
        if let Some(session) = self.session.take()
            && let Some(hook) = session.on_cancel
        {
            hook();
        }
    }

    /// Drop the payload on the current winner and end the session.
    ///
    /// Returns the zone that received the drop. Every zone is reset as with
    /// [`cancel`](Self::cancel), but the session's cancel hook does not run.
    /// Without an active drag, zones are reset and `None` is returned.
    pub fn drop(&mut self) -> Option<K> {
        match self.session.take() {
            Some(session) => self.zones.drop(&session.data),
            None => {
                self.zones.cancel_all();
                None
            }
        }
    }
}
