// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Winner selection among intersecting drop zones.
//!
//! ## Rules
//!
//! - No candidates: no winner.
//! - One candidate: it wins, regardless of its area.
//! - Several candidates: a candidate that contains the pointer wins
//!   (if [`ArbiterPolicy::prefer_pointer`] is set). Otherwise the candidate
//!   with the largest overlap area wins.
//! - Equally ranked candidates are resolved by [`TieBreakPolicy`]; with the
//!   default, the first one in registration order wins.
//!
//! Selection is a single pass without allocation or sorting.
//!
//! ```
//! use understory_dnd::arbiter::select_winner;
//! use understory_dnd::geometry::rect;
//! use understory_dnd::types::{ArbiterPolicy, Intersection};
//!
//! let a = Intersection { rect: rect(690.0, 510.0, 10.0, 150.0), pointer: true };
//! let b = Intersection { rect: rect(750.0, 510.0, 140.0, 150.0), pointer: false };
//!
//! // The pointer rule beats the larger area.
//! assert_eq!(select_winner(&[a, b], &ArbiterPolicy::default()), Some(0));
//! ```

use core::cmp::Ordering;

use crate::types::{ArbiterPolicy, Intersection, TieBreakPolicy};

/// Pick the index of the winning candidate, if any.
///
/// `candidates` must be in registration order; that order defines the
/// tie-break. Any type that exposes its [`Intersection`] through [`AsRef`]
/// can be ranked, so callers may carry their own keys alongside.
pub fn select_winner<C: AsRef<Intersection>>(
    candidates: &[C],
    policy: &ArbiterPolicy,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, c) in candidates.iter().enumerate() {
        let Some(j) = best else {
            best = Some(i);
            continue;
        };
        let better = match rank(candidates[j].as_ref(), c.as_ref(), policy) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => policy.tie_break == TieBreakPolicy::Last,
        };
        if better {
            best = Some(i);
        }
    }
    best
}

/// Compare the current best `a` against challenger `b`; `Less` means `b` ranks higher.
fn rank(a: &Intersection, b: &Intersection, policy: &ArbiterPolicy) -> Ordering {
    if policy.prefer_pointer && a.pointer != b.pointer {
        return if a.pointer {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    // Pointer candidates are ranked against each other by order only.
    if policy.prefer_pointer && a.pointer {
        return Ordering::Equal;
    }
    a.area()
        .partial_cmp(&b.area())
        .unwrap_or(Ordering::Equal)
}
