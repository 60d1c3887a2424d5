// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for geometry and arbitration.
//!
//! 1. Overlap is symmetric and contained in both rectangles
//! 2. Rectangles that only touch never overlap
//! 3. A single intersecting zone always wins
//! 4. A zone containing the pointer beats any zone that does not
//! 5. Without the pointer, the winner has the largest overlap area
//! 6. `cancel_all` reaches every zone exactly once per call

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use proptest::prelude::*;
use understory_dnd::geometry::{overlap, overlaps, pointer_in, rect};
use understory_dnd::matcher::RectMatcher;
use understory_dnd::{CancelKind, DragInfo, DropZone, DropZones};

// ── Strategies ──────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0_i32..1000, 0_i32..1000, 1_i32..300, 1_i32..300)
        .prop_map(|(x, y, w, h)| rect(f64::from(x), f64::from(y), f64::from(w), f64::from(h)))
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (0_i32..1300, 0_i32..1300).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

fn zones_strategy() -> impl Strategy<Value = Vec<Rect>> {
    prop::collection::vec(rect_strategy(), 1..8)
}

fn registry(rects: &[Rect]) -> (DropZones<usize, ()>, Rc<RefCell<Vec<(usize, CancelKind)>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut zones = DropZones::new();
    for (i, r) in rects.iter().enumerate() {
        let l = log.clone();
        zones.register(
            i,
            DropZone::new(RectMatcher::new(*r))
                .on_cancel(move |kind| l.borrow_mut().push((i, kind))),
        );
    }
    (zones, log)
}

fn area(r: &Rect) -> f64 {
    r.width() * r.height()
}

proptest! {
    #[test]
    fn overlap_is_symmetric_and_contained(a in rect_strategy(), b in rect_strategy()) {
        let ab = overlap(&a, &b);
        let ba = overlap(&b, &a);
        prop_assert_eq!(ab, ba);
        if let Some(o) = ab {
            prop_assert!(o.x0 >= a.x0 && o.x1 <= a.x1 && o.y0 >= a.y0 && o.y1 <= a.y1);
            prop_assert!(o.x0 >= b.x0 && o.x1 <= b.x1 && o.y0 >= b.y0 && o.y1 <= b.y1);
            prop_assert!(area(&o) > 0.0);
        }
    }

    #[test]
    fn touching_rects_never_overlap(a in rect_strategy(), w in 1_i32..300, h in 1_i32..300) {
        let right = rect(a.x1, a.y0, f64::from(w), f64::from(h));
        let below = rect(a.x0, a.y1, f64::from(w), f64::from(h));
        prop_assert!(!overlaps(&a, &right));
        prop_assert!(!overlaps(&a, &below));
    }

    #[test]
    fn single_intersecting_zone_wins(zone in rect_strategy(), drag in rect_strategy(), p in point_strategy()) {
        let (mut zones, _log) = registry(&[zone]);
        let expected = overlaps(&drag, &zone).then_some(0);
        prop_assert_eq!(zones.evaluate(&DragInfo::new(drag, p), &()), expected);
    }

    #[test]
    fn winner_respects_pointer_then_area(
        rects in zones_strategy(),
        drag in rect_strategy(),
        p in point_strategy(),
    ) {
        let (mut zones, _log) = registry(&rects);
        let winner = zones.evaluate(&DragInfo::new(drag, p), &());

        let hits: Vec<(usize, Rect, bool)> = rects
            .iter()
            .enumerate()
            .filter_map(|(i, z)| overlap(&drag, z).map(|o| (i, o, pointer_in(z, p))))
            .collect();

        match winner {
            None => prop_assert!(hits.is_empty()),
            Some(w) => {
                let (_, w_rect, w_pointer) = hits.iter().copied().find(|h| h.0 == w).unwrap();
                if hits.len() > 1 {
                    if hits.iter().any(|h| h.2) {
                        prop_assert!(w_pointer);
                        // First pointer candidate in registration order.
                        prop_assert_eq!(hits.iter().find(|h| h.2).map(|h| h.0), Some(w));
                    } else {
                        let best = hits.iter().map(|h| area(&h.1)).fold(f64::MIN, f64::max);
                        prop_assert_eq!(area(&w_rect), best);
                        // First candidate with the best area.
                        prop_assert_eq!(hits.iter().find(|h| area(&h.1) == best).map(|h| h.0), Some(w));
                    }
                }
            }
        }
    }

    #[test]
    fn cancel_all_reaches_every_zone(rects in zones_strategy(), calls in 1_usize..4) {
        let (mut zones, log) = registry(&rects);
        for _ in 0..calls {
            zones.cancel_all();
        }
        let log = log.borrow();
        prop_assert_eq!(log.len(), rects.len() * calls);
        for i in 0..rects.len() {
            prop_assert_eq!(log.iter().filter(|(k, _)| *k == i).count(), calls);
        }
        prop_assert!(log.iter().all(|(_, kind)| kind.is_global()));
    }
}
