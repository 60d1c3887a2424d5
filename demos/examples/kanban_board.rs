// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A three-column kanban board driven by `understory_dnd`.
//!
//! This example shows how to combine:
//! - `DragTracker` to turn pointer moves into drag geometry,
//! - `DragDrop` with one `RectMatcher` zone per column,
//! - namespaces to keep cards and column headers in separate drag domains,
//! - a `ZoneRect::Dynamic` trash zone that follows a scroll offset.
//!
//! Winner transitions are logged through `tracing`; set `RUST_LOG=trace` for
//! per-move detail.
//!
//! Run:
//! - `cargo run -p understory_dnd_demos --example kanban_board`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_dnd::geometry::rect;
use understory_dnd::matcher::{Namespaced, RectMatcher, ZoneRect};
use understory_dnd::tracker::DragTracker;
use understory_dnd::{CancelKind, DragDrop, DropZone, SessionError};

/// What is being dragged.
#[derive(Clone, Debug)]
enum Payload {
    Card { id: u32, title: &'static str },
    Column { name: &'static str },
}

impl Namespaced for Payload {
    fn namespace(&self) -> Option<&str> {
        match self {
            Self::Card { .. } => Some("card"),
            Self::Column { .. } => Some("column"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Column(usize),
    Trash,
}

const COLUMNS: [&str; 3] = ["todo", "doing", "done"];
const COLUMN_X: [f64; 3] = [0.0, 250.0, 500.0];
const COLUMN_W: f64 = 200.0;
const COLUMN_H: f64 = 600.0;

fn column_rect(i: usize) -> Rect {
    rect(COLUMN_X[i], 0.0, COLUMN_W, COLUMN_H)
}

type Board = Rc<RefCell<[Vec<u32>; 3]>>;

fn build(
    board: &Board,
    hovered: &Rc<Cell<Option<Target>>>,
    scroll: &Rc<Cell<f64>>,
) -> DragDrop<Target, Payload> {
    let mut dnd = DragDrop::new();

    for (i, &name) in COLUMNS.iter().enumerate() {
        let hover = hovered.clone();
        let leave = hovered.clone();
        let board = board.clone();
        dnd.register(
            Target::Column(i),
            DropZone::new(RectMatcher::new(column_rect(i)).with_namespace("card"))
                .on_intersect(move |_, hit, _| {
                    hover.set(Some(Target::Column(i)));
                    tracing::trace!(column = name, area = hit.area(), pointer = hit.pointer, "hover");
                })
                .on_cancel(move |kind| {
                    if leave.get() == Some(Target::Column(i)) {
                        leave.set(None);
                    }
                    if kind == CancelKind::Leave {
                        tracing::info!(column = name, "left");
                    }
                })
                .on_drop(move |payload: &Payload| {
                    if let Payload::Card { id, title } = payload {
                        let mut b = board.borrow_mut();
                        for list in b.iter_mut() {
                            list.retain(|c| c != id);
                        }
                        b[i].push(*id);
                        tracing::info!(card = id, title, column = name, "card moved");
                    }
                }),
        );
    }

    // The trash sits below the board and scrolls with it.
    let offset = scroll.clone();
    let trash_board = board.clone();
    dnd.register(
        Target::Trash,
        DropZone::new(
            RectMatcher::new(ZoneRect::dynamic(move || {
                rect(0.0, COLUMN_H + 40.0 - offset.get(), COLUMN_X[2] + COLUMN_W, 80.0)
            }))
            .with_namespaces(["card", "column"]),
        )
        .on_drop(move |payload: &Payload| match payload {
            Payload::Card { id, .. } => {
                for list in trash_board.borrow_mut().iter_mut() {
                    list.retain(|c| c != id);
                }
                tracing::info!(card = id, "card deleted");
            }
            Payload::Column { name } => tracing::info!(column = name, "column archived"),
        }),
    );

    dnd
}

/// Simulate a drag of `payload` from `origin` grabbed at `grab`, along `path`.
fn gesture(
    dnd: &mut DragDrop<Target, Payload>,
    payload: Payload,
    origin: Rect,
    grab: Point,
    path: &[Point],
    cancel: bool,
) -> Result<Option<Target>, SessionError> {
    let mut tracker = DragTracker::default();
    tracker.start(origin, grab);
    dnd.start(
        payload.clone(),
        Some(Box::new(move || {
            tracing::warn!(?payload, "drag cancelled; payload returns to its origin");
        })),
    )?;

    for &pos in path {
        if let Some(info) = tracker.update(pos) {
            let winner = dnd.drag(&info);
            println!("  pointer ({:>5.1}, {:>5.1}) -> {winner:?}", pos.x, pos.y);
        }
    }
    tracker.end();

    if cancel {
        dnd.cancel();
        Ok(None)
    } else {
        Ok(dnd.drop())
    }
}

fn print_board(board: &Board) {
    for (name, cards) in COLUMNS.iter().zip(board.borrow().iter()) {
        println!("  {name:<6} {cards:?}");
    }
}

fn main() -> Result<(), SessionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let board: Board = Rc::new(RefCell::new([vec![1, 2, 3], vec![4], vec![]]));
    let hovered = Rc::new(Cell::new(None));
    let scroll = Rc::new(Cell::new(0.0));
    let mut dnd = build(&board, &hovered, &scroll);

    println!("Initial board:");
    print_board(&board);

    // Card 1 sits at the top of "todo".
    let card = rect(10.0, 10.0, 180.0, 40.0);
    let grab = Point::new(20.0, 20.0);

    println!("\nDrag card 1 across the board into \"done\":");
    let path = [
        // Straddles todo and doing; the pointer is still over todo.
        Point::new(150.0, 30.0),
        // Pointer in the gap; doing has the larger overlap.
        Point::new(205.0, 30.0),
        Point::new(280.0, 30.0),
        Point::new(530.0, 30.0),
    ];
    let dropped = gesture(&mut dnd, Payload::Card { id: 1, title: "write docs" }, card, grab, &path, false)?;
    println!("  dropped on {dropped:?}, hovered now {:?}", hovered.get());
    print_board(&board);

    println!("\nDrag card 2 toward \"doing\", then press escape:");
    let path = [Point::new(200.0, 80.0), Point::new(300.0, 80.0)];
    let dropped = gesture(&mut dnd, Payload::Card { id: 2, title: "fix bug" }, card, grab, &path, true)?;
    println!("  dropped on {dropped:?}");
    print_board(&board);

    println!("\nDrag the \"doing\" header over \"done\"; column zones ignore it:");
    let header = rect(250.0, 0.0, 200.0, 30.0);
    let path = [Point::new(400.0, 10.0), Point::new(600.0, 10.0)];
    let dropped = gesture(
        &mut dnd,
        Payload::Column { name: "doing" },
        header,
        Point::new(260.0, 10.0),
        &path,
        false,
    )?;
    println!("  dropped on {dropped:?}");

    println!("\nScroll the board and throw card 3 in the trash:");
    scroll.set(100.0);
    // The last move leaves the pointer below "todo" and inside the trash.
    let path = [Point::new(20.0, 300.0), Point::new(20.0, 605.0)];
    let dropped = gesture(&mut dnd, Payload::Card { id: 3, title: "release" }, card, grab, &path, false)?;
    println!("  dropped on {dropped:?}");
    print_board(&board);

    Ok(())
}
