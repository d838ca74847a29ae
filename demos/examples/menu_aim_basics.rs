// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu aim basics.
//!
//! A four-row menu with submenus opening to the right. The pointer leaves row 0
//! diagonally toward its submenu, crossing rows 1 and 2 on the way; neither
//! activates. Then it heads back down the menu and row 3 activates at once.
//!
//! Run:
//! - `cargo run -p understory_demos --example menu_aim_basics`
//! - `RUST_LOG=debug cargo run -p understory_demos --example menu_aim_basics` for transition logs

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_menu_aim::controller::{MenuAim, MenuHandler};
use understory_menu_aim::trace::TraceService;
use understory_menu_aim::types::MenuAimOptions;

const ROW_HEIGHT: f64 = 20.0;
const MENU_WIDTH: f64 = 120.0;

#[derive(Default)]
struct Printer {
    activated: Vec<u32>,
}

impl MenuHandler<u32> for Printer {
    fn enter(&mut self, row: &u32) {
        println!("  enter row {row}");
    }
    fn activate(&mut self, row: &u32) -> Option<u32> {
        println!("  ACTIVATE row {row}");
        self.activated.push(*row);
        None
    }
    fn deactivate(&mut self, row: &u32) {
        println!("  deactivate row {row}");
    }
}

/// Row under `p`, or the active row while the pointer is over its submenu.
fn hovered_row(aim: &MenuAim<u32, Rect, Printer>, p: Point) -> Option<u32> {
    if p.x > MENU_WIDTH {
        return aim.active_row().copied();
    }
    let row = (p.y / ROW_HEIGHT).floor();
    (0.0..4.0).contains(&row).then_some(row as u32)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let trace = TraceService::new();
    let menu = Rect::new(0.0, 0.0, MENU_WIDTH, 4.0 * ROW_HEIGHT);
    let mut aim: MenuAim<u32, Rect, Printer> =
        MenuAim::new(&trace, menu, Printer::default(), MenuAimOptions::default()).unwrap();

    // (timestamp ms, document-space pointer position)
    let path = [
        (0, Point::new(10.0, 10.0)),
        (16, Point::new(60.0, 14.0)),
        (32, Point::new(100.0, 30.0)),
        (48, Point::new(118.0, 46.0)),
        (64, Point::new(130.0, 50.0)),
        (400, Point::new(60.0, 70.0)),
    ];

    let mut current: Option<u32> = None;
    for (now, p) in path {
        println!("t={now:>3}ms pointer at ({}, {})", p.x, p.y);
        aim.poll_timers(now);
        trace.record(p);
        let next = hovered_row(&aim, p);
        if next != current {
            if let Some(row) = current {
                aim.on_row_pointer_leave(&row);
            }
            if let Some(row) = next {
                aim.on_row_pointer_enter(row, now);
            }
            current = next;
        }
        if let Some(row) = aim.pending_row() {
            println!("  holding row {row} until {:?}", aim.next_deadline());
        }
    }

    println!("== Activated ==\n  {:?}", aim.handler().activated);
    assert_eq!(aim.handler().activated, vec![0, 3]);
    assert_eq!(aim.active_row(), Some(&3));

    aim.detach();
}
