// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested menus sharing one pointer trace, with a delayed menu exit.
//!
//! The root menu and its submenu each hold a lease on the same trace. Leaving
//! the root menu starts a 200ms exit delay; coming back in time cancels it.
//! Detaching both menus stops pointer tracking.
//!
//! Run:
//! - `cargo run -p understory_demos --example menu_aim_nested`

use kurbo::{Point, Rect};
use understory_menu_aim::controller::{MenuAim, MenuEvent, MenuHandler};
use understory_menu_aim::trace::TraceService;
use understory_menu_aim::types::MenuAimOptions;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Item {
    File,
    Edit,
    Recent(u8),
}

#[derive(Default)]
struct Log {
    lines: Vec<String>,
}

impl MenuHandler<Item> for Log {
    fn activate(&mut self, row: &Item) -> Option<Item> {
        self.lines.push(format!("activate {row:?}"));
        None
    }
    fn deactivate(&mut self, row: &Item) {
        self.lines.push(format!("deactivate {row:?}"));
    }
    fn exit_menu(&mut self) -> bool {
        self.lines.push("exit menu".into());
        true
    }
}

fn main() {
    let trace = TraceService::new();

    let root_rect = Rect::new(0.0, 0.0, 100.0, 40.0);
    let sub_rect = Rect::new(100.0, 0.0, 220.0, 60.0);

    let mut root: MenuAim<Item, Rect, Log> = MenuAim::new(
        &trace,
        root_rect,
        Log::default(),
        MenuAimOptions::default().with_exit_delay(Some(200)),
    )
    .unwrap();
    let mut sub: MenuAim<Item, Rect, Log> = MenuAim::new(
        &trace,
        sub_rect,
        Log::default(),
        MenuAimOptions::default().with_root(false),
    )
    .unwrap();
    println!("leases after attach: {}", trace.leases());

    trace.record(Point::new(20.0, 10.0));
    root.handle(MenuEvent::RowEnter(Item::File), 0);

    trace.record(Point::new(150.0, 10.0));
    sub.handle(MenuEvent::RowEnter(Item::Recent(1)), 20);

    // Out of the whole menu, then back in before the exit delay elapses.
    trace.record(Point::new(300.0, 10.0));
    root.handle(MenuEvent::MenuLeave, 40);
    sub.handle(MenuEvent::MenuLeave, 40);
    println!("exit pending: {}", root.is_exit_pending());
    root.poll_timers(100);
    trace.record(Point::new(20.0, 30.0));
    root.handle(MenuEvent::RowEnter(Item::Edit), 120);
    root.poll_timers(500);
    println!("exit pending after return: {}", root.is_exit_pending());

    // Leave for good this time.
    root.handle(MenuEvent::MenuLeave, 600);
    root.poll_timers(800);

    println!("== Root ==");
    for line in &root.handler().lines {
        println!("  {line}");
    }
    println!("== Submenu ==");
    for line in &sub.handler().lines {
        println!("  {line}");
    }

    assert_eq!(
        root.handler().lines,
        [
            "activate File",
            "deactivate File",
            "activate Edit",
            "exit menu",
            "deactivate Edit",
        ]
    );
    assert_eq!(sub.handler().lines, ["activate Recent(1)"]);
    assert_eq!(root.active_row(), None);
    assert_eq!(sub.active_row(), Some(&Item::Recent(1)));

    sub.detach();
    assert!(trace.is_tracking());
    root.detach();
    root.detach();
    assert!(!trace.is_tracking());
    println!("leases after detach: {}", trace.leases());
}
