// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_menu_aim::controller::{MenuAim, NoopHandler};
use understory_menu_aim::decider::decide;
use understory_menu_aim::trace::{MouseTrace, TraceService};
use understory_menu_aim::types::{Direction, MenuAimOptions};

fn menu() -> Rect {
    Rect::from_origin_size((0.0, 0.0), (200.0, 400.0))
}

/// A wandering pointer path over and around the menu.
fn gen_path(n: usize) -> Vec<Point> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state % 300) as f64 - 50.0;
        let y = ((state >> 20) % 500) as f64 - 50.0;
        out.push(Point::new(x, y));
    }
    out
}

fn bench_decide(c: &mut Criterion) {
    let path = gen_path(1024);
    let mut group = c.benchmark_group("decide");
    for dir in [Direction::Right, Direction::Below] {
        group.bench_function(format!("{dir:?}"), |b| {
            b.iter(|| {
                let mut trace = MouseTrace::new();
                let mut last = None;
                let mut delays = 0_u32;
                for &p in &path {
                    trace.record(p);
                    let d = decide(true, menu(), 75.0, dir, &trace, &mut last);
                    if !d.is_activate_now() {
                        delays += 1;
                    }
                }
                black_box(delays)
            });
        });
    }
    group.finish();
}

fn bench_controller_sweep(c: &mut Criterion) {
    let path = gen_path(1024);
    c.bench_function("controller_sweep", |b| {
        b.iter(|| {
            let trace = TraceService::new();
            let mut aim: MenuAim<u32, Rect> =
                MenuAim::new(&trace, menu(), NoopHandler, MenuAimOptions::default()).unwrap();
            for (i, &p) in path.iter().enumerate() {
                let now = i as u64 * 16;
                aim.poll_timers(now);
                trace.record(p);
                aim.on_row_pointer_enter((p.y / 40.0).max(0.0) as u32, now);
            }
            black_box(aim.active_row().copied())
        });
    });
}

criterion_group!(benches, bench_decide, bench_controller_sweep);
criterion_main!(benches);
