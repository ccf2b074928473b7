// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for segmented control selection.
//!
//! Measures the performance of:
//! - Tapping across a wide control (hit-test, state update, dividers)
//! - Programmatic selection in multiple mode
//! - Insert and remove churn

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_segments::ui::segmented::{Message, SegmentItem, SegmentedControl, SelectionMode};
use std::collections::BTreeSet;
use std::hint::black_box;

fn control(count: usize, mode: SelectionMode) -> SegmentedControl {
    SegmentedControl::new(
        (0..count).map(|index| SegmentItem::Title(format!("Segment {index}"))),
        mode,
    )
}

/// Benchmark a full press/release cycle on every segment.
fn bench_tap(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for count in [4, 32] {
        group.bench_with_input(BenchmarkId::new("tap_each", count), &count, |b, &count| {
            let mut control = control(count, SelectionMode::Single);
            let centers: Vec<_> = control.frames().iter().map(|frame| frame.center()).collect();
            b.iter(|| {
                for &center in &centers {
                    control.handle(Message::CursorMoved(center));
                    black_box(control.handle(Message::Pressed));
                    control.handle(Message::Released);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark replacing the selection in multiple mode.
fn bench_set_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let mut control = control(32, SelectionMode::Multiple);
    let evens: BTreeSet<usize> = (0..32).step_by(2).collect();
    let odds: BTreeSet<usize> = (1..32).step_by(2).collect();

    group.bench_function("set_selected_segment_indexes", |b| {
        b.iter(|| {
            control.set_selected_segment_indexes(black_box(&evens));
            control.set_selected_segment_indexes(black_box(&odds));
        });
    });

    group.finish();
}

/// Benchmark insert/remove churn with a selected segment.
fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let mut control = control(8, SelectionMode::Single);
    control.set_selected_segment_indexes(&BTreeSet::from([3]));

    group.bench_function("insert_remove_middle", |b| {
        b.iter(|| {
            control.insert_segment("New", 4, false);
            control.remove_segment(4, false);
            black_box(control.number_of_segments());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tap, bench_set_selection, bench_insert_remove);
criterion_main!(benches);
