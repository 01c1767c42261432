// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the preview hot paths.
//!
//! Measures the per-frame cost of:
//! - Handling pan updates through the arbiter and pan handler
//! - Advancing running animations
//! - Projecting the transform onto a render frame

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Vector;
use iced_glance::ui::preview::{
    ImageList, PanEvent, PinchEvent, PreviewController, PreviewSettings,
};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn controller() -> PreviewController {
    let locators: Vec<String> = (0..50).map(|i| format!("image-{i}.png")).collect();
    let images = ImageList::new(locators).expect("non-empty");
    PreviewController::open(images, 25, PreviewSettings::default())
}

/// Benchmark a full drag of 60 frames followed by its release.
fn bench_pan_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    let now = Instant::now();

    group.bench_function("pan_60_frames", |b| {
        b.iter(|| {
            let mut controller = controller();
            controller.handle(PanEvent::Began.into(), now);
            for step in 0..60u8 {
                let translation = Vector::new(f32::from(step) * 1.5, f32::from(step));
                controller.handle(PanEvent::Updated { translation }.into(), now);
            }
            let effects = controller.handle(
                PanEvent::Ended {
                    translation: Vector::new(90.0, 60.0),
                }
                .into(),
                now,
            );
            black_box(effects);
        });
    });

    group.bench_function("pinch_60_frames", |b| {
        b.iter(|| {
            let mut controller = controller();
            controller.handle(PinchEvent::Began.into(), now);
            for step in 0..60u8 {
                let ratio = 1.0 + f32::from(step) / 30.0;
                controller.handle(PinchEvent::Updated { ratio }.into(), now);
            }
            black_box(controller.handle(PinchEvent::Ended.into(), now));
        });
    });

    group.finish();
}

/// Benchmark animation ticks and frame projection at 60 Hz.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let start = Instant::now();

    group.bench_function("tick_and_project", |b| {
        b.iter(|| {
            let mut controller = controller();
            let translation = Vector::new(80.0, 150.0);
            controller.handle(PanEvent::Began.into(), start);
            controller.handle(PanEvent::Updated { translation }.into(), start);
            controller.handle(PanEvent::Ended { translation }.into(), start);

            let mut now = start;
            for _ in 0..20 {
                now += Duration::from_millis(16);
                controller.tick(now);
                black_box(controller.frame(800.0));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pan_gesture, bench_frame);
criterion_main!(benches);
