// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cartograph_controller::{InputEvent, MapController, RecordingSurface};
use cartograph_view::ViewConfig;
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};

fn controller() -> MapController<RecordingSurface> {
    let mut c = MapController::new(
        RecordingSurface::new(Size::new(1280.0, 720.0)),
        ViewConfig::default(),
    );
    c.set_image(4096, 8192).expect("tall image is accepted");
    c
}

/// A drag gesture: press, `len` moves zig-zagging across the map, release.
fn drag_stream(len: usize) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(len + 2);
    events.push(InputEvent::PointerDown {
        position: Point::new(640.0, 360.0),
    });
    for i in 0..len {
        let sign = if (i / 64) % 2 == 0 { -1.0 } else { 1.0 };
        events.push(InputEvent::PointerMove {
            movement: Vec2::new(sign * 3.0, sign * 5.0),
        });
    }
    events.push(InputEvent::PointerUp);
    events
}

/// A touch gesture mixed with wheel notches.
fn touch_and_wheel_stream(len: usize) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(len + 2);
    events.push(InputEvent::TouchStart {
        position: Point::new(100.0, 100.0),
    });
    for i in 0..len {
        if i % 10 == 0 {
            let delta_y = if (i / 100) % 2 == 0 { 100.0 } else { -100.0 };
            events.push(InputEvent::Wheel { delta_y });
        } else {
            let t = i as f64;
            events.push(InputEvent::TouchMove {
                position: Point::new(100.0 + (t * 0.1).sin() * 80.0, 100.0 + t % 300.0),
            });
        }
    }
    events.push(InputEvent::TouchEnd);
    events
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/dispatch");

    for len in [256usize, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        let drag = drag_stream(len);
        group.bench_with_input(BenchmarkId::new("drag", len), &drag, |b, events| {
            b.iter_batched(
                controller,
                |mut c| {
                    for event in events {
                        black_box(c.handle(event));
                    }
                    black_box(c.viewport().pan());
                },
                BatchSize::SmallInput,
            );
        });

        let touch = touch_and_wheel_stream(len);
        group.bench_with_input(
            BenchmarkId::new("touch_and_wheel", len),
            &touch,
            |b, events| {
                b.iter_batched(
                    controller,
                    |mut c| {
                        for event in events {
                            black_box(c.handle(event));
                        }
                        black_box(c.viewport().zoom());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    c.bench_function("controller/render_after_move", |b| {
        b.iter_batched(
            || {
                let mut c = controller();
                c.handle(&InputEvent::PointerDown {
                    position: Point::ZERO,
                });
                c
            },
            |mut c| {
                let response = c.handle(&InputEvent::PointerMove {
                    movement: Vec2::new(-7.0, -11.0),
                });
                if response.needs_redraw() {
                    c.render();
                }
                black_box(c.surface_mut().take_ops());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_dispatch, bench_render);
criterion_main!(benches);
