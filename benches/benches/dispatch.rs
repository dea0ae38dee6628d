// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};
use padkit::anchors::{composite_anchors, nearest, primary_anchors};
use padkit::controls::{ControlAnalog, ControlButton, ControlCross, ControlFaceButtons};
use padkit::handlers::Pointer;
use padkit::scope::DispatchScope;
use padkit_state::events::events_from_states;
use padkit_state::ids::{ContinuousDirectionId, DiscreteDirectionId, KeyId};
use padkit_state::state::InputState;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A typical landscape layout on a 1000×500 surface.
fn landscape_pad() -> DispatchScope {
    let mut scope = DispatchScope::default();
    ControlCross::new(DiscreteDirectionId(0))
        .rect(Rect::new(20.0, 250.0, 220.0, 450.0))
        .register(&mut scope);
    ControlAnalog::new(ContinuousDirectionId(0))
        .press_id(KeyId(20))
        .rect(Rect::new(240.0, 330.0, 360.0, 450.0))
        .register(&mut scope);
    ControlFaceButtons::new(&[KeyId(0), KeyId(1), KeyId(2), KeyId(3)], 0.0)
        .rect(Rect::new(780.0, 250.0, 980.0, 450.0))
        .register(&mut scope);
    for (i, x) in [400.0, 460.0, 520.0, 580.0].into_iter().enumerate() {
        ControlButton::new(KeyId(10 + i as i32))
            .rect(Rect::new(x, 440.0, x + 50.0, 490.0))
            .register(&mut scope);
    }
    scope
}

fn random_frames(count: usize, fingers: u64, seed: u64) -> Vec<Vec<Pointer>> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            (0..fingers)
                .map(|id| Pointer::new(id, rng.next_f64() * 1000.0, rng.next_f64() * 500.0))
                .collect()
        })
        .collect()
}

fn bench_scope(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope");
    for fingers in [1, 2, 5, 10] {
        let frames = random_frames(256, fingers, 0x5eed + fingers);
        group.throughput(Throughput::Elements(frames.len() as u64));
        group.bench_function(format!("handle_random_fingers{}", fingers), |b| {
            b.iter_batched(
                landscape_pad,
                |mut scope| {
                    for (i, frame) in frames.iter().enumerate() {
                        let now = Duration::from_millis(16 * i as u64);
                        black_box(scope.handle(black_box(frame), now));
                    }
                    scope
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.bench_function("handle_held_drag", |b| {
        let mut scope = landscape_pad();
        let mut x = 300.0;
        b.iter(|| {
            x = if x > 340.0 { 260.0 } else { x + 1.0 };
            black_box(scope.handle(&[Pointer::new(7, x, 390.0)], Duration::ZERO));
        });
    });
    group.finish();
}

fn bench_anchors(c: &mut Criterion) {
    let mut group = c.benchmark_group("anchors");
    for count in [4_i32, 6, 8] {
        let ids: Vec<KeyId> = (0..count).map(KeyId).collect();
        let mut anchors = composite_anchors(&ids, 0.0);
        anchors.extend(primary_anchors(&ids, 0.0));
        let mut rng = Rng::new(42);
        let points: Vec<Vec2> = (0..1024)
            .map(|_| Vec2::new(rng.next_f64() * 2.0 - 1.0, rng.next_f64() * 2.0 - 1.0))
            .collect();
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("nearest_ring{}", count), |b| {
            b.iter(|| {
                for p in &points {
                    black_box(nearest(&anchors, *p));
                }
            });
        });
    }
    group.finish();
}

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("events");
    let states: Vec<InputState> = (0..512)
        .map(|i| {
            InputState::new()
                .with_digital_key(KeyId(i % 8), i % 3 == 0)
                .with_discrete_direction(
                    DiscreteDirectionId(0),
                    (i % 5 != 0).then(|| Vec2::new(f64::from(i % 2), 0.0)),
                )
        })
        .collect();
    group.throughput(Throughput::Elements(states.len() as u64));
    group.bench_function("events_from_states", |b| {
        b.iter_batched(
            || states.clone(),
            |states| events_from_states(states).count(),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_scope, bench_anchors, bench_events);
criterion_main!(benches);
