// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use understory_card_stack::config::{LayerConfig, StackConfig};
use understory_card_stack::handler::PanGesture;
use understory_card_stack::stack::CardStack;
use understory_card_stack::transform::{Pulses, layer_transform};
use understory_motion::animation::TickStatus;

const FRAME: Duration = Duration::from_micros(16_667);

fn config(layer_count: usize) -> StackConfig {
    StackConfig {
        infinite: true,
        layers: LayerConfig {
            layer_count,
            ..LayerConfig::default()
        },
        ..StackConfig::default()
    }
}

fn dragged(layer_count: usize) -> CardStack<()> {
    let mut stack = CardStack::new(config(layer_count), 64, ()).unwrap();
    stack.handle_grant(&(), &PanGesture::default());
    stack.handle_move(&PanGesture::from_delta(Vec2::new(42.0, -17.0)));
    stack
}

fn bench_layer_transform(c: &mut Criterion) {
    let layers = LayerConfig::default();
    let pulses = Pulses {
        scale: 0.4,
        opacity: 0.4,
    };
    c.bench_function("layer_transform/depth_0..3", |b| {
        b.iter(|| {
            for depth in 0..3 {
                black_box(layer_transform(
                    &layers,
                    depth,
                    black_box(Vec2::new(42.0, -17.0)),
                    pulses,
                ));
            }
        });
    });
}

fn bench_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("layers");
    for layer_count in [3_usize, 8, 32] {
        let stack = dragged(layer_count);
        group.bench_function(format!("visible_{layer_count}"), |b| {
            b.iter(|| black_box(stack.layers()));
        });
    }
    group.finish();
}

fn bench_swipe_to_rest(c: &mut Criterion) {
    c.bench_function("swipe_commit/tick_to_rest", |b| {
        b.iter_batched(
            || {
                let mut stack = dragged(3);
                stack.handle_move(&PanGesture::from_delta(Vec2::new(120.0, 0.0)));
                stack.handle_release(&(), &PanGesture::from_delta(Vec2::new(120.0, 0.0)));
                stack
            },
            |mut stack| {
                while stack.tick(FRAME) == TickStatus::Running {
                    black_box(stack.layers());
                }
                stack
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_layer_transform, bench_layers, bench_swipe_to_rest);
criterion_main!(benches);
