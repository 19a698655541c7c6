// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe through a short deck and print every callback.
//!
//! Run:
//! - `cargo run -p understory_demos --example card_stack_basics`

use core::time::Duration;

use kurbo::Vec2;
use understory_card_stack::config::StackConfig;
use understory_card_stack::handler::{PanGesture, ReleaseSource, StackHandler};
use understory_card_stack::stack::CardStack;
use understory_motion::animation::TickStatus;

const FRAME: Duration = Duration::from_micros(16_667);

struct Printer;

impl StackHandler for Printer {
    fn on_swiped(&mut self, active: usize) {
        println!("  on_swiped({active})");
    }
    fn on_swiped_left(&mut self, previous: usize) {
        println!("  on_swiped_left({previous})");
    }
    fn on_swiped_right(&mut self, previous: usize) {
        println!("  on_swiped_right({previous})");
    }
    fn on_swiped_top(&mut self, previous: usize) {
        println!("  on_swiped_top({previous})");
    }
    fn on_swiped_bottom(&mut self, previous: usize) {
        println!("  on_swiped_bottom({previous})");
    }
    fn on_stack_ended(&mut self) {
        println!("  on_stack_ended()");
    }
    fn on_release(&mut self, source: ReleaseSource<'_, ()>) {
        if let ReleaseSource::Gesture { gesture, .. } = source {
            println!("  released at {:?}", gesture.delta);
        }
    }
}

fn swipe(stack: &mut CardStack<Printer>, to: Vec2) {
    stack.handle_grant(&(), &PanGesture::default());
    // A few intermediate pointer samples, as a real gesture would deliver.
    for step in 1..=4 {
        stack.handle_move(&PanGesture::from_delta(to * (f64::from(step) / 4.0)));
    }
    stack.handle_release(&(), &PanGesture::from_delta(to));

    let mut frames = 0;
    while stack.tick(FRAME) == TickStatus::Running {
        frames += 1;
    }
    println!("  settled after {frames} frames, active = {}", stack.active_index());
}

fn main() {
    let deck = ["alpha", "bravo", "charlie"];
    let mut stack = CardStack::new(StackConfig::default(), deck.len(), Printer).unwrap();

    for (label, to) in [
        ("short drag", Vec2::new(40.0, 10.0)),
        ("swipe right", Vec2::new(140.0, 0.0)),
        ("swipe up", Vec2::new(0.0, -120.0)),
        ("swipe left", Vec2::new(-90.0, 30.0)),
    ] {
        println!("{label}:");
        swipe(&mut stack, to);
    }

    println!("stack ended: {}, hidden: {}", stack.is_stack_ended(), stack.is_hidden());
    stack.set_item_count(deck.len());
    let front = stack.render(&deck, |item, _, _| *item);
    println!("after reload the front card is {:?}", front[0].content);
}
