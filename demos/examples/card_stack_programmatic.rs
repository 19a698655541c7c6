// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive an infinite stack with buttons instead of gestures.
//!
//! `move_next` plays a timed exit, `go_back` returns the previous card, and
//! the horizontal drag listener stands in for a "like" indicator.
//!
//! Run:
//! - `cargo run -p understory_demos --example card_stack_programmatic`

use core::time::Duration;

use understory_card_stack::config::StackConfig;
use understory_card_stack::stack::CardStack;
use understory_motion::animation::TickStatus;

const FRAME: Duration = Duration::from_micros(16_667);

fn settle(stack: &mut CardStack<()>) -> usize {
    let mut frames = 0;
    while stack.tick(FRAME) != TickStatus::Idle {
        frames += 1;
    }
    frames
}

fn main() {
    let config = StackConfig {
        infinite: true,
        ..StackConfig::default()
    };
    let mut stack = CardStack::new(config, 3, ()).unwrap();
    let _indicator = stack.subscribe_x(|x| {
        if x.abs() >= 100.0 {
            println!("  indicator: {}", if x > 0.0 { "LIKE" } else { "NOPE" });
        }
    });

    for liked in [true, false, true, true] {
        let accepted = stack.move_next(liked);
        // A second press while the card is still leaving is ignored.
        let repeat = stack.move_next(liked);
        let frames = settle(&mut stack);
        println!(
            "move_next({liked}): accepted {accepted}, repeat {repeat}, {frames} frames, active {}, ended {}",
            stack.active_index(),
            stack.is_stack_ended(),
        );
    }

    match stack.go_back() {
        Ok(()) => {
            let frames = settle(&mut stack);
            println!("go_back: active {} after {frames} frames", stack.active_index());
        }
        Err(err) => println!("go_back refused: {err}"),
    }
}
