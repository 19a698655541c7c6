// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print the per-layer transforms while a card is dragged.
//!
//! Shows how the drag vector spreads through the stack: the front card follows
//! the pointer, cards behind it move less and grow toward the next slot as the
//! drag nears the threshold.
//!
//! Run:
//! - `cargo run -p understory_demos --example card_stack_layers`

use kurbo::{Point, Vec2};
use understory_card_stack::config::StackConfig;
use understory_card_stack::handler::PanGesture;
use understory_card_stack::stack::CardStack;

fn main() {
    let config = StackConfig::for_viewport(kurbo::Size::new(390.0, 844.0));
    let mut stack = CardStack::new(config, 10, ()).unwrap();

    stack.handle_grant(&(), &PanGesture::default());
    for x in [0.0, 35.0, 70.0] {
        stack.handle_move(&PanGesture::from_delta(Vec2::new(x, -10.0)));
        println!("drag = ({x}, -10)");
        for layer in stack.layers() {
            let t = layer.transform;
            let size = stack.config().layers.item_size;
            let corner = t.to_affine(size) * Point::ORIGIN;
            println!(
                "  depth {} item {:>2}: z {} rot {:6.2}° ty {:6.2} scale {:.3} opacity {:.2} corner ({:.1}, {:.1})",
                layer.depth,
                layer.item_index,
                t.z_index,
                t.rotation_deg,
                t.translation.y,
                t.scale,
                t.opacity,
                corner.x,
                corner.y,
            );
        }
    }
    stack.handle_release(&(), &PanGesture::from_delta(Vec2::new(70.0, -10.0)));
    println!("released below threshold: {:?}", stack.phase());
}
