// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a scripted pointer gesture and print the viewport after each event.
//!
//! The script drags the plane, zooms in around a point, and leaves the
//! canvas mid-drag. Run with `RUST_LOG=trace` to see the controller's own
//! logging. With `--svg`, the final frame is written to stdout as SVG.
//!
//! Example:
//!   `RUST_LOG=trace cargo run -p graphplane_demos --example pan_zoom`

use std::env;

use graphplane_demos::{init_logging, plot_to_svg};
use graphplane_eval::FunctionList;
use graphplane_interaction::{InteractionConfig, PanZoomController, PointerEvent};
use graphplane_render::Theme;
use graphplane_view::{Viewport, screen_to_math};
use kurbo::{Point, Size};

const EXTENT: Size = Size::new(800.0, 600.0);

fn script() -> Vec<PointerEvent> {
    let mut events = vec![PointerEvent::Down(Point::new(400.0, 300.0))];
    // Drag 100 px to the right in five steps: the plane follows the pointer.
    events.extend(
        (1..=5).map(|i| PointerEvent::Move(Point::new(400.0 + 20.0 * f64::from(i), 300.0))),
    );
    events.push(PointerEvent::Up);
    // Zoom in three notches around the point under (600, 150).
    events.extend((0..3).map(|_| PointerEvent::Wheel {
        delta: -1.0,
        position: Point::new(600.0, 150.0),
    }));
    // A drag that ends by leaving the canvas.
    events.push(PointerEvent::Down(Point::new(100.0, 100.0)));
    events.push(PointerEvent::Move(Point::new(100.0, 160.0)));
    events.push(PointerEvent::Leave);
    // Ignored: no drag is active any more.
    events.push(PointerEvent::Move(Point::new(300.0, 300.0)));
    events
}

fn main() {
    init_logging();

    let write_svg = env::args().any(|arg| arg == "--svg");
    let mut controller = PanZoomController::new(InteractionConfig::DEFAULT);
    let mut viewport = Viewport::default();

    for event in script() {
        if let Some(next) = controller.handle(event, viewport, EXTENT) {
            viewport = next;
        }
        let anchor = screen_to_math(Point::new(600.0, 150.0), viewport, EXTENT);
        eprintln!(
            "{event:?}\n  -> center ({:.4}, {:.4}), scale {:.3}, (600, 150) is math ({:.4}, {:.4})",
            viewport.center_x(),
            viewport.center_y(),
            viewport.scale(),
            anchor.x,
            anchor.y,
        );
    }

    if write_svg {
        let mut list = FunctionList::new();
        list.add("sin(x)");
        list.add("x^3 / 10");
        println!(
            "{}",
            plot_to_svg(&list.compiled(), viewport, 800, 600, &Theme::LIGHT)
        );
    }
}
