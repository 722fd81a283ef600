// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graphplane_interaction --heading-base-level=0

//! Graphplane Interaction: pan and zoom gestures for a function plot.
//!
//! This crate turns pointer input into new [`Viewport`](graphplane_view::Viewport)
//! values:
//!
//! - [`drag`]: a tiny state machine that reports the pointer movement between
//!   successive move events.
//! - [`PanZoomController`]: drag-to-pan plus wheel zoom anchored at the
//!   cursor, so the math point under the pointer stays put while the scale
//!   changes.
//!
//! The controller does not own the viewport. The host keeps the current value,
//! passes it into each handler and swaps in whatever comes back before the
//! next render. Debouncing or coalescing events is left to the host.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use graphplane_interaction::{PanZoomController, PointerEvent};
//! use graphplane_view::{Viewport, math_to_screen, screen_to_math};
//!
//! let extent = Size::new(800.0, 600.0);
//! let mut viewport = Viewport::new(0.0, 0.0, 50.0);
//! let mut controller = PanZoomController::default();
//!
//! // Drag 100 px to the right: the center moves 2 units left.
//! controller.handle(PointerEvent::Down(Point::new(100.0, 100.0)), viewport, extent);
//! if let Some(next) = controller.handle(PointerEvent::Move(Point::new(200.0, 100.0)), viewport, extent) {
//!     viewport = next;
//! }
//! controller.handle(PointerEvent::Up, viewport, extent);
//! assert_eq!(viewport.center_x(), -2.0);
//!
//! // Zoom in over the math point (1, 1); it stays under the cursor.
//! let cursor = math_to_screen(Point::new(1.0, 1.0), viewport, extent);
//! viewport = controller.zoom(viewport, -1.0, cursor, extent);
//! let under = screen_to_math(cursor, viewport, extent);
//! assert!((under.x - 1.0).abs() < 1e-9 && (under.y - 1.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
pub mod drag;

pub use controller::{InteractionConfig, PanZoomController, PointerEvent, pan_by, zoom_at};
