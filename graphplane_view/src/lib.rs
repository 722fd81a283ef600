// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graphplane_view --heading-base-level=0

//! Graphplane View: the math-space viewport of a 2D function plot.
//!
//! This crate provides the small, headless pieces that every other Graphplane
//! crate reads from:
//! - [`Viewport`]: the view state, a math-space center point plus a uniform
//!   scale in pixels per math unit.
//! - Coordinate conversion between math space (Y up) and screen space
//!   (Y down, pixels) for a given canvas [`Size`](kurbo::Size).
//! - [`grid_spacing`]: a "nice" grid interval on the 1‑2‑5 ladder that keeps
//!   grid lines roughly [`TARGET_PIXEL_SPACING`] pixels apart at any zoom.
//!
//! It does **not** own any rendering backend or input handling. Callers are
//! expected to:
//! - Replace the [`Viewport`] value wholesale whenever a gesture changes it
//!   (see `graphplane_interaction`).
//! - Supply the current canvas extent on every conversion; the extent may
//!   change between calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use graphplane_view::{Viewport, grid_spacing, math_to_screen, screen_to_math};
//!
//! let viewport = Viewport::new(0.0, 0.0, 50.0);
//! let extent = Size::new(800.0, 600.0);
//!
//! // The math origin sits in the middle of the canvas.
//! let origin = math_to_screen(Point::ZERO, viewport, extent);
//! assert_eq!(origin, Point::new(400.0, 300.0));
//!
//! // Math "up" is screen "up": y = 1 lands 50 pixels above the center.
//! let one_up = math_to_screen(Point::new(0.0, 1.0), viewport, extent);
//! assert_eq!(one_up, Point::new(400.0, 250.0));
//!
//! // And back again.
//! let back = screen_to_math(one_up, viewport, extent);
//! assert!((back.y - 1.0).abs() < 1e-12);
//!
//! // 80 px / 50 px-per-unit = 1.6 units, rounded up the ladder to 2.
//! assert_eq!(grid_spacing(viewport.scale()), 2.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod grid;
mod transform;
mod viewport;

pub use grid::{GridLines, TARGET_PIXEL_SPACING, grid_lines, grid_spacing, nice_step};
pub use transform::{column_to_math_x, math_to_screen, screen_to_math, visible_math_rect};
pub use viewport::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, Viewport, clamp_scale};
