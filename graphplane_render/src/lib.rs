// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graphplane_render --heading-base-level=0

//! Graphplane Render: turn a viewport and a list of functions into a frame.
//!
//! - [`sample_function`]: evaluates a function once per pixel column and
//!   splits the result into pen-down [`Segment`]s, lifting the pen where the
//!   function is undefined or jumps by more than a canvas height.
//! - [`render_frame`]: draws background, grid, axes, tick labels and curves
//!   into any [`ImagingBackend`](graphplane_imaging::ImagingBackend).
//! - [`format_label`]: the tick label text for a grid value.
//! - [`Theme`] and [`RenderStyle`]: colors and geometry of a frame.
//!
//! Frames are rendered from snapshots. The renderer never mutates the viewport
//! or the function list, keeps nothing between calls, and releases every
//! backend resource it creates before returning.
//!
//! ## Example
//!
//! ```rust
//! use graphplane_eval::FunctionList;
//! use graphplane_imaging_ref::RefBackend;
//! use graphplane_render::{Theme, render_frame};
//! use graphplane_view::Viewport;
//! use kurbo::Size;
//!
//! let mut list = FunctionList::new();
//! list.add("sin(x)");
//!
//! let mut backend = RefBackend::default();
//! render_frame(
//!     &mut backend,
//!     &list.compiled(),
//!     Viewport::default(),
//!     Size::new(640.0, 480.0),
//!     &Theme::LIGHT,
//! );
//! assert!(backend.draws().count() > 0);
//! assert_eq!(backend.live_paths(), 0);
//! ```

mod labels;
mod sampler;
mod scene;
mod theme;

pub use labels::format_label;
pub use sampler::{Segment, sample_function};
pub use scene::{render_frame, render_frame_with_style};
pub use theme::{RenderStyle, Theme};
