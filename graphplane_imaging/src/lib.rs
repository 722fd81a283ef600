// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graphplane_imaging --heading-base-level=0

//! Graphplane Imaging: backend-agnostic drawing IR and backend traits.
//!
//! This crate defines the small, plain-data drawing vocabulary a plot frame is
//! made of, and the traits a drawing surface implements to receive it. It
//! sits between the scene renderer (`graphplane_render`) and concrete
//! surfaces (an SVG exporter, an op recorder for tests, a canvas or GPU
//! renderer owned by the host).
//!
//! # Core concepts
//!
//! - **Resources**: small, opaque handles ([`PathId`], [`PaintId`]) whose
//!   lifetimes are managed via [`ResourceBackend`].
//! - **Imaging operations**: [`StateOp`] (mutate state) and [`DrawOp`]
//!   (produce pixels), combined into [`ImagingOp`] for recording.
//! - **Backends**: [`ImagingBackend`] accepts imaging ops; the
//!   [`ImagingBackendExt`] helpers scope a resource to a closure so that
//!   per-frame paths and paints are released as soon as they are drawn.
//!
//! Coordinates are `f64` screen pixels with the origin at the top-left corner
//! and Y growing downwards, before the current transform is applied.
//!
//! # Example
//!
//! ```ignore
//! # use graphplane_imaging::*;
//! # use peniko::{Brush, Color};
//! # struct MyBackend { /* implements ResourceBackend + ImagingBackend */ }
//! let mut backend = MyBackend { /* ... */ };
//!
//! backend.with_paint(Brush::Solid(Color::WHITE), |b, paint| {
//!     b.state(StateOp::SetPaint(paint));
//!     b.draw(DrawOp::FillRect { x0: 0.0, y0: 0.0, x1: 800.0, y1: 600.0 });
//! });
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;

/// Identifier for a path resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathId(pub u32);

/// Identifier for a paint resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Paints may be shared by many draw operations.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaintId(pub u32);

/// Affine transform type used by the imaging IR.
pub type Affine = kurbo::Affine;

/// Stroke style used by `StateOp::SetStroke`.
///
/// This is a re-export of [`kurbo::Stroke`], which captures width, joins,
/// caps and dashes.
pub type StrokeStyle = kurbo::Stroke;

/// A single path command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Lift the pen and move to a point, starting a new subpath.
    MoveTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Straight line from the current point.
    LineTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
}

/// Description of a path resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDesc {
    /// Path commands in drawing order.
    pub commands: Box<[PathCmd]>,
}

impl PathDesc {
    /// A single straight line.
    #[must_use]
    pub fn line(from: Point, to: Point) -> Self {
        Self {
            commands: Box::new([
                PathCmd::MoveTo {
                    x: from.x,
                    y: from.y,
                },
                PathCmd::LineTo { x: to.x, y: to.y },
            ]),
        }
    }

    /// One open subpath per polyline: a `MoveTo` to its first point, then a
    /// `LineTo` per remaining point. Empty polylines are skipped.
    #[must_use]
    pub fn from_polylines<'a, I>(polylines: I) -> Self
    where
        I: IntoIterator<Item = &'a [Point]>,
    {
        let mut commands = Vec::new();
        for polyline in polylines {
            let Some((first, rest)) = polyline.split_first() else {
                continue;
            };
            commands.push(PathCmd::MoveTo {
                x: first.x,
                y: first.y,
            });
            commands.extend(rest.iter().map(|p| PathCmd::LineTo { x: p.x, y: p.y }));
        }
        Self {
            commands: commands.into_boxed_slice(),
        }
    }

    /// Returns `true` if the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of subpaths (`MoveTo` commands).
    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCmd::MoveTo { .. }))
            .count()
    }
}

/// Description of a paint resource.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintDesc {
    /// Brush used for fills, strokes and text.
    pub brush: Brush,
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// The position is the start of the text.
    #[default]
    Left,
    /// The position is the horizontal center of the text.
    Center,
    /// The position is the end of the text.
    Right,
}

/// Vertical anchoring of a text run relative to its position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// The position is the top of the em box.
    Top,
    /// The position is the middle of the em box.
    Middle,
    /// The position is the alphabetic baseline.
    #[default]
    Alphabetic,
}

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform matrix.
    SetTransform(Affine),
    /// Set the current paint resource.
    SetPaint(PaintId),
    /// Set the current stroke style.
    SetStroke(StrokeStyle),
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect {
        /// Minimum X coordinate.
        x0: f64,
        /// Minimum Y coordinate.
        y0: f64,
        /// Maximum X coordinate.
        x1: f64,
        /// Maximum Y coordinate.
        y1: f64,
    },
    /// Stroke the given path with the current stroke and paint.
    StrokePath(PathId),
    /// Fill a run of text with the current paint.
    FillText {
        /// Text to draw.
        text: String,
        /// Anchor X coordinate.
        x: f64,
        /// Anchor Y coordinate.
        y: f64,
        /// Font size in pixels.
        size: f64,
        /// Horizontal anchoring.
        align: TextAlign,
        /// Vertical anchoring.
        baseline: TextBaseline,
    },
}

/// A state or draw operation, as recorded by backends.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// A state change.
    State(StateOp),
    /// A draw.
    Draw(DrawOp),
}

/// Resource management for paths and paints.
pub trait ResourceBackend {
    /// Creates a path resource.
    fn create_path(&mut self, desc: PathDesc) -> PathId;
    /// Releases a path resource. Unknown ids are ignored.
    fn destroy_path(&mut self, id: PathId);

    /// Creates a paint resource.
    fn create_paint(&mut self, desc: PaintDesc) -> PaintId;
    /// Releases a paint resource. Unknown ids are ignored.
    fn destroy_paint(&mut self, id: PaintId);
}

/// A drawing surface that consumes imaging operations in order.
pub trait ImagingBackend: ResourceBackend {
    /// Applies a state operation.
    fn state(&mut self, op: StateOp);

    /// Applies a draw operation using the current state.
    fn draw(&mut self, op: DrawOp);
}

/// Scoped-resource helpers for any [`ImagingBackend`].
pub trait ImagingBackendExt: ImagingBackend {
    /// Creates a path, hands it to `f`, then destroys it.
    #[inline]
    fn with_path<R>(&mut self, desc: PathDesc, f: impl FnOnce(&mut Self, PathId) -> R) -> R {
        let id = self.create_path(desc);
        let out = f(self, id);
        self.destroy_path(id);
        out
    }

    /// Creates a paint for `brush`, hands it to `f`, then destroys it.
    #[inline]
    fn with_paint<R>(&mut self, brush: Brush, f: impl FnOnce(&mut Self, PaintId) -> R) -> R {
        let id = self.create_paint(PaintDesc { brush });
        let out = f(self, id);
        self.destroy_paint(id);
        out
    }

    /// Strokes `desc` with the current paint and stroke style.
    ///
    /// Empty paths are skipped without allocating a resource.
    #[inline]
    fn stroke_path_desc(&mut self, desc: PathDesc) {
        if desc.is_empty() {
            return;
        }
        self.with_path(desc, |b, path| b.draw(DrawOp::StrokePath(path)));
    }
}

impl<B: ImagingBackend + ?Sized> ImagingBackendExt for B {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use peniko::Color;

    /// Trivial in-memory backend that records operations for testing.
    #[derive(Default)]
    struct RecordingBackend {
        next_path: u32,
        next_paint: u32,
        live_paths: u32,
        live_paints: u32,
        ops: Vec<ImagingOp>,
    }

    impl ResourceBackend for RecordingBackend {
        fn create_path(&mut self, _desc: PathDesc) -> PathId {
            let id = self.next_path;
            self.next_path += 1;
            self.live_paths += 1;
            PathId(id)
        }

        fn destroy_path(&mut self, _id: PathId) {
            self.live_paths -= 1;
        }

        fn create_paint(&mut self, _desc: PaintDesc) -> PaintId {
            let id = self.next_paint;
            self.next_paint += 1;
            self.live_paints += 1;
            PaintId(id)
        }

        fn destroy_paint(&mut self, _id: PaintId) {
            self.live_paints -= 1;
        }
    }

    impl ImagingBackend for RecordingBackend {
        fn state(&mut self, op: StateOp) {
            self.ops.push(ImagingOp::State(op));
        }

        fn draw(&mut self, op: DrawOp) {
            self.ops.push(ImagingOp::Draw(op));
        }
    }

    #[test]
    fn scoped_resources_are_released() {
        let mut backend = RecordingBackend::default();

        backend.with_paint(Brush::Solid(Color::WHITE), |b, paint| {
            b.state(StateOp::SetPaint(paint));
            b.stroke_path_desc(PathDesc::line(Point::ZERO, Point::new(1.0, 1.0)));
            assert_eq!(b.live_paints, 1);
        });

        assert_eq!(backend.live_paints, 0);
        assert_eq!(backend.live_paths, 0);
        assert_eq!(
            backend.ops,
            vec![
                ImagingOp::State(StateOp::SetPaint(PaintId(0))),
                ImagingOp::Draw(DrawOp::StrokePath(PathId(0))),
            ]
        );
    }

    #[test]
    fn empty_paths_are_not_drawn() {
        let mut backend = RecordingBackend::default();
        backend.stroke_path_desc(PathDesc::from_polylines([]));
        assert!(backend.ops.is_empty());
        assert_eq!(backend.next_path, 0);
    }

    #[test]
    fn polylines_become_subpaths() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
        let b = [Point::new(5.0, 5.0)];
        let desc = PathDesc::from_polylines([&a[..], &[][..], &b[..]]);

        assert_eq!(desc.subpath_count(), 2);
        assert_eq!(
            desc.commands[..],
            [
                PathCmd::MoveTo { x: 0.0, y: 0.0 },
                PathCmd::LineTo { x: 1.0, y: 1.0 },
                PathCmd::LineTo { x: 2.0, y: 0.0 },
                PathCmd::MoveTo { x: 5.0, y: 5.0 },
            ]
        );
    }
}
