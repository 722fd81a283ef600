// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame composition: background, grid, axes with labels, then curves.

use graphplane_eval::CompiledFunction;
use graphplane_imaging::{
    DrawOp, ImagingBackend, ImagingBackendExt, PathCmd, PathDesc, StateOp, StrokeStyle,
    TextAlign, TextBaseline,
};
use graphplane_view::{Viewport, grid_lines, math_to_screen, nice_step, visible_math_rect};
use kurbo::{Point, Size};
use peniko::{Brush, Color};

use crate::{RenderStyle, Theme, format_label, sample_function};

/// Renders one frame with [`RenderStyle::DEFAULT`].
///
/// See [`render_frame_with_style`].
pub fn render_frame<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    functions: &[CompiledFunction],
    viewport: Viewport,
    extent: Size,
    theme: &Theme,
) {
    render_frame_with_style(
        backend,
        functions,
        viewport,
        extent,
        theme,
        &RenderStyle::DEFAULT,
    );
}

/// Renders one frame of the plot into `backend`.
///
/// Layers, each drawn over the previous one:
/// 1. the background, filling the whole extent;
/// 2. grid lines at the nice spacing for the viewport's scale, snapped to
///    pixel centers;
/// 3. the X and Y axes, each only when the math origin's projection lies on
///    the canvas;
/// 4. tick marks and labels at every grid line except the one at zero. When an
///    axis is off screen, its ticks stay pinned to the nearest canvas edge;
/// 5. every visible function's sampled segments, in its own color.
///
/// All coordinates are in device-independent pixels; the style's device pixel
/// ratio is applied once as the current transform. Every path and paint
/// created for the frame is destroyed before returning. A zero, negative or
/// non-finite extent draws nothing.
pub fn render_frame_with_style<B: ImagingBackend + ?Sized>(
    backend: &mut B,
    functions: &[CompiledFunction],
    viewport: Viewport,
    extent: Size,
    theme: &Theme,
    style: &RenderStyle,
) {
    let Size { width, height } = extent;
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        log::debug!("skipping frame with empty extent {width}x{height}");
        return;
    }

    let frame = Frame {
        viewport,
        extent,
        spacing: nice_step(style.target_pixel_spacing / viewport.scale()),
        origin: math_to_screen(Point::ZERO, viewport, extent),
        style,
    };

    backend.state(StateOp::SetTransform(style.device_transform()));

    backend.with_paint(solid(theme.background), |b, paint| {
        b.state(StateOp::SetPaint(paint));
        b.draw(DrawOp::FillRect {
            x0: 0.0,
            y0: 0.0,
            x1: width,
            y1: height,
        });
    });

    backend.with_paint(solid(theme.grid), |b, paint| {
        b.state(StateOp::SetPaint(paint));
        b.state(StateOp::SetStroke(StrokeStyle::new(style.grid_width)));
        b.stroke_path_desc(frame.grid_path());
    });

    backend.with_paint(solid(theme.axis), |b, paint| {
        b.state(StateOp::SetPaint(paint));
        b.state(StateOp::SetStroke(StrokeStyle::new(style.axis_width)));
        b.stroke_path_desc(frame.axes_path());
        b.state(StateOp::SetStroke(StrokeStyle::new(style.tick_width)));
        b.stroke_path_desc(frame.ticks_path());
    });

    backend.with_paint(solid(theme.label), |b, paint| {
        b.state(StateOp::SetPaint(paint));
        for label in frame.labels() {
            b.draw(label);
        }
    });

    for function in functions.iter().filter(|f| f.visible) {
        let segments = sample_function(function.evaluator.as_ref(), viewport, extent);
        log::trace!(
            "function {}: {} segments, {} points",
            function.id,
            segments.len(),
            segments.iter().map(Vec::len).sum::<usize>()
        );
        let path = PathDesc::from_polylines(segments.iter().map(Vec::as_slice));
        backend.with_paint(solid(function.color), |b, paint| {
            b.state(StateOp::SetPaint(paint));
            b.state(StateOp::SetStroke(StrokeStyle::new(style.curve_width)));
            b.stroke_path_desc(path);
        });
    }
}

fn solid(color: Color) -> Brush {
    Brush::Solid(color)
}

/// Moves `v` to the center of the pixel it rounds to, so one pixel wide lines
/// stay crisp. Halves round up.
fn snap(v: f64) -> f64 {
    (v + 0.5).floor() + 0.5
}

/// Per-frame values shared by the grid and axis layers.
struct Frame<'a> {
    viewport: Viewport,
    extent: Size,
    spacing: f64,
    origin: Point,
    style: &'a RenderStyle,
}

impl Frame<'_> {
    /// Screen X of every vertical grid line's math X.
    fn columns(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let math = visible_math_rect(self.viewport, self.extent);
        grid_lines(math.x0, math.x1, self.spacing)
            .map(|mx| (mx, math_to_screen(Point::new(mx, 0.0), self.viewport, self.extent).x))
    }

    /// Screen Y of every horizontal grid line's math Y.
    fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let math = visible_math_rect(self.viewport, self.extent);
        grid_lines(math.y0, math.y1, self.spacing)
            .map(|my| (my, math_to_screen(Point::new(0.0, my), self.viewport, self.extent).y))
    }

    fn is_origin(&self, v: f64) -> bool {
        v.abs() < self.spacing * 0.01
    }

    /// Y of the X-axis tick row, pinned to the canvas when the axis is off it.
    fn tick_row(&self) -> f64 {
        self.origin
            .y
            .min(self.extent.height - self.style.x_label_room)
            .max(0.0)
    }

    /// X of the Y-axis tick column, pinned to the canvas when the axis is off it.
    fn tick_column(&self) -> f64 {
        self.origin
            .x
            .min(self.extent.width)
            .max(self.style.y_label_room)
    }

    fn grid_path(&self) -> PathDesc {
        let Size { width, height } = self.extent;
        let mut commands = Vec::new();
        for (_, sx) in self.columns() {
            line(&mut commands, snap(sx), 0.0, snap(sx), height);
        }
        for (_, sy) in self.rows() {
            line(&mut commands, 0.0, snap(sy), width, snap(sy));
        }
        path(commands)
    }

    fn axes_path(&self) -> PathDesc {
        let Size { width, height } = self.extent;
        let Point { x: ox, y: oy } = self.origin;
        let mut commands = Vec::new();
        if (0.0..=height).contains(&oy) {
            line(&mut commands, 0.0, snap(oy), width, snap(oy));
        }
        if (0.0..=width).contains(&ox) {
            line(&mut commands, snap(ox), 0.0, snap(ox), height);
        }
        path(commands)
    }

    fn ticks_path(&self) -> PathDesc {
        let tick = self.style.tick_size;
        let (ty, tx) = (self.tick_row(), self.tick_column());
        let mut commands = Vec::new();
        for (_, sx) in self.columns().filter(|(mx, _)| !self.is_origin(*mx)) {
            line(&mut commands, snap(sx), ty - tick, snap(sx), ty + tick);
        }
        for (_, sy) in self.rows().filter(|(my, _)| !self.is_origin(*my)) {
            line(&mut commands, tx - tick, snap(sy), tx + tick, snap(sy));
        }
        path(commands)
    }

    fn labels(&self) -> Vec<DrawOp> {
        let style = self.style;
        let (ty, tx) = (self.tick_row(), self.tick_column());
        let x_labels = self
            .columns()
            .filter(|(mx, _)| !self.is_origin(*mx))
            .map(|(mx, sx)| DrawOp::FillText {
                text: format_label(mx),
                x: sx,
                y: ty + style.tick_size + style.x_label_gap,
                size: style.font_size,
                align: TextAlign::Center,
                baseline: TextBaseline::Top,
            });
        let y_labels = self
            .rows()
            .filter(|(my, _)| !self.is_origin(*my))
            .map(|(my, sy)| DrawOp::FillText {
                text: format_label(my),
                x: tx - style.tick_size - style.y_label_gap,
                y: sy,
                size: style.font_size,
                align: TextAlign::Right,
                baseline: TextBaseline::Middle,
            });
        x_labels.chain(y_labels).collect()
    }
}

fn line(commands: &mut Vec<PathCmd>, x0: f64, y0: f64, x1: f64, y1: f64) {
    commands.push(PathCmd::MoveTo { x: x0, y: y0 });
    commands.push(PathCmd::LineTo { x: x1, y: y1 });
}

fn path(commands: Vec<PathCmd>) -> PathDesc {
    PathDesc {
        commands: commands.into_boxed_slice(),
    }
}
