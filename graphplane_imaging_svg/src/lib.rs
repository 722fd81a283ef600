// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graphplane_imaging_svg --heading-base-level=0

//! SVG export backend for the Graphplane imaging IR.
//!
//! This crate provides a small implementation of
//! [`ImagingBackend`] and [`ResourceBackend`] that turns imaging ops into SVG
//! elements as they arrive and can export them as an SVG document.
//!
//! Elements are written at draw time, resolving the current paint, stroke and
//! transform right away. Resources can therefore be destroyed as soon as they
//! have been drawn, which is what the scene renderer does every frame.
//!
//! Only solid brushes are supported; other brushes fall back to black.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use graphplane_imaging::{
    Affine, DrawOp, ImagingBackend, PaintDesc, PaintId, PathCmd, PathDesc, PathId,
    ResourceBackend, StateOp, StrokeStyle, TextAlign, TextBaseline,
};
use kurbo::{Cap, Join};
use peniko::{Brush, Color};

#[derive(Clone, Debug)]
struct SvgState {
    transform: Affine,
    paint: Option<PaintId>,
    stroke: Option<StrokeStyle>,
}

impl Default for SvgState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
            stroke: None,
        }
    }
}

/// A streaming SVG backend.
#[derive(Default, Debug)]
pub struct SvgBackend {
    paths: Vec<Option<PathDesc>>,
    paints: Vec<Option<PaintDesc>>,

    state: SvgState,
    body: String,
    elements: usize,
}

impl SvgBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the written elements and resets the imaging state, keeping
    /// resources.
    pub fn clear(&mut self) {
        self.body.clear();
        self.elements = 0;
        self.state = SvgState::default();
    }

    /// Number of elements written since creation or the last [`clear`](Self::clear).
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Export the written elements as an SVG document.
    ///
    /// `width`/`height` are used both as the SVG `width`/`height` attributes and to set
    /// `viewBox="0 0 width height"`.
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }

    fn write_draw_op(&mut self, op: &DrawOp) {
        let attrs = svg_transform_attr(self.state.transform);
        match op {
            DrawOp::FillRect { x0, y0, x1, y1 } => {
                let style = self.style_for_paint(PaintKind::Fill);
                let _ = write!(
                    self.body,
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{attrs}{style}/>",
                    fmt_f64(*x0),
                    fmt_f64(*y0),
                    fmt_f64(x1 - x0),
                    fmt_f64(y1 - y0),
                );
            }
            DrawOp::StrokePath(path_id) => {
                let Some(Some(path)) = self.paths.get(path_id.0 as usize) else {
                    return;
                };
                let d = path_to_svg_d(path);
                let style = self.style_for_paint(PaintKind::Stroke);
                let _ = write!(self.body, "<path d=\"{d}\"{attrs}{style}/>");
            }
            DrawOp::FillText {
                text,
                x,
                y,
                size,
                align,
                baseline,
            } => {
                let style = self.style_for_paint(PaintKind::Fill);
                let _ = write!(
                    self.body,
                    "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" text-anchor=\"{}\" dominant-baseline=\"{}\"{attrs}{style}>",
                    fmt_f64(*x),
                    fmt_f64(*y),
                    fmt_f64(*size),
                    text_anchor_svg(*align),
                    dominant_baseline_svg(*baseline),
                );
                escape_xml_into(&mut self.body, text);
                self.body.push_str("</text>");
            }
        }
        self.elements += 1;
    }

    fn style_for_paint(&self, kind: PaintKind) -> String {
        let mut out = String::new();

        let color = match self.state.paint {
            Some(paint_id) => match self.paints.get(paint_id.0 as usize) {
                Some(Some(PaintDesc {
                    brush: Brush::Solid(color),
                })) => *color,
                _ => Color::BLACK,
            },
            None => Color::BLACK,
        };
        let (rgb, a) = color_to_svg(color);

        match kind {
            PaintKind::Fill => {
                let _ = write!(out, " fill=\"{rgb}\" stroke=\"none\"");
                if a < 1.0 {
                    let _ = write!(out, " fill-opacity=\"{}\"", fmt_f64(a));
                }
            }
            PaintKind::Stroke => {
                let _ = write!(out, " fill=\"none\" stroke=\"{rgb}\"");
                if a < 1.0 {
                    let _ = write!(out, " stroke-opacity=\"{}\"", fmt_f64(a));
                }
                if let Some(stroke) = self.state.stroke.as_ref() {
                    write_stroke_attrs(&mut out, stroke);
                }
            }
        }

        out
    }
}

impl ResourceBackend for SvgBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let id =
            u32::try_from(self.paths.len()).expect("SvgBackend: too many paths for u32 PathId");
        self.paths.push(Some(desc));
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        if let Some(slot) = self.paths.get_mut(id.0 as usize) {
            *slot = None;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id =
            u32::try_from(self.paints.len()).expect("SvgBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        if let Some(slot) = self.paints.get_mut(id.0 as usize) {
            *slot = None;
        }
    }
}

impl ImagingBackend for SvgBackend {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetTransform(xf) => self.state.transform = xf,
            StateOp::SetPaint(id) => self.state.paint = Some(id),
            StateOp::SetStroke(style) => self.state.stroke = Some(style),
        }
    }

    fn draw(&mut self, op: DrawOp) {
        self.write_draw_op(&op);
    }
}

#[derive(Copy, Clone)]
enum PaintKind {
    Fill,
    Stroke,
}

fn write_stroke_attrs(out: &mut String, stroke: &StrokeStyle) {
    let _ = write!(out, " stroke-width=\"{}\"", fmt_f64(stroke.width));
    // SVG has a single linecap, while kurbo can specify start/end caps.
    // Use the start cap when they differ.
    let _ = write!(
        out,
        " stroke-linecap=\"{}\"",
        stroke_cap_svg(stroke.start_cap)
    );
    let _ = write!(out, " stroke-linejoin=\"{}\"", stroke_join_svg(stroke.join));
    if stroke.miter_limit.is_finite() && stroke.join == Join::Miter {
        let _ = write!(
            out,
            " stroke-miterlimit=\"{}\"",
            fmt_f64(stroke.miter_limit)
        );
    }
    if !stroke.dash_pattern.is_empty() {
        let dashes: Vec<String> = stroke.dash_pattern.iter().map(|v| fmt_f64(*v)).collect();
        let _ = write!(out, " stroke-dasharray=\"{}\"", dashes.join(","));
    }
}

fn stroke_cap_svg(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Round => "round",
        Cap::Square => "square",
    }
}

fn stroke_join_svg(join: Join) -> &'static str {
    match join {
        Join::Miter => "miter",
        Join::Round => "round",
        Join::Bevel => "bevel",
    }
}

fn text_anchor_svg(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn dominant_baseline_svg(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "hanging",
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
    }
}

fn escape_xml_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

fn color_to_svg(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let a = f64::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn svg_transform_attr(transform: Affine) -> String {
    let mut attrs = String::new();
    if transform != Affine::IDENTITY {
        let _ = write!(attrs, " transform=\"{}\"", affine_to_svg_matrix(transform));
    }
    attrs
}

fn affine_to_svg_matrix(xf: Affine) -> String {
    // kurbo::Affine stores [a, b, c, d, e, f] corresponding to:
    // [ a c e ]
    // [ b d f ]
    // [ 0 0 1 ]
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_f64(c[0]),
        fmt_f64(c[1]),
        fmt_f64(c[2]),
        fmt_f64(c[3]),
        fmt_f64(c[4]),
        fmt_f64(c[5]),
    )
}

fn path_to_svg_d(path: &PathDesc) -> String {
    let mut d = String::new();
    for cmd in path.commands.iter() {
        match *cmd {
            PathCmd::MoveTo { x, y } => {
                let _ = write!(d, "M{} {}", fmt_f64(x), fmt_f64(y));
            }
            PathCmd::LineTo { x, y } => {
                let _ = write!(d, "L{} {}", fmt_f64(x), fmt_f64(y));
            }
        }
    }
    d
}

/// Three decimals at most, trailing zeros trimmed.
fn fmt_f64(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
