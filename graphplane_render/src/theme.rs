// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use graphplane_imaging::Affine;
use graphplane_view::TARGET_PIXEL_SPACING;
use peniko::Color;

/// Colors of the non-function layers of a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Theme {
    /// Canvas fill.
    pub background: Color,
    /// Grid lines.
    pub grid: Color,
    /// Axis lines and tick marks.
    pub axis: Color,
    /// Tick labels.
    pub label: Color,
}

impl Theme {
    /// Dark lines on white.
    pub const LIGHT: Self = Self {
        background: Color::from_rgb8(0xff, 0xff, 0xff),
        grid: Color::from_rgb8(0xe0, 0xe0, 0xe0),
        axis: Color::from_rgb8(0x33, 0x33, 0x33),
        label: Color::from_rgb8(0x55, 0x55, 0x55),
    };

    /// Light lines on a near-black canvas.
    pub const DARK: Self = Self {
        background: Color::from_rgb8(0x1e, 0x1e, 0x1e),
        grid: Color::from_rgb8(0x3a, 0x3a, 0x3a),
        axis: Color::from_rgb8(0xcc, 0xcc, 0xcc),
        label: Color::from_rgb8(0xaa, 0xaa, 0xaa),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// Geometry of a frame: spacing, stroke widths, tick and label placement.
///
/// All lengths are in device-independent pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Desired distance between grid lines before rounding to a nice step.
    pub target_pixel_spacing: f64,
    /// Grid line width.
    pub grid_width: f64,
    /// Axis line width.
    pub axis_width: f64,
    /// Tick mark width.
    pub tick_width: f64,
    /// Tick half-length, measured from the axis.
    pub tick_size: f64,
    /// Function curve width.
    pub curve_width: f64,
    /// Label font size.
    pub font_size: f64,
    /// Gap between the end of an X tick and the top of its label.
    pub x_label_gap: f64,
    /// Gap between the end of a Y tick and the right edge of its label.
    pub y_label_gap: f64,
    /// Room kept below the X tick row when its axis is pinned to the bottom.
    pub x_label_room: f64,
    /// Room kept left of the Y tick column when its axis is pinned to the left.
    pub y_label_room: f64,
    /// Physical pixels per device-independent pixel.
    pub device_pixel_ratio: f64,
}

impl RenderStyle {
    /// The standard plot look.
    pub const DEFAULT: Self = Self {
        target_pixel_spacing: TARGET_PIXEL_SPACING,
        grid_width: 1.0,
        axis_width: 2.0,
        tick_width: 1.0,
        tick_size: 5.0,
        curve_width: 2.0,
        font_size: 11.0,
        x_label_gap: 2.0,
        y_label_gap: 3.0,
        x_label_room: 20.0,
        y_label_room: 30.0,
        device_pixel_ratio: 1.0,
    };

    /// Returns this style with another device pixel ratio.
    #[must_use]
    pub const fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Transform from device-independent to physical pixels.
    ///
    /// Ratios that are not positive and finite are treated as `1`.
    #[must_use]
    pub fn device_transform(&self) -> Affine {
        let ratio = self.device_pixel_ratio;
        if ratio > 0.0 && ratio.is_finite() {
            Affine::scale(ratio)
        } else {
            Affine::IDENTITY
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
