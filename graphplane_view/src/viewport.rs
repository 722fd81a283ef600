// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Smallest allowed scale, in pixels per math unit.
pub const MIN_SCALE: f64 = 1.0;

/// Largest allowed scale, in pixels per math unit.
pub const MAX_SCALE: f64 = 1e6;

/// Scale of a freshly created or reset [`Viewport`].
pub const DEFAULT_SCALE: f64 = 50.0;

/// Clamps a scale into `[MIN_SCALE, MAX_SCALE]`.
///
/// `NaN` maps to [`DEFAULT_SCALE`] so that a broken computation upstream can
/// never poison the view.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return DEFAULT_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// The visible region of the math plane.
///
/// A `Viewport` is a plain value: the math coordinate that maps to the
/// geometric center of the canvas, plus a uniform scale in screen pixels per
/// math unit. It is never mutated in place. Every pan or zoom produces a new
/// value which the host swaps in before the next render.
///
/// The scale is always within `[MIN_SCALE, MAX_SCALE]`; every constructor
/// clamps it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    scale: f64,
}

impl Viewport {
    /// Creates a viewport centered on `(center_x, center_y)` with the given
    /// scale, clamped into `[MIN_SCALE, MAX_SCALE]`.
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, scale: f64) -> Self {
        Self {
            center_x,
            center_y,
            scale: clamp_scale(scale),
        }
    }

    /// Math X coordinate at the canvas center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    /// Math Y coordinate at the canvas center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Math point at the canvas center.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Screen pixels per math unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns a copy of this viewport re-centered on `center`.
    #[must_use]
    pub fn with_center(self, center: Point) -> Self {
        Self {
            center_x: center.x,
            center_y: center.y,
            ..self
        }
    }

    /// Returns a copy of this viewport with a new (clamped) scale.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self {
            scale: clamp_scale(scale),
            ..self
        }
    }

    /// Math units covered by one screen pixel.
    #[must_use]
    pub fn math_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }
}

impl Default for Viewport {
    /// Origin-centered at [`DEFAULT_SCALE`].
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_SCALE)
    }
}
