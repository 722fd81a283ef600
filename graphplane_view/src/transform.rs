// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Math space ↔ screen space conversion.
//!
//! Math space has Y pointing up; screen space has Y pointing down with the
//! origin at the top-left corner of the canvas. All functions here are pure
//! and defined for any finite input.

use kurbo::{Point, Rect, Size};

use crate::Viewport;

/// Converts a math-space point into screen pixels.
///
/// `sx = (mx - cx) * scale + w/2` and `sy = -(my - cy) * scale + h/2`.
#[must_use]
pub fn math_to_screen(math: Point, viewport: Viewport, extent: Size) -> Point {
    let scale = viewport.scale();
    Point::new(
        (math.x - viewport.center_x()) * scale + extent.width / 2.0,
        -(math.y - viewport.center_y()) * scale + extent.height / 2.0,
    )
}

/// Converts a screen-space point into math space.
///
/// Exact algebraic inverse of [`math_to_screen`].
#[must_use]
pub fn screen_to_math(screen: Point, viewport: Viewport, extent: Size) -> Point {
    let scale = viewport.scale();
    Point::new(
        viewport.center_x() + (screen.x - extent.width / 2.0) / scale,
        viewport.center_y() - (screen.y - extent.height / 2.0) / scale,
    )
}

/// Math X coordinate sampled by pixel column `px` on a canvas `width` wide.
#[must_use]
pub fn column_to_math_x(px: f64, viewport: Viewport, width: f64) -> f64 {
    viewport.center_x() + (px - width / 2.0) / viewport.scale()
}

/// Returns the math-space rectangle visible through the canvas.
///
/// The rectangle spans `cx ± w/2/scale` horizontally and `cy ± h/2/scale`
/// vertically, with `y0` the bottom edge and `y1` the top edge in math space.
#[must_use]
pub fn visible_math_rect(viewport: Viewport, extent: Size) -> Rect {
    let half_w = extent.width / 2.0 / viewport.scale();
    let half_h = extent.height / 2.0 / viewport.scale();
    Rect::new(
        viewport.center_x() - half_w,
        viewport.center_y() - half_h,
        viewport.center_x() + half_w,
        viewport.center_y() + half_h,
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{column_to_math_x, math_to_screen, screen_to_math, visible_math_rect};
    use crate::Viewport;

    const EXTENT: Size = Size::new(800.0, 600.0);

    #[test]
    fn center_maps_to_canvas_middle() {
        let vp = Viewport::new(3.0, -2.0, 25.0);
        let s = math_to_screen(Point::new(3.0, -2.0), vp, EXTENT);
        assert_eq!(s, Point::new(400.0, 300.0));
    }

    #[test]
    fn y_axis_is_inverted() {
        let vp = Viewport::new(0.0, 0.0, 50.0);
        let above = math_to_screen(Point::new(0.0, 2.0), vp, EXTENT);
        let below = math_to_screen(Point::new(0.0, -2.0), vp, EXTENT);
        assert_eq!(above.y, 200.0);
        assert_eq!(below.y, 400.0);
    }

    #[test]
    fn screen_to_math_inverts_math_to_screen() {
        let vp = Viewport::new(-1.25, 7.5, 137.0);
        let math = Point::new(0.3, -4.2);
        let back = screen_to_math(math_to_screen(math, vp, EXTENT), vp, EXTENT);
        assert!((back.x - math.x).abs() < 1e-12);
        assert!((back.y - math.y).abs() < 1e-12);
    }

    #[test]
    fn column_matches_screen_to_math() {
        let vp = Viewport::new(2.0, 0.0, 10.0);
        for px in [0.0, 1.0, 399.0, 400.0, 799.0] {
            let via_column = column_to_math_x(px, vp, EXTENT.width);
            let via_screen = screen_to_math(Point::new(px, 0.0), vp, EXTENT).x;
            assert!((via_column - via_screen).abs() < 1e-12);
        }
    }

    #[test]
    fn visible_rect_spans_half_extent_each_way() {
        let vp = Viewport::new(1.0, 1.0, 100.0);
        let r = visible_math_rect(vp, EXTENT);
        assert!((r.x0 - -3.0).abs() < 1e-12);
        assert!((r.x1 - 5.0).abs() < 1e-12);
        assert!((r.y0 - -2.0).abs() < 1e-12);
        assert!((r.y1 - 4.0).abs() < 1e-12);
    }
}
