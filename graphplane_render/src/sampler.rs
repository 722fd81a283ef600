// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-column sampling of a function into screen-space polylines.

use graphplane_eval::{Evaluator, evaluate_defined};
use graphplane_view::{Viewport, column_to_math_x, math_to_screen};
use kurbo::{Point, Size};

/// A run of screen-space points drawn with the pen down.
pub type Segment = Vec<Point>;

/// Samples `evaluator` once per pixel column of `extent`.
///
/// Columns `0, 1, ..` up to (not including) the canvas width are converted to
/// math X and evaluated through [`evaluate_defined`]. Consecutive defined
/// samples are joined into a [`Segment`]; the pen lifts when a sample is
/// undefined, or when its screen Y is more than one canvas height away from
/// the previous sample's, in which case a new segment starts at that sample.
///
/// The jump threshold is a heuristic: a steep but continuous curve can be split
/// and a small discontinuity can be bridged.
///
/// Returns no segments for a zero, negative or non-finite extent.
pub fn sample_function<E: Evaluator + ?Sized>(
    evaluator: &E,
    viewport: Viewport,
    extent: Size,
) -> Vec<Segment> {
    let Size { width, height } = extent;
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current: Segment = Vec::new();
    let mut last_y = 0.0;

    for px in (0..u32::MAX).map(f64::from).take_while(|px| *px < width) {
        let x = column_to_math_x(px, viewport, width);
        let Some(y) = evaluate_defined(evaluator, x) else {
            flush(&mut segments, &mut current);
            continue;
        };
        let sy = math_to_screen(Point::new(x, y), viewport, extent).y;
        if !current.is_empty() && (sy - last_y).abs() > height {
            flush(&mut segments, &mut current);
        }
        current.push(Point::new(px, sy));
        last_y = sy;
    }
    flush(&mut segments, &mut current);
    segments
}

fn flush(segments: &mut Vec<Segment>, current: &mut Segment) {
    if !current.is_empty() {
        segments.push(core::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use graphplane_eval::{EvalError, compile};
    use graphplane_view::Viewport;
    use kurbo::Size;

    use super::sample_function;

    const EXTENT: Size = Size::new(800.0, 600.0);

    #[test]
    fn reciprocal_splits_at_the_pole() {
        let f = compile("1/x").unwrap();
        let segments = sample_function(&f, Viewport::default(), EXTENT);
        assert!(segments.len() >= 2, "got {} segments", segments.len());
        // Column 400 is x = 0 exactly and must not be plotted.
        assert!(segments.iter().flatten().all(|p| p.x != 400.0));
    }

    #[test]
    fn parabola_is_one_full_width_segment() {
        // Scale 40 shows x in [-10, 10] on an 800 px canvas.
        let viewport = Viewport::new(0.0, 0.0, 40.0);
        let f = compile("x^2").unwrap();
        let segments = sample_function(&f, viewport, EXTENT);
        assert_eq!(segments.len(), 1);
        let segment = &segments[0];
        assert_eq!(segment.len(), 800);
        assert_eq!(segment[0].x, 0.0);
        assert_eq!(segment[799].x, 799.0);
        // x = 0 at column 400 lands on the vertical center.
        assert_eq!(segment[400].y, 300.0);
    }

    #[test]
    fn large_jumps_lift_the_pen() {
        let step = |x: f64| -> Result<f64, EvalError> { Ok(if x < 0.5 { 0.0 } else { 100.0 }) };
        let segments = sample_function(&step, Viewport::default(), EXTENT);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len() + segments[1].len(), 800);
    }

    #[test]
    fn small_jumps_are_bridged() {
        // 5 units at scale 50 is 250 px, under the 600 px threshold.
        let step = |x: f64| -> Result<f64, EvalError> { Ok(if x < 0.5 { 0.0 } else { 5.0 }) };
        let segments = sample_function(&step, Viewport::default(), EXTENT);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn undefined_everywhere_is_empty() {
        let f = compile("sqrt(x - 1000)").unwrap();
        assert!(sample_function(&f, Viewport::default(), EXTENT).is_empty());
    }

    #[test]
    fn fractional_width_samples_the_partial_column() {
        let f = compile("x").unwrap();
        let segments = sample_function(&f, Viewport::default(), Size::new(10.5, 10.0));
        assert_eq!(segments[0].len(), 11);
    }

    #[test]
    fn empty_extents_sample_nothing() {
        let f = compile("x").unwrap();
        for extent in [
            Size::new(0.0, 600.0),
            Size::new(800.0, 0.0),
            Size::new(-1.0, 600.0),
            Size::new(f64::INFINITY, 600.0),
        ] {
            assert!(sample_function(&f, Viewport::default(), extent).is_empty());
        }
    }
}
