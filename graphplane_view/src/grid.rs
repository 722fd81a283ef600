// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid spacing on the 1‑2‑5 ladder.

/// Desired distance between adjacent grid lines, in screen pixels.
pub const TARGET_PIXEL_SPACING: f64 = 80.0;

/// Rounds `rough` up to the next "nice" number on the 1‑2‑5‑10 ladder.
///
/// The result is `m × 10^n` with `m ∈ {1, 2, 5}` (a `10` rolls over to the next
/// decade) and is never smaller than `rough` within rounding.
///
/// `rough` is expected to be positive and finite. Anything else returns `1.0`
/// so that callers always receive a usable spacing.
#[must_use]
pub fn nice_step(rough: f64) -> f64 {
    if !(rough > 0.0 && rough.is_finite()) {
        return 1.0;
    }
    let magnitude = libm::pow(10.0, libm::floor(libm::log10(rough)));
    let residual = rough / magnitude;
    if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Grid spacing in math units for a viewport at `scale` pixels per unit.
///
/// Keeps lines about [`TARGET_PIXEL_SPACING`] pixels apart; the spacing only
/// changes when the zoom crosses a ladder step, so the grid does not jitter
/// during continuous zooming.
#[must_use]
pub fn grid_spacing(scale: f64) -> f64 {
    nice_step(TARGET_PIXEL_SPACING / scale)
}

/// Returns every multiple of `spacing` from `floor(min / spacing) * spacing`
/// up to and including `max`.
///
/// Values are computed as `k * spacing` rather than by repeated addition, so
/// lines far from the origin carry no accumulated error. A non-positive or
/// non-finite spacing, or non-finite bounds, yields nothing. So does a range
/// whose line indices exceed [`MAX_LINE_INDEX`] in magnitude, where adjacent
/// multiples of `spacing` are no longer distinct.
#[must_use]
pub fn grid_lines(min: f64, max: f64, spacing: f64) -> GridLines {
    if !(spacing > 0.0 && spacing.is_finite() && min.is_finite() && max.is_finite()) {
        return GridLines::EMPTY;
    }
    let (first, last) = (libm::floor(min / spacing), libm::floor(max / spacing));
    let limit = MAX_LINE_INDEX as f64;
    if !(first.abs() <= limit && last.abs() <= limit) {
        return GridLines::EMPTY;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "both indices were checked against MAX_LINE_INDEX"
    )]
    let (first, last) = (first as i64, last as i64);
    GridLines {
        next: first,
        last,
        spacing,
    }
}

/// Largest grid line index [`grid_lines`] yields, `2^53`.
///
/// Every integer up to here is exact in an `f64`.
pub const MAX_LINE_INDEX: i64 = 1 << 53;

/// Iterator over grid line positions, see [`grid_lines`].
#[derive(Clone, Debug)]
pub struct GridLines {
    next: i64,
    last: i64,
    spacing: f64,
}

impl GridLines {
    const EMPTY: Self = Self {
        next: 1,
        last: 0,
        spacing: 1.0,
    };
}

impl Iterator for GridLines {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > self.last {
            return None;
        }
        let k = self.next;
        match k.checked_add(1) {
            Some(next) => self.next = next,
            None => self.last = k - 1,
        }
        Some(k as f64 * self.spacing)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.last.saturating_sub(self.next).saturating_add(1)).unwrap_or(0);
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridLines {}
