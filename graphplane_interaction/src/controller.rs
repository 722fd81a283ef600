// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan and zoom gestures over a [`Viewport`].

use graphplane_view::{Viewport, clamp_scale, screen_to_math};
use kurbo::{Point, Size, Vec2};

use crate::drag::DragState;

/// Zoom factors applied per wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Scale multiplier for a scroll toward the content (negative delta).
    pub zoom_in_factor: f64,
    /// Scale multiplier for a scroll away from the content (positive delta).
    pub zoom_out_factor: f64,
}

impl InteractionConfig {
    /// `1.1` in, `0.9` out.
    pub const DEFAULT: Self = Self {
        zoom_in_factor: 1.1,
        zoom_out_factor: 0.9,
    };
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pointer input relevant to the plot surface, in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down(Point),
    /// Pointer moved.
    Move(Point),
    /// Primary button released.
    Up,
    /// Pointer left the plot surface.
    Leave,
    /// Wheel or trackpad scroll. Positive `delta` zooms out.
    Wheel {
        /// Vertical scroll delta.
        delta: f64,
        /// Pointer position at the time of the scroll.
        position: Point,
    },
}

/// Shifts the viewport by a screen-space drag `delta`.
///
/// Dragging right moves the content right, so the center moves left in math
/// space; screen Y runs opposite to math Y, so a downward drag raises the
/// center.
#[must_use]
pub fn pan_by(viewport: Viewport, delta: Vec2) -> Viewport {
    let scale = viewport.scale();
    viewport.with_center(Point::new(
        viewport.center_x() - delta.x / scale,
        viewport.center_y() + delta.y / scale,
    ))
}

/// Multiplies the scale by `factor` while keeping the math point under
/// `anchor` fixed on screen.
///
/// The new scale is clamped into the viewport's scale limits. A non-positive
/// or non-finite factor returns the viewport unchanged.
#[must_use]
pub fn zoom_at(viewport: Viewport, anchor: Point, extent: Size, factor: f64) -> Viewport {
    if !(factor > 0.0 && factor.is_finite()) {
        return viewport;
    }
    let math = screen_to_math(anchor, viewport, extent);
    let new_scale = clamp_scale(viewport.scale() * factor);
    Viewport::new(
        math.x - (anchor.x - extent.width / 2.0) / new_scale,
        math.y + (anchor.y - extent.height / 2.0) / new_scale,
        new_scale,
    )
}

/// Turns pointer gestures into new [`Viewport`] values.
///
/// The controller never holds the viewport itself. Every handler takes the
/// host's current viewport and returns its replacement, which the host stores
/// and renders.
///
/// Panning is a small state machine (`Idle → Dragging → Idle`); zooming is
/// stateless per wheel event and keeps the point under the cursor fixed.
#[derive(Clone, Debug, Default)]
pub struct PanZoomController {
    drag: DragState,
    config: InteractionConfig,
}

impl PanZoomController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            drag: DragState::default(),
            config,
        }
    }

    /// Returns the zoom configuration.
    #[must_use]
    pub fn config(&self) -> InteractionConfig {
        self.config
    }

    /// Returns `true` between [`pan_start`](Self::pan_start) and
    /// [`pan_end`](Self::pan_end).
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Begins a pan at pointer position `pos`.
    pub fn pan_start(&mut self, pos: Point) {
        self.drag.start(pos);
    }

    /// Continues a pan. Returns the panned viewport, or `None` while idle.
    pub fn pan_move(&mut self, pos: Point, viewport: Viewport) -> Option<Viewport> {
        let delta = self.drag.update(pos)?;
        let next = pan_by(viewport, delta);
        log::trace!(
            "pan by ({}, {}) px to center ({}, {})",
            delta.x,
            delta.y,
            next.center_x(),
            next.center_y()
        );
        Some(next)
    }

    /// Ends the current pan, if any.
    pub fn pan_end(&mut self) {
        self.drag.end();
    }

    /// Applies one wheel event at `pointer`.
    ///
    /// Positive `scroll_delta` zooms out by
    /// [`zoom_out_factor`](InteractionConfig::zoom_out_factor), negative zooms
    /// in. A zero or non-finite delta, such as the vertical part of a purely
    /// horizontal scroll, carries no direction and returns the viewport
    /// unchanged rather than zooming in.
    #[must_use]
    pub fn zoom(
        &self,
        viewport: Viewport,
        scroll_delta: f64,
        pointer: Point,
        extent: Size,
    ) -> Viewport {
        let factor = if scroll_delta > 0.0 {
            self.config.zoom_out_factor
        } else if scroll_delta < 0.0 {
            self.config.zoom_in_factor
        } else {
            return viewport;
        };
        let next = zoom_at(viewport, pointer, extent, factor);
        log::trace!(
            "zoom x{factor} at ({}, {}) px: scale {} -> {}",
            pointer.x,
            pointer.y,
            viewport.scale(),
            next.scale()
        );
        next
    }

    /// Dispatches a pointer event.
    ///
    /// Returns the replacement viewport when the event changes the view.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        viewport: Viewport,
        extent: Size,
    ) -> Option<Viewport> {
        match event {
            PointerEvent::Down(pos) => {
                self.pan_start(pos);
                None
            }
            PointerEvent::Move(pos) => self.pan_move(pos, viewport),
            PointerEvent::Up | PointerEvent::Leave => {
                self.pan_end();
                None
            }
            PointerEvent::Wheel { delta, position } => {
                let next = self.zoom(viewport, delta, position, extent);
                (next != viewport).then_some(next)
            }
        }
    }

    /// Abandons any gesture and returns a fresh default viewport.
    pub fn reset(&mut self) -> Viewport {
        self.drag.end();
        Viewport::default()
    }
}

#[cfg(test)]
mod tests {
    use graphplane_view::{MAX_SCALE, MIN_SCALE, Viewport, math_to_screen, screen_to_math};
    use kurbo::{Point, Size, Vec2};

    use super::{InteractionConfig, PanZoomController, PointerEvent, pan_by, zoom_at};

    const EXTENT: Size = Size::new(800.0, 600.0);

    #[test]
    fn horizontal_drag_moves_center_by_delta_over_scale() {
        let mut ctl = PanZoomController::default();
        let vp = Viewport::new(0.0, 0.0, 50.0);

        ctl.pan_start(Point::new(200.0, 200.0));
        let next = ctl.pan_move(Point::new(300.0, 200.0), vp).unwrap();

        assert_eq!(next.center_x(), -2.0);
        assert_eq!(next.center_y(), 0.0);
        assert_eq!(next.scale(), 50.0);
    }

    #[test]
    fn downward_drag_raises_center() {
        let next = pan_by(Viewport::new(1.0, 1.0, 10.0), Vec2::new(0.0, 20.0));
        assert_eq!(next.center_y(), 3.0);
    }

    #[test]
    fn pan_deltas_are_measured_from_last_move() {
        let mut ctl = PanZoomController::default();
        let mut vp = Viewport::new(0.0, 0.0, 10.0);

        ctl.pan_start(Point::new(0.0, 0.0));
        vp = ctl.pan_move(Point::new(10.0, 0.0), vp).unwrap();
        vp = ctl.pan_move(Point::new(30.0, 0.0), vp).unwrap();

        assert!((vp.center_x() - -3.0).abs() < 1e-12);
    }

    #[test]
    fn moves_while_idle_do_nothing() {
        let mut ctl = PanZoomController::default();
        let vp = Viewport::default();

        assert!(ctl.pan_move(Point::new(5.0, 5.0), vp).is_none());

        ctl.pan_start(Point::new(0.0, 0.0));
        ctl.pan_end();
        assert!(!ctl.is_panning());
        assert!(ctl.pan_move(Point::new(5.0, 5.0), vp).is_none());
    }

    #[test]
    fn zoom_keeps_math_point_under_cursor() {
        let ctl = PanZoomController::default();
        let vp = Viewport::new(0.0, 0.0, 50.0);
        let anchor = math_to_screen(Point::new(2.0, 3.0), vp, EXTENT);

        let zoomed = ctl.zoom(vp, -1.0, anchor, EXTENT);
        assert!(zoomed.scale() > vp.scale());

        let under_cursor = screen_to_math(anchor, zoomed, EXTENT);
        assert!((under_cursor.x - 2.0).abs() < 1e-9);
        assert!((under_cursor.y - 3.0).abs() < 1e-9);
    }

    #[test]
    fn positive_delta_zooms_out() {
        let ctl = PanZoomController::default();
        let vp = Viewport::new(0.0, 0.0, 50.0);
        let out = ctl.zoom(vp, 120.0, Point::new(400.0, 300.0), EXTENT);
        assert!((out.scale() - 45.0).abs() < 1e-9);
        let inn = ctl.zoom(vp, -120.0, Point::new(400.0, 300.0), EXTENT);
        assert!((inn.scale() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut ctl = PanZoomController::default();
        let vp = Viewport::default();
        let wheel = PointerEvent::Wheel {
            delta: 0.0,
            position: Point::new(10.0, 10.0),
        };
        assert_eq!(ctl.handle(wheel, vp, EXTENT), None);
        for delta in [0.0, -0.0, f64::NAN] {
            assert_eq!(ctl.zoom(vp, delta, Point::new(10.0, 10.0), EXTENT), vp);
        }
    }

    #[test]
    fn repeated_zoom_respects_scale_limits() {
        let ctl = PanZoomController::default();
        let pointer = Point::new(123.0, 456.0);

        let mut vp = Viewport::default();
        for _ in 0..500 {
            vp = ctl.zoom(vp, 1.0, pointer, EXTENT);
            assert!(vp.scale() >= MIN_SCALE);
        }
        assert_eq!(vp.scale(), MIN_SCALE);

        for _ in 0..500 {
            vp = ctl.zoom(vp, -1.0, pointer, EXTENT);
            assert!(vp.scale() <= MAX_SCALE);
        }
        assert_eq!(vp.scale(), MAX_SCALE);
    }

    #[test]
    fn zoom_at_rejects_bad_factors() {
        let vp = Viewport::new(1.0, 2.0, 30.0);
        assert_eq!(zoom_at(vp, Point::ZERO, EXTENT, 0.0), vp);
        assert_eq!(zoom_at(vp, Point::ZERO, EXTENT, -2.0), vp);
        assert_eq!(zoom_at(vp, Point::ZERO, EXTENT, f64::NAN), vp);
    }

    #[test]
    fn event_dispatch_drives_both_gestures() {
        let mut ctl = PanZoomController::new(InteractionConfig::DEFAULT);
        let mut vp = Viewport::new(0.0, 0.0, 50.0);

        assert_eq!(ctl.handle(PointerEvent::Down(Point::new(0.0, 0.0)), vp, EXTENT), None);
        vp = ctl
            .handle(PointerEvent::Move(Point::new(50.0, 0.0)), vp, EXTENT)
            .unwrap();
        assert_eq!(vp.center_x(), -1.0);

        assert_eq!(ctl.handle(PointerEvent::Leave, vp, EXTENT), None);
        assert!(!ctl.is_panning());
        assert_eq!(ctl.handle(PointerEvent::Move(Point::new(90.0, 0.0)), vp, EXTENT), None);

        let wheel = PointerEvent::Wheel {
            delta: 3.0,
            position: Point::new(400.0, 300.0),
        };
        let zoomed = ctl.handle(wheel, vp, EXTENT).unwrap();
        assert!(zoomed.scale() < vp.scale());
    }

    #[test]
    fn reset_ends_drag_and_restores_default() {
        let mut ctl = PanZoomController::default();
        ctl.pan_start(Point::new(1.0, 1.0));

        assert_eq!(ctl.reset(), Viewport::default());
        assert!(!ctl.is_panning());
    }
}
