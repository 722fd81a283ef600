// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Graphplane demos.

use graphplane_eval::CompiledFunction;
use graphplane_imaging_svg::SvgBackend;
use graphplane_render::{RenderStyle, Theme, render_frame_with_style};
use graphplane_view::Viewport;
use kurbo::Size;

/// Installs `env_logger`, defaulting to `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Renders one frame into a standalone SVG document.
pub fn plot_to_svg(
    functions: &[CompiledFunction],
    viewport: Viewport,
    width: u32,
    height: u32,
    theme: &Theme,
) -> String {
    let mut backend = SvgBackend::new();
    let extent = Size::new(f64::from(width), f64::from(height));
    render_frame_with_style(
        &mut backend,
        functions,
        viewport,
        extent,
        theme,
        &RenderStyle::DEFAULT,
    );
    log::info!(
        "rendered {} SVG elements at scale {}",
        backend.element_count(),
        viewport.scale()
    );
    backend.to_svg(width, height)
}
