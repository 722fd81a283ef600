// Copyright 2025 the Graphplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot expressions to an SVG document on stdout.
//!
//! Each argument is one expression in `x`; `--dark` switches the theme.
//! Expressions that do not compile are reported and left out of the plot.
//!
//! Examples:
//!   `cargo run -p graphplane_demos --example plot_svg > plot.svg`
//!   `cargo run -p graphplane_demos --example plot_svg -- "x^2" "1/x" --dark > plot.svg`

use std::env;

use graphplane_demos::{init_logging, plot_to_svg};
use graphplane_eval::FunctionList;
use graphplane_render::Theme;
use graphplane_view::Viewport;

const DEFAULT_EXPRESSIONS: [&str; 3] = ["sin(x)", "x^2 / 4 - 2", "1/x"];

fn main() {
    init_logging();

    let mut theme = Theme::LIGHT;
    let mut list = FunctionList::new();
    for arg in env::args().skip(1) {
        if arg == "--dark" {
            theme = Theme::DARK;
        } else {
            list.add(&arg);
        }
    }
    if list.is_empty() {
        for text in DEFAULT_EXPRESSIONS {
            list.add(text);
        }
    }

    for function in list.iter() {
        if let Some(err) = function.error() {
            log::warn!("skipping {:?}: {err}", function.expression());
        }
    }

    let svg = plot_to_svg(&list.compiled(), Viewport::default(), 800, 600, &theme);
    println!("{svg}");
}
