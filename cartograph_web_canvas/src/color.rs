// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::{Srgb, parse_color};

/// Parses any CSS color string (`"red"`, `"#ff8800"`, `"rgb(0 0 0 / 50%)"`,
/// ...) into an sRGB color.
#[must_use]
pub fn parse_css_color(css: &str) -> Option<Color> {
    parse_color(css)
        .ok()
        .map(|color| color.to_alpha_color::<Srgb>())
}

/// Formats a color for canvas `fillStyle`.
#[must_use]
pub fn color_to_css(color: Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}
