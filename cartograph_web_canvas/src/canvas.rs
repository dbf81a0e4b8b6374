// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cartograph_controller::{SetupError, Surface};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::color::color_to_css;
use crate::error::MountError;

#[allow(
    clippy::cast_possible_truncation,
    reason = "Canvas dimensions are whole CSS pixels; fractional window sizes are truncated."
)]
fn to_canvas_px(v: f64) -> u32 {
    v.max(0.0) as u32
}

/// [`Surface`] backed by an `HtmlCanvasElement` and its 2D context.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: Option<HtmlImageElement>,
}

impl CanvasSurface {
    /// Acquires the 2D context of `canvas`.
    ///
    /// Fails with [`SetupError::MissingContext`] if the canvas cannot provide
    /// one (for example because it already has a WebGL context).
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, MountError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SetupError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::MissingContext)?;
        Ok(Self {
            canvas,
            ctx,
            image: None,
        })
    }

    /// Attaches the image element that [`Surface::draw_image`] blits from.
    pub fn attach_image(&mut self, image: HtmlImageElement) {
        self.image = Some(image);
    }

    /// The underlying canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// The attached image element, if any.
    #[must_use]
    pub fn image(&self) -> Option<&HtmlImageElement> {
        self.image.as_ref()
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    fn resize(&mut self, size: Size) {
        self.canvas.set_height(to_canvas_px(size.height));
        self.canvas.set_width(to_canvas_px(size.width));
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn draw_image(&mut self, source: Rect, dest: Rect) {
        let Some(image) = &self.image else {
            return;
        };
        let result = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                source.x0,
                source.y0,
                source.width(),
                source.height(),
                dest.x0,
                dest.y0,
                dest.width(),
                dest.height(),
            );
        if let Err(err) = result {
            log::warn!("drawImage failed: {err:?}");
        }
    }

    fn fill_pixel(&mut self, at: Point, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx.fill_rect(at.x, at.y, 1.0, 1.0);
    }
}
