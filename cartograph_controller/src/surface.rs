// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface abstraction and an in-memory recording implementation.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use peniko::color::Rgba8;

/// A fixed-pixel drawing target that can show a region of the map image.
///
/// Implementations own the decoded image (if any) and the underlying pixels.
/// The controller only issues commands; it never reads pixels back.
pub trait Surface {
    /// Current size in surface pixels.
    fn size(&self) -> Size;

    /// Changes the pixel size. Existing content may be discarded.
    fn resize(&mut self, size: Size);

    /// Clears the whole surface.
    fn clear(&mut self);

    /// Draws the `source` region of the map image scaled into `dest`.
    ///
    /// Does nothing if no image is attached.
    fn draw_image(&mut self, source: Rect, dest: Rect);

    /// Sets the single pixel whose top-left corner is `at`.
    fn fill_pixel(&mut self, at: Point, color: Color);
}

/// One command recorded by a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceOp {
    /// [`Surface::resize`].
    Resize(Size),
    /// [`Surface::clear`].
    Clear,
    /// [`Surface::draw_image`].
    DrawImage {
        /// Source region in image pixels.
        source: Rect,
        /// Destination region in surface pixels.
        dest: Rect,
    },
    /// [`Surface::fill_pixel`].
    FillPixel {
        /// Top-left corner of the pixel.
        at: Point,
        /// Fill color, quantized to 8 bits per channel.
        color: Rgba8,
    },
}

/// Headless [`Surface`] that records every command it receives.
///
/// Lets tests and benchmarks inspect what a controller would draw without a
/// real backend.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Size,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates a surface of the given size with an empty command log.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Recorded commands, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drains and returns the recorded commands.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.ops.push(SurfaceOp::Resize(size));
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn draw_image(&mut self, source: Rect, dest: Rect) {
        self.ops.push(SurfaceOp::DrawImage { source, dest });
    }

    fn fill_pixel(&mut self, at: Point, color: Color) {
        self.ops.push(SurfaceOp::FillPixel {
            at,
            color: color.to_rgba8(),
        });
    }
}
