// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::error::SetupError;

/// Natural dimensions of a loaded map image.
///
/// The pixels stay with the backend that decoded the image; the controller
/// only needs the size. Construction rejects images whose height is less than
/// their width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
}

impl SourceImage {
    /// Validates natural image dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, SetupError> {
        if height < width {
            return Err(SetupError::ImageTooWide { width, height });
        }
        Ok(Self { width, height })
    }

    /// Natural width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Natural size as a floating-point [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}
