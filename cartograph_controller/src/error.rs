// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Unrecoverable failure while setting up a map view.
///
/// Setup errors are never retried: the caller is expected to abandon the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The drawing surface could not provide a 2D drawing context.
    MissingContext,
    /// The source image is wider than it is tall.
    ImageTooWide {
        /// Natural width of the rejected image.
        width: u32,
        /// Natural height of the rejected image.
        height: u32,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContext => f.write_str("drawing surface has no 2d context"),
            Self::ImageTooWide { width, height } => write!(
                f,
                "map image height {height} is less than its width {width}"
            ),
        }
    }
}

impl core::error::Error for SetupError {}
