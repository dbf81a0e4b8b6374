// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cartograph_view --heading-base-level=0

//! Cartograph View: a headless pan/zoom viewport over a fixed-size image.
//!
//! This crate models the visible region of a large source image (a map)
//! drawn onto a smaller drawing surface. It focuses on:
//! - Zoom state with hard lower/upper limits.
//! - A pan offset in source-image pixels, saturated to the image bounds.
//! - The source rectangle to blit for the current frame.
//! - Coordinate conversion between source-image and surface pixels.
//!
//! It does **not** own pixels, images or any rendering backend. Callers are
//! expected to:
//! - Translate their platform input into zoom steps and pan deltas.
//! - Blit [`MapViewport::visible_source_rect`] of their image onto
//!   [`MapViewport::surface_rect`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use cartograph_view::{MapViewport, ViewConfig, ZoomStep};
//!
//! // 500x500 surface over a 1000x1000 map.
//! let mut view = MapViewport::new(ViewConfig::default(), Size::new(500.0, 500.0));
//! view.set_image_size(Some(Size::new(1000.0, 1000.0)));
//!
//! // One notch of scrolling down grows the zoom by the configured step.
//! view.step_zoom(ZoomStep::In);
//! assert!((view.zoom() - 3.1).abs() < 1e-9);
//!
//! // Pan requests saturate instead of failing.
//! view.pan_to(Point::new(-50.0, 10.0));
//! assert_eq!(view.pan(), Point::new(0.0, 10.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom scales the *source* region: a larger zoom selects a larger region
//!   of the image, shown at a smaller scale.
//! - The surface aspect ratio is applied to the source rectangle's width; its
//!   height is always `zoom * base_size`.
//! - Pan bounds are computed from the surface size, not from the zoomed
//!   source rectangle.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod viewport;

pub use config::{ViewConfig, ZoomStep};
pub use viewport::{MapViewport, MapViewportDebugInfo};
