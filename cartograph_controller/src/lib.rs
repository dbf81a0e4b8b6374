// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cartograph_controller --heading-base-level=0

//! Cartograph Controller: the pan/zoom map widget, minus the platform.
//!
//! [`MapController`] ties together a [`cartograph_view::MapViewport`], a
//! [`cartograph_event_state::press::PressSession`] and a [`Surface`]. It
//! consumes [`InputEvent`]s through an explicit handler table and answers with
//! a [`Response`] telling the caller whether to schedule a redraw. Rendering
//! is a separate step so that a backend can coalesce many redraw requests into
//! one frame.
//!
//! ## Event handling
//!
//! | Event | Effect |
//! |-------|--------|
//! | `Wheel` | One zoom step per event (down grows zoom), clamped; redraw. |
//! | `PointerDown` / `TouchStart` | Open a press session. |
//! | `PointerUp` / `TouchEnd` | Close the press session. |
//! | `PointerMove` | While pressed, pan against the movement times `pan_speed`; redraw. |
//! | `TouchMove` | First move records a sample; later moves pan against the sample delta times `pan_speed * touch_pan_scale`; redraw. |
//! | `Resize` | Reset zoom and pan, resize the surface; redraw. |
//!
//! ## Minimal example
//!
//! ```rust
//! use cartograph_controller::{MapController, RecordingSurface, SurfaceOp};
//! use cartograph_event_state::event::InputEvent;
//! use cartograph_view::ViewConfig;
//! use kurbo::{Rect, Size};
//!
//! let surface = RecordingSurface::new(Size::new(500.0, 500.0));
//! let mut map = MapController::new(surface, ViewConfig::default());
//! map.set_image(1000, 1000).unwrap();
//!
//! if map.handle(&InputEvent::Wheel { delta_y: 100.0 }).needs_redraw() {
//!     map.render();
//! }
//! let ops = map.surface().ops();
//! assert_eq!(ops[0], SurfaceOp::Clear);
//! assert!(matches!(
//!     ops[1],
//!     SurfaceOp::DrawImage { dest, .. } if dest == Rect::new(0.0, 0.0, 500.0, 500.0)
//! ));
//! ```
//!
//! ## Errors
//!
//! [`SetupError`] covers the two fatal setup conditions: a surface without a
//! drawing context and a map image that is wider than it is tall.
//!
//! Diagnostics go through the `log` facade; this crate never installs a
//! logger.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod controller;
mod error;
mod image;
mod surface;

pub use controller::MapController;
pub use error::SetupError;
pub use image::SourceImage;
pub use surface::{RecordingSurface, Surface, SurfaceOp};

pub use cartograph_event_state::dispatch::Response;
pub use cartograph_event_state::event::{EventKind, InputEvent};
