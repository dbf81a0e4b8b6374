// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cartograph_web_canvas --heading-base-level=0

//! Web Canvas (2D) backend for the Cartograph map viewer.
//!
//! On `wasm32` this crate provides:
//! - `CanvasSurface`: a [`cartograph_controller::Surface`] drawing through
//!   `web_sys::CanvasRenderingContext2d`.
//! - `MapView`: a mounted viewer that registers wheel, mouse, touch and window
//!   resize listeners, translates them into
//!   [`cartograph_event_state::event::InputEvent`]s and schedules redraws with
//!   `requestAnimationFrame`.
//! - `mount`: the bootstrap that looks up a canvas by id and loads an image URL
//!   into it. It is also exported to JavaScript as `mount`, and the returned
//!   view exposes `drawPoint(x, y, cssColor)`.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn start() -> Result<cartograph_web_canvas::MapView, cartograph_web_canvas::MountError> {
//!     cartograph_web_canvas::mount("visualMap", "/visualmap.png")
//! }
//! ```
//!
//! Notes:
//! - Many redraw requests within one frame result in a single
//!   `requestAnimationFrame` callback.
//! - A map image wider than it is tall is rejected when it loads; the error
//!   is reported through the `log` facade and nothing is drawn.
//! - Dropping the `MapView` removes every listener it added and cancels a
//!   pending `requestAnimationFrame` callback.
//!
//! The color helpers and [`MountError`] are available on every target.

#![cfg_attr(
    target_arch = "wasm32",
    allow(unsafe_code, reason = "`#[wasm_bindgen]` exports expand to unsafe glue code.")
)]

mod color;
mod error;
mod frame;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod view;

pub use color::{color_to_css, parse_css_color};
pub use error::MountError;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use view::{MapView, mount, mount_js};
