// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cartograph_event_state --heading-base-level=0

//! Cartograph Event State: input vocabulary and interaction state for the map
//! viewer.
//!
//! - [`event`]: [`event::InputEvent`], a platform-neutral description of wheel,
//!   mouse, touch and resize input, and its [`event::EventKind`] key.
//! - [`press`]: [`press::PressSession`], the transient state between a press
//!   start and a press end, including touch sample tracking.
//! - [`dispatch`]: [`dispatch::HandlerTable`], an explicit table routing each
//!   event kind to one handler over caller-owned state.
//!
//! Platform backends translate their native events into
//! [`event::InputEvent`]s and feed them through a handler table; nothing in
//! this crate knows about the DOM or any windowing system.
//!
//! ## Touch sessions
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use cartograph_event_state::press::PressSession;
//!
//! let mut press = PressSession::default();
//! press.press_touch(Point::new(0.0, 0.0));
//! assert_eq!(press.touch_sample(Point::new(4.0, 4.0)), None);
//! assert_eq!(press.touch_sample(Point::new(6.0, 1.0)), Some(Vec2::new(2.0, -3.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod dispatch;
pub mod event;
pub mod press;
