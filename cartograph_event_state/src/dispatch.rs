// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler table: route each [`InputEvent`] to the handler registered for
//! its [`EventKind`].
//!
//! There is at most one handler per kind. Handlers are plain function
//! pointers over a caller-owned state type, so the table is `Copy` and
//! dispatch involves no allocation or hidden control flow.
//!
//! ## Minimal example
//!
//! ```
//! use cartograph_event_state::dispatch::{HandlerTable, Response};
//! use cartograph_event_state::event::{EventKind, InputEvent};
//!
//! #[derive(Default)]
//! struct Counter { wheel: u32 }
//!
//! fn on_wheel(state: &mut Counter, _event: &InputEvent) -> Response {
//!     state.wheel += 1;
//!     Response::Redraw
//! }
//!
//! let mut table = HandlerTable::new();
//! table.register(EventKind::Wheel, on_wheel);
//!
//! let mut state = Counter::default();
//! assert_eq!(table.dispatch(&mut state, &InputEvent::Wheel { delta_y: 1.0 }), Response::Redraw);
//! assert_eq!(table.dispatch(&mut state, &InputEvent::TouchEnd), Response::Ignored);
//! assert_eq!(state.wheel, 1);
//! ```

use core::fmt;

use crate::event::{EventKind, InputEvent};

/// What the caller should do after an event was dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Response {
    /// No handler was registered, or the handler chose not to act.
    #[default]
    Ignored,
    /// State changed (or a session opened/closed) but nothing visible moved.
    Handled,
    /// Visible state changed; schedule a redraw.
    Redraw,
}

impl Response {
    /// Returns `true` if a redraw should be scheduled.
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        self == Self::Redraw
    }
}

/// Signature of an event handler over state `S`.
pub type Handler<S> = fn(&mut S, &InputEvent) -> Response;

/// Table mapping each [`EventKind`] to at most one [`Handler`].
pub struct HandlerTable<S> {
    slots: [Option<Handler<S>>; EventKind::COUNT],
}

impl<S> HandlerTable<S> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [None; EventKind::COUNT],
        }
    }

    /// Registers `handler` for `kind`, returning the handler it replaces.
    pub fn register(&mut self, kind: EventKind, handler: Handler<S>) -> Option<Handler<S>> {
        self.slots[kind.index()].replace(handler)
    }

    /// Returns the handler registered for `kind`.
    #[must_use]
    pub fn get(&self, kind: EventKind) -> Option<Handler<S>> {
        self.slots[kind.index()]
    }

    /// Returns `true` if a handler is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: EventKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Runs the handler registered for the event's kind.
    ///
    /// Returns [`Response::Ignored`] if no handler is registered.
    pub fn dispatch(&self, state: &mut S, event: &InputEvent) -> Response {
        match self.get(event.kind()) {
            Some(handler) => handler(state, event),
            None => Response::Ignored,
        }
    }
}

impl<S> Default for HandlerTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for HandlerTable<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for HandlerTable<S> {}

impl<S> fmt::Debug for HandlerTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for kind in EventKind::ALL {
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}
