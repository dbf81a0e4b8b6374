// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral input events understood by the map controller.

use kurbo::{Point, Size, Vec2};

/// One input event, already translated out of the platform's event types.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel or trackpad scroll. Positive `delta_y` means scrolling down.
    Wheel {
        /// Vertical scroll amount.
        delta_y: f64,
    },
    /// Mouse button pressed over the surface.
    PointerDown {
        /// Pointer position in surface coordinates.
        position: Point,
    },
    /// Mouse button released.
    PointerUp,
    /// Mouse moved; `movement` is the platform-reported delta since the last
    /// move event.
    PointerMove {
        /// Movement since the previous move event, in surface pixels.
        movement: Vec2,
    },
    /// A finger touched the surface.
    TouchStart {
        /// Position of the first changed touch.
        position: Point,
    },
    /// A touching finger moved.
    TouchMove {
        /// Position of the last changed touch.
        position: Point,
    },
    /// All fingers left the surface (or the touch was cancelled).
    TouchEnd,
    /// The hosting window changed size.
    Resize {
        /// New surface size, normally the window's inner size.
        size: Size,
    },
}

impl InputEvent {
    /// Returns the kind used to look up a handler for this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Wheel { .. } => EventKind::Wheel,
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerUp => EventKind::PointerUp,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::TouchStart { .. } => EventKind::TouchStart,
            Self::TouchMove { .. } => EventKind::TouchMove,
            Self::TouchEnd => EventKind::TouchEnd,
            Self::Resize { .. } => EventKind::Resize,
        }
    }
}

/// Discriminant of an [`InputEvent`], used as the handler table key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`InputEvent::Wheel`].
    Wheel,
    /// [`InputEvent::PointerDown`].
    PointerDown,
    /// [`InputEvent::PointerUp`].
    PointerUp,
    /// [`InputEvent::PointerMove`].
    PointerMove,
    /// [`InputEvent::TouchStart`].
    TouchStart,
    /// [`InputEvent::TouchMove`].
    TouchMove,
    /// [`InputEvent::TouchEnd`].
    TouchEnd,
    /// [`InputEvent::Resize`].
    Resize,
}

impl EventKind {
    /// Number of event kinds.
    pub const COUNT: usize = 8;

    /// Every event kind, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Wheel,
        Self::PointerDown,
        Self::PointerUp,
        Self::PointerMove,
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::Resize,
    ];

    /// Position of this kind in [`EventKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name of the DOM event this kind is normally produced from.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::Wheel => "wheel",
            Self::PointerDown => "mousedown",
            Self::PointerUp => "mouseup",
            Self::PointerMove => "mousemove",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::Resize => "resize",
        }
    }
}
