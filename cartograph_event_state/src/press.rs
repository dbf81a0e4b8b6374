// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press session helper: track whether the surface is pressed and turn touch
//! samples into movement deltas.
//!
//! ## Usage
//!
//! 1) Open a session with [`PressSession::press_mouse`] or
//!    [`PressSession::press_touch`].
//! 2) For mouse moves, [`PressSession::mouse_movement`] passes the platform
//!    delta through only while pressed.
//! 3) For touch moves, [`PressSession::touch_sample`] records the first
//!    sample and returns deltas between consecutive samples afterwards.
//! 4) Close the session with [`PressSession::release`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use cartograph_event_state::press::PressSession;
//!
//! let mut press = PressSession::default();
//! press.press_touch(Point::new(10.0, 20.0));
//!
//! // The first move only primes the session.
//! assert_eq!(press.touch_sample(Point::new(12.0, 20.0)), None);
//! // Later moves report the delta from the previous sample.
//! assert_eq!(press.touch_sample(Point::new(15.0, 24.0)), Some(Vec2::new(3.0, 4.0)));
//!
//! press.release();
//! assert!(!press.is_pressed());
//! ```

use kurbo::{Point, Vec2};

/// Transient state between a press start and the matching press end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PressSession {
    /// Nothing is pressed.
    #[default]
    Released,
    /// A mouse button is held down.
    Mouse,
    /// A finger is on the surface.
    Touch {
        /// Where the touch began.
        start: Point,
        /// Last recorded touch sample, if any move has been seen.
        previous: Option<Point>,
    },
}

impl PressSession {
    /// Opens a mouse session, replacing any current session.
    pub fn press_mouse(&mut self) {
        *self = Self::Mouse;
    }

    /// Opens a touch session starting at `start`, replacing any current session.
    ///
    /// The start position is not a sample: the first subsequent
    /// [`touch_sample`](Self::touch_sample) still yields no delta.
    pub fn press_touch(&mut self, start: Point) {
        *self = Self::Touch {
            start,
            previous: None,
        };
    }

    /// Closes the current session and drops all tracking state.
    pub fn release(&mut self) {
        *self = Self::Released;
    }

    /// Returns `true` while any session is open.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        !matches!(self, Self::Released)
    }

    /// Returns the start position of an open touch session.
    #[must_use]
    pub fn touch_start(&self) -> Option<Point> {
        match self {
            Self::Touch { start, .. } => Some(*start),
            _ => None,
        }
    }

    /// Passes a platform movement delta through while pressed.
    #[must_use]
    pub fn mouse_movement(&self, movement: Vec2) -> Option<Vec2> {
        self.is_pressed().then_some(movement)
    }

    /// Feeds a touch sample, returning the delta since the previous sample.
    ///
    /// Returns `None` outside a touch session and for the first sample of a
    /// session, which is only recorded.
    pub fn touch_sample(&mut self, pos: Point) -> Option<Vec2> {
        match self {
            Self::Touch { previous, .. } => {
                let delta = (*previous).map(|prev| pos - prev);
                *previous = Some(pos);
                delta
            }
            _ => None,
        }
    }

    /// Returns the offset from the touch start position to `current`.
    #[must_use]
    pub fn total_touch_offset(&self, current: Point) -> Option<Vec2> {
        self.touch_start().map(|start| current - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_released() {
        let press = PressSession::default();
        assert!(!press.is_pressed());
        assert_eq!(press.touch_start(), None);
    }

    #[test]
    fn mouse_movement_passes_only_while_pressed() {
        let mut press = PressSession::default();
        let movement = Vec2::new(4.0, -2.0);
        assert_eq!(press.mouse_movement(movement), None);

        press.press_mouse();
        assert_eq!(press.mouse_movement(movement), Some(movement));

        press.release();
        assert_eq!(press.mouse_movement(movement), None);
    }

    #[test]
    fn first_touch_sample_is_recorded_without_delta() {
        let mut press = PressSession::default();
        press.press_touch(Point::new(10.0, 20.0));

        assert_eq!(press.touch_sample(Point::new(15.0, 25.0)), None);
        assert_eq!(
            press,
            PressSession::Touch {
                start: Point::new(10.0, 20.0),
                previous: Some(Point::new(15.0, 25.0)),
            }
        );
    }

    #[test]
    fn touch_samples_track_incremental_deltas() {
        let mut press = PressSession::default();
        press.press_touch(Point::ZERO);
        press.touch_sample(Point::new(0.0, 0.0));

        assert_eq!(
            press.touch_sample(Point::new(5.0, 3.0)),
            Some(Vec2::new(5.0, 3.0))
        );
        assert_eq!(
            press.touch_sample(Point::new(8.0, 7.0)),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(
            press.touch_sample(Point::new(6.0, 1.0)),
            Some(Vec2::new(-2.0, -6.0))
        );
    }

    #[test]
    fn touch_sample_outside_touch_session_is_ignored() {
        let mut press = PressSession::default();
        assert_eq!(press.touch_sample(Point::new(1.0, 1.0)), None);

        press.press_mouse();
        assert_eq!(press.touch_sample(Point::new(1.0, 1.0)), None);
        assert_eq!(press, PressSession::Mouse);
    }

    #[test]
    fn release_clears_touch_tracking() {
        let mut press = PressSession::default();
        press.press_touch(Point::new(1.0, 2.0));
        press.touch_sample(Point::new(3.0, 4.0));

        press.release();
        assert_eq!(press, PressSession::Released);

        // A new session starts without a prior sample.
        press.press_touch(Point::new(50.0, 50.0));
        assert_eq!(press.touch_sample(Point::new(60.0, 60.0)), None);
    }

    #[test]
    fn total_offset_is_measured_from_start() {
        let mut press = PressSession::default();
        press.press_touch(Point::new(10.0, 20.0));
        press.touch_sample(Point::new(15.0, 25.0));

        assert_eq!(
            press.total_touch_offset(Point::new(20.0, 35.0)),
            Some(Vec2::new(10.0, 15.0))
        );

        press.release();
        assert_eq!(press.total_touch_offset(Point::new(20.0, 35.0)), None);
    }

    #[test]
    fn release_on_fresh_state_is_safe() {
        let mut press = PressSession::default();
        press.release();
        assert!(!press.is_pressed());
    }
}
