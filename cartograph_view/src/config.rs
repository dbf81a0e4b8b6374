// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning constants for a [`crate::MapViewport`] and the input handlers
/// driving it.
///
/// The defaults reproduce the stock map widget: a 500 px tall source region at
/// zoom 1, zoom steps of `0.1` per wheel notch within `[1, 12]`, and a pan
/// multiplier of `1.5` for mouse movement.
///
/// ```rust
/// use cartograph_view::ViewConfig;
///
/// let config = ViewConfig::default().with_zoom_limits(12.0, 2.0);
/// assert_eq!(config.min_zoom, 2.0);
/// assert_eq!(config.max_zoom, 12.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Height of the visible source region at zoom `1.0`, in source pixels.
    pub base_size: f64,
    /// Zoom change applied per wheel notch.
    pub zoom_step: f64,
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// Zoom used at construction and after every surface resize.
    pub initial_zoom: f64,
    /// Multiplier applied to mouse movement deltas before panning.
    pub pan_speed: f64,
    /// Additional factor applied on top of `pan_speed` for touch deltas.
    pub touch_pan_scale: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            base_size: 500.0,
            zoom_step: 0.1,
            min_zoom: 1.0,
            max_zoom: 12.0,
            initial_zoom: 3.0,
            pan_speed: 1.5,
            touch_pan_scale: 0.1,
        }
    }
}

impl ViewConfig {
    /// Returns a copy with new zoom limits.
    ///
    /// Reversed limits are swapped so that `min_zoom <= max_zoom`, and the
    /// initial zoom is pulled into the new range.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.normalized()
    }

    /// Returns a copy with a new initial zoom, clamped into the zoom limits.
    #[must_use]
    pub fn with_initial_zoom(mut self, zoom: f64) -> Self {
        self.initial_zoom = zoom;
        self.normalized()
    }

    /// Returns a copy with new pan multipliers for mouse and touch input.
    #[must_use]
    pub fn with_pan_speed(mut self, pan_speed: f64, touch_pan_scale: f64) -> Self {
        self.pan_speed = pan_speed;
        self.touch_pan_scale = touch_pan_scale;
        self
    }

    /// Returns a copy whose zoom limits are ordered and whose initial zoom
    /// lies inside them.
    ///
    /// A non-finite limit is replaced by the default limit on that side, and
    /// a NaN initial zoom by the default initial zoom.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !self.min_zoom.is_finite() {
            self.min_zoom = defaults.min_zoom;
        }
        if !self.max_zoom.is_finite() {
            self.max_zoom = defaults.max_zoom;
        }
        if self.initial_zoom.is_nan() {
            self.initial_zoom = defaults.initial_zoom;
        }
        if self.min_zoom > self.max_zoom {
            core::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        self.initial_zoom = self.initial_zoom.clamp(self.min_zoom, self.max_zoom);
        self
    }
}

/// Direction of a single zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomStep {
    /// Grow the zoom factor (scroll down).
    In,
    /// Shrink the zoom factor (scroll up).
    Out,
}

impl ZoomStep {
    /// Classifies a vertical wheel delta.
    ///
    /// Positive deltas (scrolling down) map to [`ZoomStep::In`], negative ones
    /// to [`ZoomStep::Out`]. A zero delta carries no direction.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::In)
        } else if delta_y < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}
