// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{ViewConfig, ZoomStep};

/// Pan/zoom viewport over a fixed-size source image.
///
/// `MapViewport` tracks the drawing surface size, the (optional) natural size
/// of the source image, a zoom factor and a pan offset. The pan offset is the
/// top-left corner of the visible region in source-image pixels.
///
/// Two invariants hold after every mutation:
/// - `zoom` lies in `[config.min_zoom, config.max_zoom]`.
/// - `pan.x` lies in `[0, max(0, image.width - surface.width)]` and `pan.y`
///   in `[0, max(0, image.height - surface.height)]`. Requests outside those
///   ranges saturate to the nearest bound. Without an image, pan is pinned to
///   the origin.
///
/// The visible source rectangle has height `zoom * base_size` and width
/// `zoom * base_size * aspect`, where `aspect` is the surface aspect ratio.
/// The aspect correction is always applied to the width.
#[derive(Clone, Debug)]
pub struct MapViewport {
    config: ViewConfig,
    surface: Size,
    image: Option<Size>,
    zoom: f64,
    pan: Point,
    source_to_surface: Affine,
    surface_to_source: Affine,
}

impl MapViewport {
    /// Creates a viewport for a surface of the given size, at the configured
    /// initial zoom and with pan at the origin.
    #[must_use]
    pub fn new(config: ViewConfig, surface: Size) -> Self {
        let config = config.normalized();
        let mut vp = Self {
            config,
            surface,
            image: None,
            zoom: config.initial_zoom,
            pan: Point::ZERO,
            source_to_surface: Affine::IDENTITY,
            surface_to_source: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the configuration this viewport was built with.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in source-image pixels.
    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Returns the drawing surface size.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface
    }

    /// Returns the natural size of the source image, if one is attached.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    /// Attaches (or detaches) the source image size and re-clamps the pan.
    pub fn set_image_size(&mut self, image: Option<Size>) {
        if self.image == image {
            return;
        }
        self.image = image;
        self.pan = self.clamp_pan(self.pan);
        self.rebuild_transforms();
    }

    /// Sets the zoom factor, clamping it into the configured range.
    ///
    /// A NaN request is ignored and leaves the zoom unchanged.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }
        let clamped = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        self.zoom = clamped;
        self.rebuild_transforms();
    }

    /// Applies one zoom step in the given direction.
    pub fn step_zoom(&mut self, step: ZoomStep) {
        let delta = match step {
            ZoomStep::In => self.config.zoom_step,
            ZoomStep::Out => -self.config.zoom_step,
        };
        self.set_zoom(self.zoom + delta);
    }

    /// Moves the pan offset to `target`, saturating each axis to its bound.
    pub fn pan_to(&mut self, target: Point) {
        let clamped = self.clamp_pan(target);
        if clamped == self.pan {
            return;
        }
        self.pan = clamped;
        self.rebuild_transforms();
    }

    /// Moves the pan offset by `delta` source pixels, saturating to bounds.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan_to(self.pan + delta);
    }

    /// Returns the largest legal pan offset on each axis.
    #[must_use]
    pub fn max_pan(&self) -> Vec2 {
        match self.image {
            Some(image) => Vec2::new(
                (image.width - self.surface.width).max(0.0),
                (image.height - self.surface.height).max(0.0),
            ),
            None => Vec2::ZERO,
        }
    }

    /// Restores the configured initial zoom and moves the pan to the origin.
    pub fn reset(&mut self) {
        self.zoom = self.config.initial_zoom;
        self.pan = Point::ZERO;
        self.rebuild_transforms();
    }

    /// Records a new surface size and resets zoom and pan.
    pub fn resize(&mut self, surface: Size) {
        self.surface = surface;
        self.reset();
    }

    /// Returns the surface width divided by its height, or `1.0` for a
    /// surface with no height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.surface.height > 0.0 {
            self.surface.width / self.surface.height
        } else {
            1.0
        }
    }

    /// Returns the source-image rectangle currently mapped onto the surface.
    #[must_use]
    pub fn visible_source_rect(&self) -> Rect {
        let height = self.zoom * self.config.base_size;
        let width = height * self.aspect_ratio();
        Rect::from_origin_size(self.pan, Size::new(width, height))
    }

    /// Returns the full surface rectangle, anchored at the origin.
    #[must_use]
    pub fn surface_rect(&self) -> Rect {
        self.surface.to_rect()
    }

    /// Converts a source-image point into surface coordinates.
    #[must_use]
    pub fn source_to_surface_point(&self, pt: Point) -> Point {
        self.source_to_surface * pt
    }

    /// Converts a surface point into source-image coordinates.
    #[must_use]
    pub fn surface_to_source_point(&self, pt: Point) -> Point {
        self.surface_to_source * pt
    }

    /// Returns the number of surface pixels covering one source pixel.
    #[must_use]
    pub fn surface_pixels_per_source_pixel(&self) -> f64 {
        let source_height = self.zoom * self.config.base_size;
        if source_height > 0.0 {
            self.surface.height / source_height
        } else {
            0.0
        }
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewportDebugInfo {
        MapViewportDebugInfo {
            surface: self.surface,
            image: self.image,
            zoom: self.zoom,
            pan: self.pan,
            min_zoom: self.config.min_zoom,
            max_zoom: self.config.max_zoom,
            max_pan: self.max_pan(),
            visible_source_rect: self.visible_source_rect(),
        }
    }

    fn clamp_pan(&self, target: Point) -> Point {
        let max = self.max_pan();
        // `f64::max` discards NaN, so a NaN target lands on the lower bound.
        Point::new(
            target.x.max(0.0).min(max.x),
            target.y.max(0.0).min(max.y),
        )
    }

    fn rebuild_transforms(&mut self) {
        let scale = self.surface_pixels_per_source_pixel();
        // Source → surface: move the pan origin to zero, then scale uniformly.
        self.source_to_surface = Affine::scale(scale) * Affine::translate(-self.pan.to_vec2());
        self.surface_to_source = if scale > 0.0 {
            self.source_to_surface.inverse()
        } else {
            Affine::translate(self.pan.to_vec2())
        };
    }
}

/// Debug snapshot of a [`MapViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewportDebugInfo {
    /// Drawing surface size.
    pub surface: Size,
    /// Natural source image size, if attached.
    pub image: Option<Size>,
    /// Current zoom factor.
    pub zoom: f64,
    /// Current pan offset in source pixels.
    pub pan: Point,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Largest legal pan offset on each axis.
    pub max_pan: Vec2,
    /// Source rectangle currently mapped onto the surface.
    pub visible_source_rect: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::MapViewport;
    use crate::config::{ViewConfig, ZoomStep};

    fn viewport(image: Size, surface: Size) -> MapViewport {
        let mut vp = MapViewport::new(ViewConfig::default(), surface);
        vp.set_image_size(Some(image));
        vp
    }

    #[test]
    fn new_viewport_starts_at_initial_zoom_and_origin() {
        let vp = MapViewport::new(ViewConfig::default(), Size::new(800.0, 600.0));
        assert_eq!(vp.zoom(), 3.0);
        assert_eq!(vp.pan(), Point::ZERO);
        assert_eq!(vp.image_size(), None);
    }

    #[test]
    fn zoom_step_in_from_three() {
        let mut vp = MapViewport::new(ViewConfig::default(), Size::new(800.0, 600.0));
        vp.step_zoom(ZoomStep::In);
        assert!((vp.zoom() - 3.1).abs() < 1e-9);
    }

    #[test]
    fn zoom_saturates_at_both_limits() {
        let mut vp = MapViewport::new(ViewConfig::default(), Size::new(800.0, 600.0));
        vp.set_zoom(1.0);
        for _ in 0..200 {
            vp.step_zoom(ZoomStep::In);
        }
        assert_eq!(vp.zoom(), 12.0);

        for _ in 0..500 {
            vp.step_zoom(ZoomStep::Out);
        }
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn nan_zoom_request_keeps_current_zoom() {
        let mut vp = MapViewport::new(ViewConfig::default(), Size::new(800.0, 600.0));
        vp.set_zoom(5.0);
        vp.set_zoom(f64::NAN);
        assert_eq!(vp.zoom(), 5.0);

        // The wheel still works afterwards.
        vp.step_zoom(ZoomStep::In);
        assert!((vp.zoom() - 5.1).abs() < 1e-9);
    }

    #[test]
    fn infinite_zoom_request_saturates() {
        let mut vp = MapViewport::new(ViewConfig::default(), Size::new(800.0, 600.0));
        vp.set_zoom(f64::INFINITY);
        assert_eq!(vp.zoom(), 12.0);
        vp.set_zoom(f64::NEG_INFINITY);
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn nan_zoom_limits_fall_back_to_defaults() {
        let config = ViewConfig::default().with_zoom_limits(f64::NAN, f64::NAN);
        let mut vp = MapViewport::new(config, Size::new(800.0, 600.0));
        assert_eq!(vp.zoom(), 3.0);
        for _ in 0..200 {
            vp.step_zoom(ZoomStep::In);
        }
        assert_eq!(vp.zoom(), 12.0);
    }

    #[test]
    fn pan_target_saturates_to_bounds() {
        let mut vp = viewport(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        vp.pan_to(Point::new(-50.0, 10.0));
        assert_eq!(vp.pan(), Point::new(0.0, 10.0));

        vp.pan_to(Point::new(900.0, 2000.0));
        assert_eq!(vp.pan(), Point::new(500.0, 500.0));
    }

    #[test]
    fn image_smaller_than_surface_pins_pan_to_origin() {
        let mut vp = viewport(Size::new(300.0, 400.0), Size::new(500.0, 500.0));
        vp.pan_by(Vec2::new(40.0, 40.0));
        assert_eq!(vp.max_pan(), Vec2::ZERO);
        assert_eq!(vp.pan(), Point::ZERO);
    }

    #[test]
    fn pan_without_image_stays_at_origin() {
        let mut vp = MapViewport::new(ViewConfig::default(), Size::new(500.0, 500.0));
        vp.pan_to(Point::new(120.0, 80.0));
        assert_eq!(vp.pan(), Point::ZERO);
    }

    #[test]
    fn nan_pan_target_lands_on_lower_bound() {
        let mut vp = viewport(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
        vp.pan_to(Point::new(f64::NAN, 20.0));
        assert_eq!(vp.pan(), Point::new(0.0, 20.0));
    }

    #[test]
    fn shrinking_image_reclamps_pan() {
        let mut vp = viewport(Size::new(2000.0, 2000.0), Size::new(500.0, 500.0));
        vp.pan_to(Point::new(1200.0, 1400.0));
        vp.set_image_size(Some(Size::new(1000.0, 1000.0)));
        assert_eq!(vp.pan(), Point::new(500.0, 500.0));
    }

    #[test]
    fn resize_resets_zoom_and_pan() {
        let mut vp = viewport(Size::new(2000.0, 2000.0), Size::new(500.0, 500.0));
        vp.set_zoom(7.5);
        vp.pan_to(Point::new(100.0, 200.0));

        vp.resize(Size::new(1024.0, 768.0));

        assert_eq!(vp.zoom(), 3.0);
        assert_eq!(vp.pan(), Point::ZERO);
        assert_eq!(vp.surface_size(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn visible_rect_applies_aspect_to_width() {
        let mut vp = viewport(Size::new(4000.0, 4000.0), Size::new(800.0, 400.0));
        vp.pan_to(Point::new(10.0, 20.0));

        let rect = vp.visible_source_rect();
        assert_eq!(rect, Rect::new(10.0, 20.0, 10.0 + 3000.0, 20.0 + 1500.0));
    }

    #[test]
    fn zero_height_surface_uses_unit_aspect() {
        let vp = MapViewport::new(ViewConfig::default(), Size::new(300.0, 0.0));
        assert_eq!(vp.aspect_ratio(), 1.0);
        assert_eq!(vp.visible_source_rect().size(), Size::new(1500.0, 1500.0));
    }

    #[test]
    fn source_and_surface_points_roundtrip() {
        let mut vp = viewport(Size::new(2000.0, 2000.0), Size::new(600.0, 300.0));
        vp.pan_to(Point::new(100.0, 50.0));

        // Pan origin maps to the surface origin.
        let origin = vp.source_to_surface_point(Point::new(100.0, 50.0));
        assert!(origin.x.abs() < 1e-9 && origin.y.abs() < 1e-9);

        // Bottom-right corner of the visible rect maps to the surface corner.
        let rect = vp.visible_source_rect();
        let corner = vp.source_to_surface_point(Point::new(rect.x1, rect.y1));
        assert!((corner.x - 600.0).abs() < 1e-9);
        assert!((corner.y - 300.0).abs() < 1e-9);

        let back = vp.surface_to_source_point(corner);
        assert!((back.x - rect.x1).abs() < 1e-9);
        assert!((back.y - rect.y1).abs() < 1e-9);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut vp = viewport(Size::new(1000.0, 1200.0), Size::new(500.0, 500.0));
        vp.set_zoom(2.0);
        let info = vp.debug_info();
        assert_eq!(info.zoom, 2.0);
        assert_eq!(info.max_pan, Vec2::new(500.0, 700.0));
        assert_eq!(info.visible_source_rect, vp.visible_source_rect());
        assert!(info.min_zoom <= info.max_zoom);
    }
}
