// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::model::Point;

/// Zoom bounds and defaults for the canvas view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub initial_scale: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale change per discrete zoom event.
    pub zoom_step: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { initial_scale: 0.9, min_scale: 0.2, max_scale: 2.5, zoom_step: 0.1 }
    }
}

impl ViewConfig {
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

/// Size of the interactive surface in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Pan offset and zoom scale of the canvas.
///
/// The canvas-to-screen transform is `screen = canvas * scale + offset`; zooming scales about the
/// transform origin and never recenters on the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    scale: f64,
    offset: Point,
}

impl Viewport {
    pub fn new(scale: f64, offset: Point) -> Self {
        Self { scale, offset }
    }

    /// The view a fresh or reset editor starts with: configured scale, origin at the surface
    /// center when the surface size is known.
    pub fn initial(config: &ViewConfig, surface: Option<SurfaceSize>) -> Self {
        let offset = surface.map(SurfaceSize::center).unwrap_or(Point::ORIGIN);
        Self { scale: config.clamp_scale(config.initial_scale), offset }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new((screen.x - self.offset.x) / self.scale, (screen.y - self.offset.y) / self.scale)
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        canvas * self.scale + self.offset
    }

    pub fn pan_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Moves the canvas origin to the center of `surface`, keeping the scale.
    pub fn center_on(&mut self, surface: SurfaceSize) {
        self.offset = surface.center();
    }

    pub fn reset(&mut self, config: &ViewConfig, surface: Option<SurfaceSize>) {
        *self = Self::initial(config, surface);
    }

    /// Adds `delta` to the scale, clamped to the configured interval. Returns whether the scale
    /// changed.
    pub fn zoom_by(&mut self, delta: f64, config: &ViewConfig) -> bool {
        let next = config.clamp_scale(self.scale + delta);
        let changed = next != self.scale;
        self.scale = next;
        changed
    }

    pub fn zoom_in(&mut self, config: &ViewConfig) -> bool {
        self.zoom_by(config.zoom_step, config)
    }

    pub fn zoom_out(&mut self, config: &ViewConfig) -> bool {
        self.zoom_by(-config.zoom_step, config)
    }

    /// One discrete wheel notch: a positive delta (scrolling down) zooms out, a negative one in.
    pub fn zoom_by_wheel(&mut self, delta_y: f64, config: &ViewConfig) -> bool {
        if delta_y > 0.0 {
            self.zoom_out(config)
        } else if delta_y < 0.0 {
            self.zoom_in(config)
        } else {
            false
        }
    }
}
