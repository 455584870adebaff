//! Tunable parameters for the docking engine.
//!
//! A [`DockConfig`] is handed to the [`DockManager`](crate::DockManager) at
//! construction. Every field has a sensible default; the setters follow the
//! builder style so overrides read as one expression.

use dockyard_core::geometry::Size;
use std::time::Duration;

/// Manhattan distance the pointer must travel before a press becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: i32 = 10;

/// Width of the rubber band strip for border and splitter drops.
pub const DEFAULT_BORDER_SIZE: i32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct DockConfig {
    /// Drag start distance in pixels.
    pub drag_threshold: i32,
    /// Edge snapping window for floating frames. `None` means twice the drag
    /// threshold.
    pub snap_distance: Option<i32>,
    /// Rubber band strip size for border and split-handle guides.
    pub border_size: i32,
    /// Delay before the guide rose switches to a new mode.
    pub rose_delay: Duration,
    /// Delay before the rubber band follows a new guide.
    pub band_delay: Duration,
    /// Opacity the rubber band fades in to.
    pub band_target_opacity: f32,
    /// Duration of the band fade.
    pub band_vis_duration: Duration,
    /// Duration of the band geometry tween.
    pub band_geo_duration: Duration,
    /// Duration of dock bar slide out and slide in.
    pub slide_duration: Duration,
    /// Thickness of splitter handles.
    pub handle_width: i32,
    /// Extra grab tolerance around splitter handles when hit testing drops.
    pub handle_tolerance: i32,
    /// Tab bar thickness reserved by a tab group.
    pub tab_bar_height: i32,
    /// Inset between a floating window's frame and its dock area.
    pub window_margin: i32,
    /// Size given to floating frames that have no geometry yet.
    pub default_frame_size: Size,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            snap_distance: None,
            border_size: DEFAULT_BORDER_SIZE,
            rose_delay: Duration::from_millis(30),
            band_delay: Duration::from_millis(50),
            band_target_opacity: 0.6,
            band_vis_duration: Duration::from_millis(100),
            band_geo_duration: Duration::from_millis(100),
            slide_duration: Duration::from_millis(100),
            handle_width: 4,
            handle_tolerance: 20,
            tab_bar_height: 24,
            window_margin: 5,
            default_frame_size: Size::new(320, 240),
        }
    }
}

impl DockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective snap distance for floating frame edges.
    pub fn snap_distance(&self) -> i32 {
        self.snap_distance.unwrap_or(2 * self.drag_threshold)
    }

    pub fn with_drag_threshold(mut self, threshold: i32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn with_snap_distance(mut self, distance: i32) -> Self {
        self.snap_distance = Some(distance);
        self
    }

    pub fn with_border_size(mut self, size: i32) -> Self {
        self.border_size = size;
        self
    }

    pub fn with_rose_delay(mut self, delay: Duration) -> Self {
        self.rose_delay = delay;
        self
    }

    pub fn with_band_delay(mut self, delay: Duration) -> Self {
        self.band_delay = delay;
        self
    }

    pub fn with_band_target_opacity(mut self, opacity: f32) -> Self {
        self.band_target_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_band_durations(mut self, visibility: Duration, geometry: Duration) -> Self {
        self.band_vis_duration = visibility;
        self.band_geo_duration = geometry;
        self
    }

    pub fn with_slide_duration(mut self, duration: Duration) -> Self {
        self.slide_duration = duration;
        self
    }

    pub fn with_handle_width(mut self, width: i32) -> Self {
        self.handle_width = width;
        self
    }

    pub fn with_tab_bar_height(mut self, height: i32) -> Self {
        self.tab_bar_height = height;
        self
    }

    pub fn with_window_margin(mut self, margin: i32) -> Self {
        self.window_margin = margin;
        self
    }

    pub fn with_default_frame_size(mut self, size: Size) -> Self {
        self.default_frame_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_distance_defaults_to_twice_the_drag_threshold() {
        let config = DockConfig::default();
        assert_eq!(config.snap_distance(), 20);
        assert_eq!(config.clone().with_drag_threshold(4).snap_distance(), 8);
        assert_eq!(config.with_snap_distance(3).snap_distance(), 3);
    }

    #[test]
    fn band_opacity_is_clamped() {
        let config = DockConfig::new().with_band_target_opacity(3.0);
        assert_eq!(config.band_target_opacity, 1.0);
    }
}
