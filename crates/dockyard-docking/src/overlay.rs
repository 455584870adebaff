//! Drag feedback: the guide rose plus a rubber band previewing the drop.
//!
//! State changes are deferred on two debounce timers so the rose does not
//! flicker while the pointer crosses widget boundaries. The band fades and
//! moves with tweens. Everything advances in [`DockOverlay::update`].

use crate::animation::{DebounceTimer, Tween};
use crate::config::DockConfig;
use crate::geometry::HitTarget;
use crate::guide_rose::GuideRose;
use crate::types::{Guide, GuideMode};
use dockyard_core::geometry::Rect;
use dockyard_core::math::IVec2;
use std::time::Duration;

/// Translucent preview of where a drop would land.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RubberBand {
    pub geometry: Rect,
    pub opacity: f32,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OverlaySettings {
    border_size: i32,
    rose_delay: Duration,
    band_delay: Duration,
    band_target_opacity: f32,
    vis_duration: Duration,
    geo_duration: Duration,
}

impl From<&DockConfig> for OverlaySettings {
    fn from(config: &DockConfig) -> Self {
        Self {
            border_size: config.border_size,
            rose_delay: config.rose_delay,
            band_delay: config.band_delay,
            band_target_opacity: config.band_target_opacity,
            vis_duration: config.band_vis_duration,
            geo_duration: config.band_geo_duration,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DockOverlay {
    settings: OverlaySettings,
    rose: GuideRose,
    band: RubberBand,
    rose_timer: DebounceTimer,
    band_timer: DebounceTimer,
    vis_anim: Option<Tween<f32>>,
    geo_anim: Option<Tween<Rect>>,
    target_rose_mode: GuideMode,
    target_band_geo: Rect,
    last_guide: Option<Guide>,
    show_band: bool,
    hover_pos: IVec2,
}

impl Default for DockOverlay {
    fn default() -> Self {
        Self::new(&DockConfig::default())
    }
}

impl DockOverlay {
    pub fn new(config: &DockConfig) -> Self {
        Self {
            settings: OverlaySettings::from(config),
            rose: GuideRose::new(),
            band: RubberBand::default(),
            rose_timer: DebounceTimer::new(),
            band_timer: DebounceTimer::new(),
            vis_anim: None,
            geo_anim: None,
            target_rose_mode: GuideMode::NONE,
            target_band_geo: Rect::INVALID,
            last_guide: None,
            show_band: false,
            hover_pos: IVec2::ZERO,
        }
    }

    pub fn rose(&self) -> &GuideRose {
        &self.rose
    }

    pub fn band(&self) -> &RubberBand {
        &self.band
    }

    /// The guide under a global position, using the rose's current mode.
    pub fn guide_at(&self, pos: IVec2) -> Guide {
        let local = self.rose.map_from_global(pos);
        self.rose.guide_at(local, self.rose.mode())
    }

    /// Hover over a dock area. `target` is the widget under the pointer,
    /// `pos` is global.
    pub fn mouse_over_area(&mut self, area_rect: Rect, target: Option<&HitTarget>, pos: IVec2) {
        let target_mode = GuideMode::BORDER | target.map_or(GuideMode::NONE, HitTarget::guide_mode);
        self.hover_pos = pos;
        self.show_band = true;
        self.target_rose_mode = target_mode;
        if target_mode != self.rose.mode() {
            self.rose.set_mode(GuideMode::BORDER);
            self.rose_timer.start(self.settings.rose_delay);
            self.show_band = false;
        }

        let dirty = self.rose.geometry() != area_rect;
        if dirty {
            self.rose.hide();
            self.rose.set_mode(GuideMode::NONE);
            self.rose.set_geometry(area_rect);
        }

        let center = target.map_or(area_rect, HitTarget::rect).center() - area_rect.origin();
        self.rose.set_center_point(center);

        let local = self.rose.map_from_global(pos);
        let guide = self.rose.guide_at(local, target_mode);
        if dirty || self.last_guide != Some(guide) {
            self.last_guide = Some(guide);
            let fit = if guide.targets_area() {
                area_rect
            } else {
                target.map_or(area_rect, HitTarget::rect)
            };
            self.target_band_geo = band_geometry(guide, fit, self.settings.border_size);
            self.band_timer.start(self.settings.band_delay);
        }

        self.rose.mouse_over(local);
        self.rose.show();
    }

    /// Hover over a single widget such as a floating container. An `empty`
    /// widget shows the lone area-center guide instead of the compass.
    pub fn mouse_over_widget(&mut self, widget_rect: Rect, pos: IVec2, empty: bool) {
        let target_mode = if empty {
            GuideMode::AREA_CENTER
        } else {
            GuideMode::COMPASS_EX
        };
        self.hover_pos = pos;
        self.target_rose_mode = target_mode;
        if self.rose.mode() != target_mode {
            self.rose.set_mode(GuideMode::NONE);
            self.rose_timer.start(self.settings.rose_delay);
            self.band_timer.start(self.settings.band_delay);
        }

        let dirty = self.rose.geometry() != widget_rect;
        if dirty {
            self.rose.hide();
            self.rose.set_mode(GuideMode::NONE);
            self.rose.set_geometry(widget_rect);
        }

        let size = widget_rect.size();
        self.rose
            .set_center_point(IVec2::new(size.width / 2, size.height / 2));

        let local = self.rose.map_from_global(pos);
        let guide = self.rose.guide_at(local, target_mode);
        if dirty || self.last_guide != Some(guide) {
            self.last_guide = Some(guide);
            self.target_band_geo = band_geometry(guide, widget_rect, self.settings.border_size);
            self.band_timer.start(self.settings.band_delay);
        }

        self.rose.mouse_over(local);
        self.rose.show();
    }

    /// Stop all pending feedback and hide the rose and band.
    pub fn hide(&mut self) {
        self.rose_timer.stop();
        self.band_timer.stop();
        self.vis_anim = None;
        self.geo_anim = None;
        self.rose.hide();
        self.band.visible = false;
        self.band.opacity = 0.0;
        self.last_guide = None;
    }

    pub fn is_visible(&self) -> bool {
        self.rose.is_visible() || self.band.visible
    }

    /// Advance animations and timers. Returns whether anything is still
    /// pending.
    pub fn update(&mut self, dt: Duration) -> bool {
        if let Some(anim) = &mut self.geo_anim {
            self.band.geometry = anim.update(dt);
            if !anim.is_running() {
                self.geo_anim = None;
            }
        }
        if let Some(anim) = &mut self.vis_anim {
            self.band.opacity = anim.update(dt);
            if !anim.is_running() {
                self.vis_anim = None;
                if self.band.opacity == 0.0 {
                    self.band.visible = false;
                }
            }
        }

        if self.rose_timer.tick(dt) {
            self.rose.set_mode(self.target_rose_mode);
            let local = self.rose.map_from_global(self.hover_pos);
            self.rose.mouse_over(local);
            self.show_band = true;
            self.update_band_state();
        }
        if self.band_timer.tick(dt) {
            self.update_band_state();
        }

        self.rose_timer.is_active()
            || self.band_timer.is_active()
            || self.vis_anim.is_some()
            || self.geo_anim.is_some()
    }

    fn update_band_state(&mut self) {
        let geo = self.target_band_geo;
        if geo.is_valid() && self.show_band {
            if !self.band.visible {
                self.band.geometry = geo;
                self.start_vis_anim(self.settings.band_target_opacity);
            } else {
                self.start_vis_anim(self.settings.band_target_opacity);
                self.geo_anim = Some(Tween::new(self.band.geometry, geo, self.settings.geo_duration));
            }
        } else {
            self.start_vis_anim(0.0);
        }
    }

    fn start_vis_anim(&mut self, opacity: f32) {
        if !self.band.visible && opacity != 0.0 {
            self.band.opacity = 0.0;
            self.band.visible = true;
        }
        self.vis_anim = Some(Tween::new(self.band.opacity, opacity, self.settings.vis_duration));
    }
}

/// Global rubber band geometry for `guide` fitted to `rect`.
pub fn band_geometry(guide: Guide, rect: Rect, border_size: i32) -> Rect {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = rect;
    match guide {
        Guide::NoGuide => Rect::INVALID,
        Guide::BorderNorth | Guide::BorderExNorth => Rect::new(x, y, w, border_size),
        Guide::BorderEast | Guide::BorderExEast => Rect::new(x + w - border_size, y, border_size, h),
        Guide::BorderSouth | Guide::BorderExSouth => Rect::new(x, y + h - border_size, w, border_size),
        Guide::BorderWest | Guide::BorderExWest => Rect::new(x, y, border_size, h),
        Guide::CompassNorth => Rect::new(x, y, w, h / 3),
        Guide::CompassEast => Rect::new(x + 2 * w / 3, y, w - 2 * w / 3, h),
        Guide::CompassSouth => Rect::new(x, y + 2 * h / 3, w, h - 2 * h / 3),
        Guide::CompassWest => Rect::new(x, y, w / 3, h),
        Guide::CompassCenter
        | Guide::CompassExNorth
        | Guide::CompassExEast
        | Guide::CompassExSouth
        | Guide::CompassExWest
        | Guide::AreaCenter => rect,
        Guide::SplitHorizontal => {
            let (wo, r) = ((border_size - w).div_euclid(2), (border_size - w).rem_euclid(2));
            Rect::new(x - (wo + r), y, 2 * (wo + r) + w, h)
        }
        Guide::SplitVertical => {
            let (ho, r) = ((border_size - h).div_euclid(2), (border_size - h).rem_euclid(2));
            Rect::new(x, y - (ho + r), w, 2 * (ho + r) + h)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodePath;
    use crate::types::{ContainerId, Orientation};
    use dockyard_core::alloc::sparse_set::IndexSlot;

    const AREA: Rect = Rect::new(100, 100, 600, 400);

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn container_target(rect: Rect) -> HitTarget {
        HitTarget::Container {
            id: ContainerId(IndexSlot::new(0, 0)),
            path: NodePath::root(),
            rect,
        }
    }

    #[test]
    fn band_geometry_per_guide() {
        let r = Rect::new(0, 0, 300, 90);
        assert_eq!(band_geometry(Guide::NoGuide, r, 60), Rect::INVALID);
        assert_eq!(band_geometry(Guide::BorderEast, r, 60), Rect::new(240, 0, 60, 90));
        assert_eq!(band_geometry(Guide::BorderExSouth, r, 60), Rect::new(0, 30, 300, 60));
        assert_eq!(band_geometry(Guide::CompassNorth, r, 60), Rect::new(0, 0, 300, 30));
        assert_eq!(band_geometry(Guide::CompassEast, r, 60), Rect::new(200, 0, 100, 90));
        assert_eq!(band_geometry(Guide::CompassExWest, r, 60), r);
    }

    #[test]
    fn split_band_is_centered_on_the_handle() {
        let handle = Rect::new(400, 0, 4, 300);
        assert_eq!(band_geometry(Guide::SplitHorizontal, handle, 60), Rect::new(372, 0, 60, 300));
        let odd = Rect::new(400, 0, 5, 300);
        assert_eq!(band_geometry(Guide::SplitHorizontal, odd, 60), Rect::new(372, 0, 61, 300));
    }

    #[test]
    fn rose_mode_change_is_debounced() {
        let mut overlay = DockOverlay::default();
        let target = container_target(Rect::new(100, 100, 300, 400));
        overlay.mouse_over_area(AREA, Some(&target), IVec2::new(250, 300));
        assert!(overlay.rose().is_visible());
        assert_eq!(overlay.rose().mode(), GuideMode::NONE);

        overlay.update(ms(20));
        assert_eq!(overlay.rose().mode(), GuideMode::NONE);
        overlay.update(ms(10));
        assert_eq!(overlay.rose().mode(), GuideMode::BORDER | GuideMode::COMPASS_EX);
    }

    #[test]
    fn band_fades_in_over_the_hovered_guide() {
        let mut overlay = DockOverlay::default();
        let widget = Rect::new(100, 100, 300, 400);
        let target = container_target(widget);
        // Center of the container: the compass center guide.
        let pos = widget.center();
        overlay.mouse_over_area(AREA, Some(&target), pos);
        overlay.update(ms(30));
        overlay.mouse_over_area(AREA, Some(&target), pos);
        assert_eq!(overlay.guide_at(pos), Guide::CompassCenter);

        for _ in 0..20 {
            overlay.update(ms(10));
        }
        let band = overlay.band();
        assert!(band.visible);
        assert_eq!(band.geometry, widget);
        assert!((band.opacity - 0.6).abs() < 1e-4);
    }

    #[test]
    fn hide_stops_everything_and_is_idempotent() {
        let mut overlay = DockOverlay::default();
        overlay.mouse_over_widget(Rect::new(0, 0, 200, 200), IVec2::new(100, 100), true);
        overlay.hide();
        overlay.hide();
        assert!(!overlay.is_visible());
        assert!(!overlay.update(ms(100)));
        assert!(!overlay.band().visible);
    }

    #[test]
    fn empty_widget_shows_the_area_center_guide() {
        let mut overlay = DockOverlay::default();
        let widget = Rect::new(0, 0, 200, 200);
        overlay.mouse_over_widget(widget, IVec2::new(100, 100), true);
        overlay.update(ms(30));
        assert_eq!(overlay.rose().mode(), GuideMode::AREA_CENTER);
        assert_eq!(overlay.guide_at(IVec2::new(100, 100)), Guide::AreaCenter);
        assert_eq!(overlay.guide_at(IVec2::new(10, 10)), Guide::NoGuide);
    }

    #[test]
    fn handle_targets_select_split_modes() {
        let mut overlay = DockOverlay::default();
        let handle = HitTarget::SplitHandle {
            splitter: NodePath::root(),
            index: 1,
            orientation: Orientation::Vertical,
            rect: Rect::new(100, 300, 600, 4),
        };
        overlay.mouse_over_area(AREA, Some(&handle), IVec2::new(400, 302));
        overlay.update(ms(30));
        assert_eq!(overlay.rose().mode(), GuideMode::BORDER | GuideMode::SPLIT_VERTICAL);
        assert_eq!(overlay.guide_at(IVec2::new(400, 302)), Guide::SplitVertical);
    }
}
