//! The guide rose: drop guides drawn over a dock target while dragging.
//!
//! The rose is split into guide groups. The border group sits along the
//! edges of the rose rect; every other group is a "centerpiece" laid out
//! around the rose's center point. At most one centerpiece is active at a
//! time alongside the border guides.
//!
//! All positions handled here are local to the rose rect.

use crate::types::{Guide, GuideMode};
use dockyard_core::geometry::{Rect, Size};
use dockyard_core::math::IVec2;

/// Opacity of a guide that is not under the pointer.
pub const GUIDE_IDLE_OPACITY: f32 = 0.60;
/// Opacity of the guide under the pointer.
pub const GUIDE_HOVER_OPACITY: f32 = 1.0;

/// Side length of a compass guide image.
const GUIDE_SIZE: i32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuideGroup {
    Border,
    Compass,
    CompassEx,
    SplitHorizontal,
    SplitVertical,
    AreaCenter,
}

impl GuideGroup {
    const ALL: [GuideGroup; 6] = [
        GuideGroup::Border,
        GuideGroup::Compass,
        GuideGroup::CompassEx,
        GuideGroup::SplitHorizontal,
        GuideGroup::SplitVertical,
        GuideGroup::AreaCenter,
    ];

    /// Centerpieces in hit-test precedence order.
    const CENTERPIECES: [(GuideMode, GuideGroup); 5] = [
        (GuideMode::COMPASS, GuideGroup::Compass),
        (GuideMode::COMPASS_EX, GuideGroup::CompassEx),
        (GuideMode::SPLIT_HORIZONTAL, GuideGroup::SplitHorizontal),
        (GuideMode::SPLIT_VERTICAL, GuideGroup::SplitVertical),
        (GuideMode::AREA_CENTER, GuideGroup::AreaCenter),
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn mode(self) -> GuideMode {
        match self {
            GuideGroup::Border => GuideMode::BORDER,
            GuideGroup::Compass => GuideMode::COMPASS,
            GuideGroup::CompassEx => GuideMode::COMPASS_EX,
            GuideGroup::SplitHorizontal => GuideMode::SPLIT_HORIZONTAL,
            GuideGroup::SplitVertical => GuideMode::SPLIT_VERTICAL,
            GuideGroup::AreaCenter => GuideMode::AREA_CENTER,
        }
    }

    /// The single centerpiece a mode shows, if any.
    fn centerpiece(mode: GuideMode) -> Option<GuideGroup> {
        Self::CENTERPIECES
            .iter()
            .find(|(bit, _)| mode.contains(*bit))
            .map(|(_, group)| *group)
    }

    fn guides(self, size: Size, center: IVec2) -> Vec<(Guide, Rect)> {
        let (w, h) = (size.width, size.height);
        let (cx, cy) = (w / 2, h / 2);
        let (x, y) = (center.x, center.y);
        let square = |gx: i32, gy: i32| Rect::new(gx, gy, GUIDE_SIZE, GUIDE_SIZE);
        match self {
            GuideGroup::Border => vec![
                (Guide::BorderNorth, Rect::new(cx - 15, 27, 31, 19)),
                (Guide::BorderExNorth, Rect::new(cx - 15, 15, 31, 10)),
                (Guide::BorderEast, Rect::new(w - 45, cy - 15, 19, 31)),
                (Guide::BorderExEast, Rect::new(w - 24, cy - 15, 10, 31)),
                (Guide::BorderSouth, Rect::new(cx - 15, h - 45, 31, 19)),
                (Guide::BorderExSouth, Rect::new(cx - 15, h - 24, 31, 10)),
                (Guide::BorderWest, Rect::new(27, cy - 15, 19, 31)),
                (Guide::BorderExWest, Rect::new(15, cy - 15, 10, 31)),
            ],
            GuideGroup::Compass => vec![
                (Guide::CompassNorth, square(x - 15, y - 50)),
                (Guide::CompassEast, square(x + 20, y - 15)),
                (Guide::CompassSouth, square(x - 15, y + 20)),
                (Guide::CompassWest, square(x - 50, y - 15)),
                (Guide::CompassCenter, square(x - 15, y - 15)),
            ],
            GuideGroup::CompassEx => vec![
                (Guide::CompassNorth, square(x - 15, y - 64)),
                (Guide::CompassEast, square(x + 34, y - 15)),
                (Guide::CompassSouth, square(x - 15, y + 34)),
                (Guide::CompassWest, square(x - 64, y - 15)),
                (Guide::CompassExNorth, Rect::new(x - 15, y - 29, 31, 10)),
                (Guide::CompassExEast, Rect::new(x + 20, y - 15, 10, 31)),
                (Guide::CompassExSouth, Rect::new(x - 15, y + 20, 31, 10)),
                (Guide::CompassExWest, Rect::new(x - 29, y - 15, 10, 31)),
                (Guide::CompassCenter, square(x - 15, y - 15)),
            ],
            GuideGroup::SplitHorizontal => vec![(Guide::SplitHorizontal, square(x - 15, y - 15))],
            GuideGroup::SplitVertical => vec![(Guide::SplitVertical, square(x - 15, y - 15))],
            GuideGroup::AreaCenter => vec![(Guide::AreaCenter, square(x - 15, y - 15))],
        }
    }

    fn boxes(self, size: Size, center: IVec2) -> Vec<Rect> {
        let (w, h) = (size.width, size.height);
        let (cx, cy) = (w / 2, h / 2);
        let (x, y) = (center.x, center.y);
        match self {
            GuideGroup::Border => vec![
                Rect::new(cx - 20, 10, 41, 41),
                Rect::new(w - 51, cy - 20, 41, 41),
                Rect::new(cx - 20, h - 51, 41, 41),
                Rect::new(10, cy - 20, 41, 41),
            ],
            GuideGroup::Compass => vec![Rect::new(x - 55, y - 55, 111, 111)],
            GuideGroup::CompassEx => vec![Rect::new(x - 69, y - 69, 139, 139)],
            GuideGroup::SplitHorizontal | GuideGroup::SplitVertical | GuideGroup::AreaCenter => {
                vec![Rect::new(x - 20, y - 20, 41, 41)]
            }
        }
    }

    fn guide_at(self, size: Size, center: IVec2, pos: IVec2) -> Guide {
        self.guides(size, center)
            .into_iter()
            .find(|(_, rect)| rect.contains(pos))
            .map_or(Guide::NoGuide, |(guide, _)| guide)
    }
}

/// Something the renderer should draw for the rose, in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoseRenderItem {
    /// Backing box behind a group of guides.
    Box(Rect),
    Guide { guide: Guide, rect: Rect, opacity: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct GuideRose {
    mode: GuideMode,
    /// Global rect the rose covers.
    geometry: Rect,
    /// Center point of the centerpiece, local to `geometry`.
    center: IVec2,
    visible: bool,
    /// Highlighted guide of each group, indexed by `GuideGroup::index`.
    highlighted: [Option<Guide>; 6],
}

impl GuideRose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GuideMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GuideMode) {
        if self.mode != mode {
            self.mode = mode;
        }
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    pub fn center_point(&self) -> IVec2 {
        self.center
    }

    pub fn set_center_point(&mut self, center: IVec2) {
        self.center = center;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Map a global position into rose-local coordinates.
    pub fn map_from_global(&self, pos: IVec2) -> IVec2 {
        pos - self.geometry.origin()
    }

    /// The guide under a local position for the given mode.
    ///
    /// Border guides are tested first, then the one centerpiece the mode
    /// selects.
    pub fn guide_at(&self, pos: IVec2, mode: GuideMode) -> Guide {
        let size = self.geometry.size();
        if mode.contains(GuideMode::BORDER) {
            let guide = GuideGroup::Border.guide_at(size, self.center, pos);
            if guide != Guide::NoGuide {
                return guide;
            }
        }
        GuideGroup::centerpiece(mode)
            .map_or(Guide::NoGuide, |group| group.guide_at(size, self.center, pos))
    }

    /// Update guide highlights for a local pointer position.
    ///
    /// Every group tracks its own highlight: the guide under the pointer is
    /// opacified and the previously highlighted one is transparentized.
    pub fn mouse_over(&mut self, pos: IVec2) {
        let size = self.geometry.size();
        for group in GuideGroup::ALL {
            let hit = group.guide_at(size, self.center, pos);
            self.highlighted[group.index()] = (hit != Guide::NoGuide).then_some(hit);
        }
    }

    /// The currently highlighted guide among the active groups.
    pub fn highlighted(&self) -> Option<Guide> {
        self.active_groups()
            .find_map(|group| self.highlighted[group.index()])
    }

    /// Opacity a guide is drawn with in its group.
    pub fn guide_opacity(&self, guide: Guide) -> f32 {
        let lit = self
            .active_groups()
            .any(|group| self.highlighted[group.index()] == Some(guide));
        if lit {
            GUIDE_HOVER_OPACITY
        } else {
            GUIDE_IDLE_OPACITY
        }
    }

    fn active_groups(&self) -> impl Iterator<Item = GuideGroup> + '_ {
        let border = self
            .mode
            .contains(GuideMode::BORDER)
            .then_some(GuideGroup::Border);
        border.into_iter().chain(GuideGroup::centerpiece(self.mode))
    }

    /// Boxes and guides to draw for the active mode, empty while hidden.
    pub fn render_items(&self) -> Vec<RoseRenderItem> {
        if !self.visible {
            return Vec::new();
        }
        let size = self.geometry.size();
        let origin = self.geometry.origin();
        let mut items = Vec::new();
        for group in self.active_groups() {
            debug_assert!(self.mode.contains(group.mode()));
            let lit = self.highlighted[group.index()];
            items.extend(
                group
                    .boxes(size, self.center)
                    .into_iter()
                    .map(|rect| RoseRenderItem::Box(rect.translated(origin))),
            );
            items.extend(group.guides(size, self.center).into_iter().map(|(guide, rect)| {
                RoseRenderItem::Guide {
                    guide,
                    rect: rect.translated(origin),
                    opacity: if lit == Some(guide) {
                        GUIDE_HOVER_OPACITY
                    } else {
                        GUIDE_IDLE_OPACITY
                    },
                }
            }));
        }
        items
    }
}
