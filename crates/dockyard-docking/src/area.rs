//! Dock areas: the scope of one layout tree.

use crate::dock_bar::DockBarManager;
use crate::geometry::{HitTarget, LayoutGeometry, LayoutMetrics};
use crate::tree::DockWidget;
use crate::types::{ContainerId, TabPosition};
use bitflags::bitflags;
use dockyard_core::geometry::Rect;
use dockyard_core::math::IVec2;

bitflags! {
    /// What changed in an area since the flags were last taken.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AreaDirty: u8 {
        const NONE      = 0;
        /// The layout tree changed shape.
        const CONTENTS  = 0b001;
        /// Dock bar membership changed.
        const DOCK_BARS = 0b010;
        /// The maximized container changed.
        const MAXIMIZED = 0b100;
    }
}

#[derive(Debug, Default)]
pub struct DockArea {
    pub(crate) root: Option<DockWidget>,
    pub(crate) dock_bars: DockBarManager,
    pub(crate) maximized: Option<ContainerId>,
    pub(crate) tab_position: TabPosition,
    pub(crate) geometry: Rect,
    dirty: AreaDirty,
}

impl DockArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&DockWidget> {
        self.root.as_ref()
    }

    pub fn dock_bars(&self) -> &DockBarManager {
        &self.dock_bars
    }

    /// The container currently filling the area, if one is maximized.
    pub fn maximized(&self) -> Option<ContainerId> {
        self.maximized
    }

    /// Default tab position for tab groups created by a center drop.
    pub fn tab_position(&self) -> TabPosition {
        self.tab_position
    }

    pub fn set_tab_position(&mut self, position: TabPosition) {
        self.tab_position = position;
    }

    /// Global rect of the area.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
    }

    /// Neither a layout nor any pinned container.
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.dock_bars.is_empty()
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.tree_contains(id) || self.dock_bars.contains(id)
    }

    pub fn tree_contains(&self, id: ContainerId) -> bool {
        self.root.as_ref().is_some_and(|root| root.contains_container(id))
    }

    /// Containers in the layout tree, then those pinned to dock bars.
    pub fn containers(&self) -> Vec<ContainerId> {
        let mut out = self.root.as_ref().map(DockWidget::containers).unwrap_or_default();
        out.extend(self.dock_bars.containers().into_iter().map(|(id, _)| id));
        out
    }

    pub fn layout_geometry(&self, metrics: &LayoutMetrics) -> LayoutGeometry {
        LayoutGeometry::compute(self.root.as_ref(), self.geometry, metrics)
    }

    /// Drop target under a global position.
    pub fn hit_test(&self, pos: IVec2, metrics: &LayoutMetrics) -> Option<HitTarget> {
        if !self.geometry.contains(pos) {
            return None;
        }
        self.layout_geometry(metrics).hit_test(pos, metrics)
    }

    pub(crate) fn mark_dirty(&mut self, flags: AreaDirty) {
        self.dirty |= flags;
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Read and clear the change flags.
    pub fn take_dirty(&mut self) -> AreaDirty {
        std::mem::take(&mut self.dirty)
    }
}
