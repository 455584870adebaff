//! Applying [`DockLayout`]s and [`LayoutOp`]s to a live manager.

use crate::area::AreaDirty;
use crate::container::{ContainerLocation, DockContainer};
use crate::dock_bar::DockBarManager;
use crate::error::{DockError, DockResult};
use crate::event::DockEvent;
use crate::geometry::HitTarget;
use crate::layout::{AreaLayout, DockLayout, DockLayoutItem, ItemLayout, LayoutNode, LayoutOp};
use crate::layout_handling::{container_target, sync_title_bars};
use crate::manager::DockManager;
use crate::proximity::ProximityHandler;
use crate::tree::{DockSplitter, DockTabs, DockWidget};
use crate::types::{AreaId, ContainerId, DockBarPosition, FrameId, Guide, InsertPosition, TabPosition, WindowId};
use dockyard_core::alloc::HashSet;
use dockyard_core::geometry::Rect;
use dockyard_core::math::IVec2;
use dockyard_core::profiling::profile_function;

/// Keep a frame reachable: if its origin lies on no screen, move it into the
/// nearest one. The origin never ends up left of or above that screen.
pub fn ensure_on_screen(rect: Rect, screens: &[Rect]) -> Rect {
    if screens.iter().any(|screen| screen.contains(rect.origin())) {
        return rect;
    }
    let Some(screen) = nearest_screen(screens, rect.origin()) else {
        return rect;
    };
    let x = rect.x.min(screen.right() - rect.width).max(screen.x);
    let y = rect.y.min(screen.bottom() - rect.height).max(screen.y);
    rect.moved_to(IVec2::new(x, y))
}

/// The screen containing `point`, or the one closest to it.
pub(crate) fn nearest_screen(screens: &[Rect], point: IVec2) -> Option<Rect> {
    screens.iter().copied().min_by_key(|screen| {
        let dx = (screen.x - point.x).max(point.x - (screen.right() - 1)).max(0) as i64;
        let dy = (screen.y - point.y).max(point.y - (screen.bottom() - 1)).max(0) as i64;
        dx * dx + dy * dy
    })
}

fn compass_guide(position: InsertPosition) -> Guide {
    match position {
        InsertPosition::Top => Guide::CompassNorth,
        InsertPosition::Right => Guide::CompassEast,
        InsertPosition::Bottom => Guide::CompassSouth,
        InsertPosition::Left => Guide::CompassWest,
    }
}

fn border_guide(position: InsertPosition) -> Guide {
    match position {
        InsertPosition::Top => Guide::BorderNorth,
        InsertPosition::Right => Guide::BorderEast,
        InsertPosition::Bottom => Guide::BorderSouth,
        InsertPosition::Left => Guide::BorderWest,
    }
}

fn tab_guide(position: TabPosition) -> Guide {
    match position {
        TabPosition::Top => Guide::CompassExNorth,
        TabPosition::Right => Guide::CompassExEast,
        TabPosition::Bottom => Guide::CompassExSouth,
        TabPosition::Left => Guide::CompassExWest,
    }
}

impl DockManager {
    /// Replace the whole arrangement with `layout`.
    ///
    /// Every item the layout names must be registered; otherwise nothing
    /// changes and the unknown names are returned. Items the layout does not
    /// mention end up hidden and unparented.
    pub fn apply_layout(&mut self, layout: &DockLayout) -> DockResult<()> {
        profile_function!();
        let unknown = self.unknown_names(layout);
        if !unknown.is_empty() {
            return Err(DockError::UnknownItems(unknown));
        }

        self.reset_layout();
        let mut seen = HashSet::default();
        let mut primary_done = false;
        for item in &layout.items {
            match item {
                DockLayoutItem::Area(area) if !area.floating && !primary_done => {
                    primary_done = true;
                    self.init_dock_area(AreaId::Primary, area, &mut seen);
                }
                DockLayoutItem::Area(area) => {
                    self.build_floating_area(area, &mut seen);
                }
                DockLayoutItem::Item(item) => {
                    self.build_floating_item(item, &mut seen);
                }
                DockLayoutItem::Unknown => tracing::warn!("skipping unknown layout item kind"),
            }
        }
        tracing::debug!(frames = self.z_order.len(), "applied dock layout");
        Ok(())
    }

    fn unknown_names(&self, layout: &DockLayout) -> Vec<String> {
        let mut unknown: Vec<String> = Vec::new();
        for name in layout.item_names() {
            if !self.names.contains_key(name) && !unknown.iter().any(|u| u == name) {
                unknown.push(name.to_owned());
            }
        }
        unknown
    }

    /// Unplug, unfloat and hide everything and drop all windows.
    fn reset_layout(&mut self) {
        self.drags.cancel();
        self.overlay.hide();
        let ids: Vec<ContainerId> = self.names.values().copied().collect();
        for id in ids {
            self.containers.update(id, DockContainer::reset);
        }
        for id in self.windows.ids() {
            self.windows.remove(id);
        }
        self.proximity = ProximityHandler::new();
        self.z_order.clear();
        self.pending_closes.clear();
        self.area.root = None;
        self.area.dock_bars = DockBarManager::new();
        self.area.maximized = None;
        self.area.mark_dirty(AreaDirty::all());
    }

    /// Look up a layout item, skipping names already placed.
    fn resolve(&self, name: &str, seen: &mut HashSet<ContainerId>) -> Option<ContainerId> {
        let Some(id) = self.find_container(name) else {
            tracing::warn!(item = %name, "layout names an unknown item");
            return None;
        };
        if !seen.insert(id) {
            tracing::warn!(item = %name, "item appears more than once in the layout");
            return None;
        }
        Some(id)
    }

    fn build_node(&self, node: &LayoutNode, seen: &mut HashSet<ContainerId>) -> Option<DockWidget> {
        match node {
            LayoutNode::Item(item) => self.resolve(&item.name, seen).map(DockWidget::Container),
            LayoutNode::Tab(layout) => {
                let ids: Vec<ContainerId> = layout
                    .items
                    .iter()
                    .filter_map(|item| self.resolve(&item.name, seen))
                    .collect();
                match ids.len() {
                    0 => None,
                    1 => Some(DockWidget::Container(ids[0])),
                    len => {
                        let mut tabs = DockTabs::new(layout.tab_position, ids);
                        tabs.set_movable(layout.tabs_movable);
                        tabs.set_current_index(layout.index.min(len - 1));
                        Some(DockWidget::Tabs(tabs))
                    }
                }
            }
            LayoutNode::Split(layout) => {
                let children: Vec<DockWidget> = layout
                    .items
                    .iter()
                    .filter_map(|child| self.build_node(child, seen))
                    .collect();
                let built = children.len();
                let mut splitter = DockSplitter::new(layout.orientation);
                for child in children {
                    splitter.push_child(child);
                }
                match splitter.len() {
                    0 => None,
                    1 => Some(splitter.remove_child(0)),
                    len => {
                        let intact = built == layout.items.len() && len == built;
                        if intact && layout.sizes.len() >= len {
                            splitter.set_sizes(&layout.sizes[..len]);
                        }
                        Some(DockWidget::Splitter(splitter))
                    }
                }
            }
            LayoutNode::Unknown => {
                tracing::warn!("skipping unknown layout node kind");
                None
            }
        }
    }

    /// Populate an empty area from its layout: tree, dock bars and the
    /// maximized item.
    fn init_dock_area(&mut self, area_id: AreaId, layout: &AreaLayout, seen: &mut HashSet<ContainerId>) {
        let root = layout.item.as_ref().and_then(|node| self.build_node(node, seen));
        let tree: Vec<ContainerId> = root.as_ref().map(DockWidget::containers).unwrap_or_default();
        let maximized = layout
            .item
            .as_ref()
            .map(LayoutNode::items)
            .unwrap_or_default()
            .into_iter()
            .filter(|item| item.maximized)
            .filter_map(|item| self.find_container(&item.name))
            .find(|id| tree.contains(id));
        let mut pinned = Vec::new();
        for bar in &layout.dock_bars {
            for item in &bar.items {
                if let Some(id) = self.resolve(&item.name, seen) {
                    pinned.push((id, bar.position));
                }
            }
        }

        let Some((area, containers)) = self.area_and_containers(area_id) else {
            return;
        };
        area.root = root;
        for id in &tree {
            containers.update(*id, |c| {
                c.unfloat();
                c.visible = true;
            });
        }
        sync_title_bars(area, containers);
        for (id, position) in pinned {
            area.dock_bars.add_container(id, position, None);
            containers.update(id, |c| {
                c.visible = false;
                c.title_bar_visible = true;
            });
        }
        area.maximized = maximized;
        if let Some(id) = maximized {
            containers.update(id, |c| c.maximized = true);
        }
        area.mark_dirty(AreaDirty::all());
    }

    fn build_floating_area(&mut self, layout: &AreaLayout, seen: &mut HashSet<ContainerId>) -> Option<WindowId> {
        let geometry = self.default_float_geometry();
        let window = self.new_window(geometry);
        self.init_dock_area(AreaId::Window(window), layout, seen);
        if self.windows.get(window).is_some_and(|w| w.area().is_empty()) {
            tracing::warn!("floating area has no items, dropping it");
            self.discard_window(window);
            return None;
        }
        self.init_floating_frame(FrameId::Window(window), layout.geometry, layout.linked, layout.maximized);
        Some(window)
    }

    fn build_floating_item(&mut self, layout: &ItemLayout, seen: &mut HashSet<ContainerId>) -> Option<ContainerId> {
        let id = self.resolve(&layout.name, seen)?;
        let geometry = self.default_float_geometry();
        self.float_container(id, geometry);
        self.init_floating_frame(FrameId::Container(id), layout.geometry, layout.linked, layout.maximized);
        Some(id)
    }

    fn init_floating_frame(&mut self, frame: FrameId, geometry: Option<Rect>, linked: bool, maximized: bool) {
        let geometry = geometry
            .filter(Rect::is_valid)
            .unwrap_or_else(|| self.default_float_geometry());
        let geometry = ensure_on_screen(geometry, &self.screens);
        self.apply_frame_geometry(frame, geometry);
        self.set_frame_linked(frame, linked);
        if maximized {
            self.maximize_frame(frame);
        }
    }

    // -----------------------------------------------------------------------
    // Ops
    // -----------------------------------------------------------------------

    /// Apply layout ops in order. Returns how many of them took effect.
    pub fn update_layout(&mut self, ops: &[LayoutOp]) -> usize {
        profile_function!();
        ops.iter().filter(|op| self.apply_op(op)).count()
    }

    /// Apply a single layout op. Returns `false` if it changed nothing.
    pub fn apply_op(&mut self, op: &LayoutOp) -> bool {
        if let Some(name) = op.item_name() {
            if self.find_container(name).is_none() {
                tracing::warn!(item = %name, "layout op names an unknown item");
                return false;
            }
        }
        let applied = match op {
            LayoutOp::InsertItem { item, target, position } => self.op_insert_item(item, target.as_deref(), *position),
            LayoutOp::InsertBorderItem { item, target, position } => {
                self.op_insert_border_item(item, target.as_deref(), *position)
            }
            LayoutOp::InsertDockBarItem {
                item,
                target,
                position,
                index,
            } => self.op_insert_dock_bar_item(item, target.as_deref(), *position, *index),
            LayoutOp::InsertTab {
                item,
                target,
                index,
                tab_position,
            } => self.op_insert_tab(item, target.as_deref(), *index, *tab_position),
            LayoutOp::FloatItem { item } => self.op_float_item(item),
            LayoutOp::FloatArea { area } => self.op_float_area(area),
            LayoutOp::RemoveItem { item } => self.op_remove_item(item),
            LayoutOp::ExtendItem { item } => self.extend_item(item),
            LayoutOp::RetractItem { item } => self.retract_item(item),
            LayoutOp::Unknown => {
                tracing::warn!("skipping unknown layout op");
                false
            }
        };
        tracing::trace!(?op, applied, "layout op");
        applied
    }

    /// Resolve an op's item and optional target, ignoring a target that
    /// names the item itself.
    fn op_ids(&self, item: &str, target: Option<&str>) -> Option<(ContainerId, Option<ContainerId>)> {
        let id = self.find_container(item)?;
        let target = target.and_then(|t| self.find_container(t)).filter(|t| *t != id);
        Some((id, target))
    }

    /// Free a container for re-plugging. Floating containers stay floating
    /// so a rejected plug leaves them where they were.
    fn release_for_plug(&mut self, id: ContainerId) {
        if self.container_location(id) != ContainerLocation::Floating {
            self.detach_container(id);
        }
    }

    fn plug_container(&mut self, area_id: AreaId, target: Option<&HitTarget>, id: ContainerId, guide: Guide) -> bool {
        let plugged = self.plug_frame_into(area_id, target, FrameId::Container(id), guide);
        if plugged {
            self.post_docked(id);
        }
        plugged
    }

    /// Plug next to a floating container, wrapping it in a window first.
    fn plug_in_context(&mut self, target: ContainerId, id: ContainerId, guide: impl Fn(&HitTarget) -> Guide) -> bool {
        let plugged = self.with_dock_context(target, |manager, area_id| {
            let Some(hit) = manager.area(area_id).and_then(|area| container_target(area, target)) else {
                return false;
            };
            manager.plug_frame_into(area_id, Some(&hit), FrameId::Container(id), guide(&hit))
        });
        if plugged {
            self.post_docked(id);
        }
        plugged
    }

    fn plug_next_to(&mut self, area_id: AreaId, target: ContainerId, id: ContainerId, guide: impl Fn(&HitTarget) -> Guide) -> bool {
        let Some(hit) = self.area(area_id).and_then(|area| container_target(area, target)) else {
            return false;
        };
        self.plug_container(area_id, Some(&hit), id, guide(&hit))
    }

    fn insert_border(&mut self, area_id: AreaId, id: ContainerId, position: InsertPosition) -> bool {
        self.release_for_plug(id);
        let guide = match self.area(area_id) {
            Some(area) if area.root().is_none() => Guide::AreaCenter,
            Some(_) => border_guide(position),
            None => return false,
        };
        self.plug_container(area_id, None, id, guide)
    }

    fn pin_to_dock_bar(&mut self, area_id: AreaId, id: ContainerId, position: DockBarPosition, index: Option<usize>) -> bool {
        self.detach_container(id);
        let Some((area, containers)) = self.area_and_containers(area_id) else {
            return false;
        };
        area.dock_bars.add_container(id, position, index);
        area.mark_dirty(AreaDirty::DOCK_BARS);
        containers.update(id, |c| {
            c.visible = false;
            c.title_bar_visible = true;
        });
        tracing::debug!(item = %containers.name_of(id), ?position, "pinned item to dock bar");
        true
    }

    fn op_insert_item(&mut self, item: &str, target: Option<&str>, position: InsertPosition) -> bool {
        let Some((id, target)) = self.op_ids(item, target) else {
            return false;
        };
        let Some(target) = target else {
            return self.insert_border(AreaId::Primary, id, position);
        };
        let guide = compass_guide(position);
        match self.container_location(target) {
            ContainerLocation::DockBar(area_id, bar) => self.pin_to_dock_bar(area_id, id, bar, None),
            ContainerLocation::Floating => {
                self.release_for_plug(id);
                self.plug_in_context(target, id, |_| guide)
            }
            ContainerLocation::Docked(area_id) => {
                self.release_for_plug(id);
                self.plug_next_to(area_id, target, id, |_| guide)
            }
            ContainerLocation::Unparented => self.insert_border(AreaId::Primary, id, position),
        }
    }

    fn op_insert_border_item(&mut self, item: &str, target: Option<&str>, position: InsertPosition) -> bool {
        let Some((id, target)) = self.op_ids(item, target) else {
            return false;
        };
        match target.map(|t| (t, self.container_location(t))) {
            Some((target, ContainerLocation::Floating)) => {
                self.release_for_plug(id);
                let guide = border_guide(position);
                let plugged = self.with_dock_context(target, |manager, area_id| {
                    manager.plug_frame_into(area_id, None, FrameId::Container(id), guide)
                });
                if plugged {
                    self.post_docked(id);
                }
                plugged
            }
            Some((_, ContainerLocation::Docked(area_id) | ContainerLocation::DockBar(area_id, _))) => {
                self.insert_border(area_id, id, position)
            }
            _ => self.insert_border(AreaId::Primary, id, position),
        }
    }

    fn op_insert_dock_bar_item(
        &mut self,
        item: &str,
        target: Option<&str>,
        position: DockBarPosition,
        index: Option<usize>,
    ) -> bool {
        let Some((id, target)) = self.op_ids(item, target) else {
            return false;
        };
        let area_id = match target.map(|t| self.container_location(t)) {
            Some(ContainerLocation::Docked(area_id) | ContainerLocation::DockBar(area_id, _)) => area_id,
            _ => AreaId::Primary,
        };
        self.pin_to_dock_bar(area_id, id, position, index)
    }

    fn op_insert_tab(
        &mut self,
        item: &str,
        target: Option<&str>,
        index: Option<usize>,
        tab_position: Option<TabPosition>,
    ) -> bool {
        let Some((id, target)) = self.op_ids(item, target) else {
            return false;
        };
        let guide = move |hit: &HitTarget| match (hit, tab_position) {
            (HitTarget::Tabs { .. }, _) | (_, None) => Guide::CompassCenter,
            (_, Some(position)) => tab_guide(position),
        };
        let plugged = match target.map(|t| (t, self.container_location(t))) {
            Some((_, ContainerLocation::DockBar(area_id, bar))) => return self.pin_to_dock_bar(area_id, id, bar, index),
            Some((target, ContainerLocation::Floating)) => {
                self.release_for_plug(id);
                self.plug_in_context(target, id, guide)
            }
            Some((target, ContainerLocation::Docked(area_id))) => {
                self.release_for_plug(id);
                self.plug_next_to(area_id, target, id, guide)
            }
            _ => {
                self.release_for_plug(id);
                let guide = if self.area.root().is_none() {
                    Guide::AreaCenter
                } else {
                    Guide::BorderWest
                };
                self.plug_container(AreaId::Primary, None, id, guide)
            }
        };
        if plugged {
            if let Some(index) = index {
                self.move_tab_to(id, index);
            }
        }
        plugged
    }

    /// Move a tabbed container to `index` within its group.
    fn move_tab_to(&mut self, id: ContainerId, index: usize) {
        let ContainerLocation::Docked(area_id) = self.container_location(id) else {
            return;
        };
        let Some(root) = self.area_mut(area_id).and_then(|area| area.root.as_mut()) else {
            return;
        };
        let Some(slot) = root.find_container(id) else {
            return;
        };
        if let (Some(from), Some(DockWidget::Tabs(tabs))) = (slot.tab, root.node_at_mut(&slot.path)) {
            let to = index.min(tabs.len() - 1);
            tabs.move_tab(from, to);
        }
    }

    fn op_float_item(&mut self, layout: &ItemLayout) -> bool {
        let Some(id) = self.find_container(&layout.name) else {
            return false;
        };
        let was_visible = self.container(id).is_some_and(DockContainer::is_visible);
        match self.container_location(id) {
            ContainerLocation::Floating => {
                self.restore_frame(FrameId::Container(id));
                self.raise_frame(FrameId::Container(id));
            }
            location => {
                if location != ContainerLocation::Unparented {
                    self.detach_container(id);
                }
                let geometry = self.default_float_geometry();
                self.float_container(id, geometry);
            }
        }
        self.init_floating_frame(FrameId::Container(id), layout.geometry, layout.linked, layout.maximized);
        if !was_visible {
            self.post(DockEvent::Shown {
                name: layout.name.clone(),
            });
        }
        true
    }

    fn op_float_area(&mut self, layout: &AreaLayout) -> bool {
        for item in layout.items() {
            if let Some(id) = self.find_container(&item.name) {
                self.detach_container(id);
                self.containers.update(id, DockContainer::reset);
            }
        }
        let mut seen = HashSet::default();
        self.build_floating_area(layout, &mut seen).is_some()
    }

    fn op_remove_item(&mut self, item: &str) -> bool {
        let Some(id) = self.find_container(item) else {
            return false;
        };
        let was_visible = self.container(id).is_some_and(DockContainer::is_visible);
        if !self.detach_container(id) {
            return false;
        }
        self.containers.update(id, |c| c.visible = false);
        if was_visible {
            self.post(DockEvent::Hidden { name: item.to_owned() });
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NamedItem;
    use crate::layout::{DockBarLayout, SplitLayout, TabLayout};
    use crate::types::Orientation;

    fn manager_with(names: &[&str]) -> DockManager {
        let mut manager = DockManager::default();
        manager.set_area_geometry(Rect::new(0, 0, 800, 600));
        manager.set_dock_events_enabled(true);
        for name in names {
            manager.add_item(NamedItem::new(*name)).expect("unique name");
        }
        manager
    }

    fn id(manager: &DockManager, name: &str) -> ContainerId {
        manager.find_container(name).expect("registered item")
    }

    fn primary(root: impl Into<LayoutNode>) -> DockLayout {
        DockLayout::new(vec![AreaLayout::new(root).into()])
    }

    #[test]
    fn nearest_screen_and_clamping() {
        let screens = [Rect::new(0, 0, 1920, 1080), Rect::new(1920, 0, 1280, 1024)];
        assert_eq!(nearest_screen(&screens, IVec2::new(3500, 500)), Some(screens[1]));
        assert_eq!(nearest_screen(&[], IVec2::ZERO), None);

        let inside = Rect::new(100, 100, 300, 200);
        assert_eq!(ensure_on_screen(inside, &screens), inside);
        let lost = Rect::new(4000, -300, 300, 200);
        assert_eq!(ensure_on_screen(lost, &screens), Rect::new(2900, 0, 300, 200));
        let huge = Rect::new(-500, 50, 4000, 200);
        assert_eq!(ensure_on_screen(huge, &screens[..1]).origin(), IVec2::new(0, 50));
        assert_eq!(ensure_on_screen(lost, &[]), lost);
    }

    #[test]
    fn unknown_items_are_rejected_without_changes() {
        let mut manager = manager_with(&["a"]);
        manager.apply_layout(&primary(LayoutNode::item("a"))).expect("known items");
        let err = manager
            .apply_layout(&primary(SplitLayout::horizontal(vec![
                LayoutNode::item("a"),
                LayoutNode::item("ghost"),
                LayoutNode::item("ghost"),
            ])))
            .unwrap_err();
        assert_eq!(err, DockError::UnknownItems(vec!["ghost".into()]));
        assert_eq!(
            manager.dock_area().root(),
            Some(&DockWidget::Container(id(&manager, "a")))
        );
    }

    #[test]
    fn degenerate_nodes_collapse_and_duplicates_are_skipped() {
        let mut manager = manager_with(&["a", "b"]);
        let layout = primary(SplitLayout::vertical(vec![
            TabLayout::new(vec![ItemLayout::new("a")]).into(),
            SplitLayout::horizontal(vec![]).into(),
            LayoutNode::item("a"),
            LayoutNode::item("b"),
        ]));
        manager.apply_layout(&layout).expect("known items");
        let (a, b) = (id(&manager, "a"), id(&manager, "b"));
        let Some(DockWidget::Splitter(splitter)) = manager.dock_area().root() else {
            panic!("expected a splitter root");
        };
        assert_eq!(splitter.orientation(), Orientation::Vertical);
        assert_eq!(splitter.children(), &[DockWidget::Container(a), DockWidget::Container(b)]);
        assert!(manager.container(a).is_some_and(|c| c.is_visible() && c.is_title_bar_visible()));
    }

    #[test]
    fn apply_restores_bars_floating_frames_and_maximized_item() {
        let mut manager = manager_with(&["a", "b", "c", "d", "e"]);
        let layout = DockLayout::new(vec![
            AreaLayout::new(
                TabLayout::new(vec![ItemLayout::new("a"), ItemLayout::new("b").with_maximized(true)])
                    .with_index(1),
            )
            .with_dock_bar(DockBarLayout::new(DockBarPosition::Bottom, vec![ItemLayout::new("c")]))
            .into(),
            ItemLayout::floating("d", Some(Rect::new(10, 10, 200, 100))).into(),
            AreaLayout::new(LayoutNode::item("e"))
                .floating(Some(Rect::new(300, 300, 200, 200)))
                .into(),
        ]);
        manager.apply_layout(&layout).expect("known items");
        let (b, c, d, e) = (id(&manager, "b"), id(&manager, "c"), id(&manager, "d"), id(&manager, "e"));

        assert_eq!(manager.dock_area().maximized(), Some(b));
        assert_eq!(
            manager.container_location(c),
            ContainerLocation::DockBar(AreaId::Primary, DockBarPosition::Bottom)
        );
        assert!(!manager.container(c).is_some_and(DockContainer::is_visible));
        assert_eq!(manager.frame_geometry(d.into()), Some(Rect::new(10, 10, 200, 100)));
        let window = manager.windows().ids()[0];
        assert_eq!(manager.container_location(e), ContainerLocation::Docked(AreaId::Window(window)));
        assert_eq!(manager.frames(), &[FrameId::Container(d), FrameId::Window(window)]);
        assert!(!manager.container(b).is_some_and(DockContainer::is_title_bar_visible));
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn insert_item_next_to_a_docked_target() {
        let mut manager = manager_with(&["a", "b"]);
        manager.apply_layout(&primary(LayoutNode::item("a"))).expect("known items");
        let ops = [LayoutOp::insert_item("b", "a", InsertPosition::Right)];
        assert_eq!(manager.update_layout(&ops), 1);
        let (a, b) = (id(&manager, "a"), id(&manager, "b"));
        let Some(DockWidget::Splitter(splitter)) = manager.dock_area().root() else {
            panic!("expected a splitter root");
        };
        assert_eq!(splitter.orientation(), Orientation::Horizontal);
        assert_eq!(splitter.children(), &[DockWidget::Container(a), DockWidget::Container(b)]);
        assert_eq!(manager.drain_events(), vec![DockEvent::Docked { name: "b".into() }]);
    }

    #[test]
    fn insert_item_next_to_a_floating_target_builds_a_window() {
        let mut manager = manager_with(&["a", "b"]);
        manager
            .apply_layout(&DockLayout::new(vec![
                ItemLayout::floating("a", Some(Rect::new(100, 100, 300, 200))).into(),
            ]))
            .expect("known items");
        assert!(manager.apply_op(&LayoutOp::insert_item("b", "a", InsertPosition::Bottom)));

        let window = manager.windows().ids()[0];
        assert_eq!(manager.frames(), &[FrameId::Window(window)]);
        assert_eq!(manager.window(window).map(|w| w.geometry()), Some(Rect::new(100, 100, 300, 200)));
        let area = AreaId::Window(window);
        assert_eq!(manager.container_location(id(&manager, "a")), ContainerLocation::Docked(area));
        assert_eq!(manager.container_location(id(&manager, "b")), ContainerLocation::Docked(area));
        assert_eq!(
            manager.drain_events(),
            vec![
                DockEvent::Docked { name: "a".into() },
                DockEvent::Docked { name: "b".into() },
            ]
        );
    }

    #[test]
    fn insert_tab_moves_the_new_tab() {
        let mut manager = manager_with(&["a", "b", "c"]);
        manager.apply_layout(&primary(LayoutNode::item("a"))).expect("known items");
        assert!(manager.apply_op(&LayoutOp::insert_tab("b", "a")));
        assert!(manager.apply_op(&LayoutOp::InsertTab {
            item: "c".into(),
            target: Some("a".into()),
            index: Some(0),
            tab_position: None,
        }));
        let ids = [id(&manager, "c"), id(&manager, "a"), id(&manager, "b")];
        let Some(DockWidget::Tabs(tabs)) = manager.dock_area().root() else {
            panic!("expected a tab group");
        };
        assert_eq!(tabs.children(), &ids);
    }

    #[test]
    fn dock_bar_float_and_remove_ops() {
        let mut manager = manager_with(&["a", "b"]);
        manager.apply_layout(&primary(LayoutNode::item("a"))).expect("known items");
        let b = id(&manager, "b");

        assert!(manager.apply_op(&LayoutOp::InsertDockBarItem {
            item: "b".into(),
            target: None,
            position: DockBarPosition::Left,
            index: None,
        }));
        assert_eq!(
            manager.container_location(b),
            ContainerLocation::DockBar(AreaId::Primary, DockBarPosition::Left)
        );

        assert!(manager.apply_op(&LayoutOp::FloatItem {
            item: ItemLayout::floating("b", Some(Rect::new(5, 5, 100, 100))),
        }));
        assert_eq!(manager.container_location(b), ContainerLocation::Floating);
        assert!(manager.apply_op(&LayoutOp::remove_item("b")));
        assert_eq!(manager.container_location(b), ContainerLocation::Unparented);
        assert!(!manager.apply_op(&LayoutOp::remove_item("b")));
        assert!(!manager.apply_op(&LayoutOp::remove_item("ghost")));
        assert!(!manager.apply_op(&LayoutOp::Unknown));
        assert_eq!(
            manager.drain_events(),
            vec![DockEvent::Shown { name: "b".into() }, DockEvent::Hidden { name: "b".into() }]
        );
    }
}
