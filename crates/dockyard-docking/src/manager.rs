//! The dock manager: sole owner of containers, windows and dock areas.
//!
//! Everything else in the crate works on handles and borrowed areas; the
//! manager ties them together. It keeps the floating frames in Z-order,
//! maintains the proximity graph, runs the drag pipeline that feeds the
//! overlay and the mutation engine, and queues [`DockEvent`]s for the
//! embedding application.
//!
//! Whole-layout application and layout ops live in
//! [`layout_builder`](crate::layout_builder); snapshots are produced by
//! [`layout_saver`](crate::layout_saver).

use crate::area::{AreaDirty, DockArea};
use crate::config::DockConfig;
use crate::container::{ContainerLocation, Containers, DockContainer};
use crate::dock_bar::SlideKind;
use crate::drag::DragManager;
use crate::error::{DockError, DockResult};
use crate::event::{DockEvent, EventQueue};
use crate::geometry::{HitTarget, LayoutMetrics};
use crate::item::DockItem;
use crate::layout::{DockLayout, DockLayoutItem};
use crate::layout_builder::nearest_screen;
use crate::layout_handling::{PlugFrame, container_target, plug_frame, unplug_container};
use crate::layout_saver::LayoutSaver;
use crate::overlay::DockOverlay;
use crate::proximity::{FrameLookup, ProximityHandler};
use crate::tree::DockWidget;
use crate::types::{AreaId, ContainerId, FrameId, Guide, WindowId};
use crate::window::{DockWindow, Windows};
use dockyard_core::geometry::Rect;
use dockyard_core::math::IVec2;
use dockyard_core::profiling::profile_function;
use indexmap::IndexMap;
use std::fmt;
use std::time::Duration;

/// Frame geometry and link flags as seen by the proximity graph.
struct FrameView<'a> {
    containers: &'a Containers,
    windows: &'a Windows,
}

impl FrameLookup for FrameView<'_> {
    fn frame_geometry(&self, frame: FrameId) -> Option<Rect> {
        match frame {
            FrameId::Container(id) => self
                .containers
                .get(id)
                .filter(|c| c.is_floating())
                .map(DockContainer::geometry),
            FrameId::Window(id) => self.windows.get(id).map(DockWindow::geometry),
        }
    }

    fn frame_linked(&self, frame: FrameId) -> bool {
        match frame {
            FrameId::Container(id) => self.containers.get(id).is_some_and(DockContainer::is_linked),
            FrameId::Window(id) => self.windows.get(id).is_some_and(DockWindow::is_linked),
        }
    }
}

/// A floating container temporarily wrapped in a window so that it offers a
/// dock area to plug into.
struct DockContext {
    window: WindowId,
    target: ContainerId,
    maximized: bool,
    linked: bool,
}

pub struct DockManager {
    pub(crate) config: DockConfig,
    pub(crate) metrics: LayoutMetrics,
    pub(crate) containers: Containers,
    pub(crate) windows: Windows,
    pub(crate) area: DockArea,
    pub(crate) names: IndexMap<String, ContainerId>,
    pub(crate) overlay: DockOverlay,
    pub(crate) proximity: ProximityHandler,
    /// Floating frames, bottom to top.
    pub(crate) z_order: Vec<FrameId>,
    pub(crate) drags: DragManager,
    pub(crate) screens: Vec<Rect>,
    pub(crate) events: EventQueue,
    pub(crate) pending_closes: Vec<WindowId>,
}

impl Default for DockManager {
    fn default() -> Self {
        Self::new(DockConfig::default())
    }
}

impl fmt::Debug for DockManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockManager")
            .field("items", &self.names.keys().collect::<Vec<_>>())
            .field("area", &self.area)
            .field("windows", &self.windows)
            .field("z_order", &self.z_order)
            .finish_non_exhaustive()
    }
}

impl DockManager {
    pub fn new(config: DockConfig) -> Self {
        Self {
            metrics: LayoutMetrics::from(&config),
            overlay: DockOverlay::new(&config),
            drags: DragManager::new(config.drag_threshold),
            config,
            containers: Containers::default(),
            windows: Windows::default(),
            area: DockArea::new(),
            names: IndexMap::new(),
            proximity: ProximityHandler::new(),
            z_order: Vec::new(),
            screens: Vec::new(),
            events: EventQueue::default(),
            pending_closes: Vec::new(),
        }
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Register a dock item. It starts out unparented and hidden.
    pub fn add_item(&mut self, item: impl DockItem + 'static) -> DockResult<ContainerId> {
        let name = item.name().to_owned();
        if self.names.contains_key(&name) {
            return Err(DockError::DuplicateItem(name));
        }
        let id = self.containers.insert(DockContainer::new(Box::new(item)));
        tracing::debug!(item = %name, "registered dock item");
        self.names.insert(name, id);
        Ok(id)
    }

    /// Take an item out of wherever it lives and forget it.
    pub fn remove_item(&mut self, name: &str) -> bool {
        let Some(id) = self.names.shift_remove(name) else {
            return false;
        };
        if self.drags.dragged_frame() == Some(FrameId::Container(id)) {
            self.drags.cancel();
            self.overlay.hide();
        }
        self.detach_container(id);
        self.containers.remove(id);
        tracing::debug!(item = %name, "removed dock item");
        true
    }

    /// Remove every item and discard every floating window.
    pub fn clear_items(&mut self) {
        let names: Vec<String> = self.names.keys().cloned().collect();
        for name in names {
            self.remove_item(&name);
        }
        for id in self.windows.ids() {
            self.discard_window(id);
        }
    }

    /// Tear the manager down: all items and windows go away, pending
    /// feedback is cancelled and queued events are dropped.
    pub fn destroy(&mut self) {
        self.drags.cancel();
        self.overlay.hide();
        self.clear_items();
        self.events.drain();
        self.events.set_enabled(false);
    }

    pub fn find_container(&self, name: &str) -> Option<ContainerId> {
        self.names.get(name).copied()
    }

    /// Registered item names in registration order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.keys().map(String::as_str)
    }

    pub fn container(&self, id: ContainerId) -> Option<&DockContainer> {
        self.containers.get(id)
    }

    pub fn containers(&self) -> &Containers {
        &self.containers
    }

    pub fn window(&self, id: WindowId) -> Option<&DockWindow> {
        self.windows.get(id)
    }

    pub fn windows(&self) -> &Windows {
        &self.windows
    }

    /// The primary dock area.
    pub fn dock_area(&self) -> &DockArea {
        &self.area
    }

    pub fn dock_area_mut(&mut self) -> &mut DockArea {
        &mut self.area
    }

    pub fn area(&self, id: AreaId) -> Option<&DockArea> {
        match id {
            AreaId::Primary => Some(&self.area),
            AreaId::Window(w) => self.windows.get(w).map(DockWindow::area),
        }
    }

    pub(crate) fn area_mut(&mut self, id: AreaId) -> Option<&mut DockArea> {
        match id {
            AreaId::Primary => Some(&mut self.area),
            AreaId::Window(w) => self.windows.get_mut(w).map(DockWindow::area_mut),
        }
    }

    pub(crate) fn area_and_containers(&mut self, id: AreaId) -> Option<(&mut DockArea, &mut Containers)> {
        let area = match id {
            AreaId::Primary => &mut self.area,
            AreaId::Window(w) => &mut self.windows.get_mut(w)?.area,
        };
        Some((area, &mut self.containers))
    }

    /// The primary area followed by every window's area.
    pub fn areas(&self) -> impl Iterator<Item = (AreaId, &DockArea)> + '_ {
        std::iter::once((AreaId::Primary, &self.area)).chain(
            self.windows
                .iter()
                .map(|(id, window)| (AreaId::Window(id), window.area())),
        )
    }

    /// Floating frames from bottom to top.
    pub fn frames(&self) -> &[FrameId] {
        &self.z_order
    }

    pub fn overlay(&self) -> &DockOverlay {
        &self.overlay
    }

    pub fn proximity(&self) -> &ProximityHandler {
        &self.proximity
    }

    pub fn drags(&self) -> &DragManager {
        &self.drags
    }

    pub fn container_location(&self, id: ContainerId) -> ContainerLocation {
        let Some(container) = self.containers.get(id) else {
            return ContainerLocation::Unparented;
        };
        if container.is_floating() {
            return ContainerLocation::Floating;
        }
        for (area_id, area) in self.areas() {
            if area.tree_contains(id) {
                return ContainerLocation::Docked(area_id);
            }
            if let Some((position, _)) = area.dock_bars().position_of(id) {
                return ContainerLocation::DockBar(area_id, position);
            }
        }
        ContainerLocation::Unparented
    }

    // -----------------------------------------------------------------------
    // Geometry
    // -----------------------------------------------------------------------

    pub fn set_area_geometry(&mut self, geometry: Rect) {
        self.area.set_geometry(geometry);
    }

    /// Display rects used to keep restored frames on screen and to size
    /// maximized ones.
    pub fn set_screens(&mut self, screens: Vec<Rect>) {
        self.screens = screens;
    }

    pub fn screens(&self) -> &[Rect] {
        &self.screens
    }

    /// Global geometry of a floating frame.
    pub fn frame_geometry(&self, frame: FrameId) -> Option<Rect> {
        self.frame_view().frame_geometry(frame)
    }

    pub fn is_frame_linked(&self, frame: FrameId) -> bool {
        self.frame_view().frame_linked(frame)
    }

    fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            containers: &self.containers,
            windows: &self.windows,
        }
    }

    /// Rect of a container inside its area's layout.
    pub fn docked_geometry(&self, id: ContainerId) -> Option<Rect> {
        let ContainerLocation::Docked(area_id) = self.container_location(id) else {
            return None;
        };
        self.area(area_id)?
            .layout_geometry(&self.metrics)
            .container_rect(id)
    }

    pub(crate) fn default_float_geometry(&self) -> Rect {
        let size = self.config.default_frame_size;
        let half = IVec2::new(size.width / 2, size.height / 2);
        let center = if self.area.geometry().is_valid() {
            self.area.geometry().center()
        } else {
            half
        };
        Rect::from_origin_size(center - half, size)
    }

    fn screen_for(&self, rect: Rect) -> Rect {
        nearest_screen(&self.screens, rect.center()).unwrap_or(self.area.geometry())
    }

    /// Move or resize a floating frame.
    pub fn set_frame_geometry(&mut self, frame: FrameId, geometry: Rect) -> bool {
        if !self.apply_frame_geometry(frame, geometry) {
            return false;
        }
        self.update_links(frame);
        true
    }

    pub(crate) fn apply_frame_geometry(&mut self, frame: FrameId, geometry: Rect) -> bool {
        match frame {
            FrameId::Container(id) => match self.containers.get_mut(id) {
                Some(container) if container.is_floating() => {
                    container.geometry = geometry;
                    true
                }
                _ => false,
            },
            FrameId::Window(id) => match self.windows.get_mut(id) {
                Some(window) => {
                    window.set_geometry(geometry);
                    true
                }
                None => false,
            },
        }
    }

    /// Recompute the links of a frame after the embedder resized it. A frame
    /// that no longer touches any linked neighbour drops its link flag.
    pub fn frame_resized(&mut self, frame: FrameId) {
        self.update_links(frame);
        if self.proximity.has_linked_frames(frame) {
            return;
        }
        match frame {
            FrameId::Container(id) => self.containers.update(id, |c| c.linked = false),
            FrameId::Window(id) => {
                if let Some(window) = self.windows.get_mut(id) {
                    window.linked = false;
                }
            }
        }
    }

    pub fn set_frame_linked(&mut self, frame: FrameId, linked: bool) -> bool {
        let changed = match frame {
            FrameId::Container(id) => match self.containers.get_mut(id) {
                Some(container) if container.is_floating() => {
                    container.linked = linked;
                    true
                }
                _ => false,
            },
            FrameId::Window(id) => match self.windows.get_mut(id) {
                Some(window) => {
                    window.linked = linked;
                    true
                }
                None => false,
            },
        };
        if changed {
            self.update_links(frame);
        }
        changed
    }

    pub(crate) fn update_links(&mut self, frame: FrameId) {
        let view = FrameView {
            containers: &self.containers,
            windows: &self.windows,
        };
        self.proximity.update_links(frame, &view);
    }

    // -----------------------------------------------------------------------
    // Frame bookkeeping
    // -----------------------------------------------------------------------

    /// Make a container a visible floating frame on top of the Z-order.
    pub(crate) fn float_container(&mut self, id: ContainerId, geometry: Rect) {
        let Some(container) = self.containers.get_mut(id) else {
            return;
        };
        container.float();
        container.visible = true;
        container.geometry = geometry;
        self.track_floating(FrameId::Container(id), None);
    }

    /// Add a frame to the proximity graph and the Z-order, at `z` or on top.
    fn track_floating(&mut self, frame: FrameId, z: Option<usize>) {
        self.proximity.add_frame(frame);
        if !self.z_order.contains(&frame) {
            let index = z.unwrap_or(self.z_order.len()).min(self.z_order.len());
            self.z_order.insert(index, frame);
        }
        self.update_links(frame);
    }

    fn untrack_floating(&mut self, frame: FrameId) -> Option<usize> {
        self.proximity.remove_frame(frame);
        let z = self.z_order.iter().position(|f| *f == frame);
        self.z_order.retain(|f| *f != frame);
        z
    }

    pub(crate) fn new_window(&mut self, geometry: Rect) -> WindowId {
        let mut window = DockWindow::new(geometry, self.config.window_margin);
        window.visible = true;
        let id = self.windows.insert(window);
        self.track_floating(FrameId::Window(id), None);
        id
    }

    /// Drop a window and its area. Containers still inside are left as they
    /// are; callers re-home them.
    pub(crate) fn discard_window(&mut self, id: WindowId) -> Option<DockWindow> {
        self.untrack_floating(FrameId::Window(id));
        self.pending_closes.retain(|w| *w != id);
        let window = self.windows.remove(id)?;
        tracing::debug!(?id, "discarded dock window");
        Some(window)
    }

    /// Hide a window whose area ran empty and queue it for closing.
    fn schedule_close_if_empty(&mut self, area: AreaId) {
        let AreaId::Window(id) = area else {
            return;
        };
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if !window.area.is_empty() {
            return;
        }
        window.visible = false;
        self.untrack_floating(FrameId::Window(id));
        if !self.pending_closes.contains(&id) {
            self.pending_closes.push(id);
        }
    }

    fn run_pending_closes(&mut self) {
        for id in std::mem::take(&mut self.pending_closes) {
            if self.windows.get(id).is_some_and(|w| w.area().is_empty()) {
                self.discard_window(id);
            }
        }
    }

    /// Take a container out of its tree, dock bar or floating state. It ends
    /// up unparented and hidden.
    pub(crate) fn detach_container(&mut self, id: ContainerId) -> bool {
        match self.container_location(id) {
            ContainerLocation::Unparented => false,
            ContainerLocation::Floating => {
                self.untrack_floating(FrameId::Container(id));
                self.containers.update(id, |c| {
                    c.unfloat();
                    c.visible = false;
                });
                true
            }
            ContainerLocation::Docked(area_id) => {
                let unplugged = self
                    .area_and_containers(area_id)
                    .is_some_and(|(area, containers)| unplug_container(area, containers, id));
                self.schedule_close_if_empty(area_id);
                unplugged
            }
            ContainerLocation::DockBar(area_id, _) => {
                if let Some(area) = self.area_mut(area_id) {
                    area.dock_bars.remove_container(id);
                    area.mark_dirty(AreaDirty::DOCK_BARS);
                }
                self.containers.update(id, |c| {
                    c.visible = false;
                    c.title_bar_visible = true;
                });
                self.schedule_close_if_empty(area_id);
                true
            }
        }
    }

    pub(crate) fn post(&mut self, event: DockEvent) {
        self.events.push(event);
    }

    pub(crate) fn post_docked(&mut self, id: ContainerId) {
        let name = self.containers.name_of(id);
        self.post(DockEvent::Docked { name });
    }

    // -----------------------------------------------------------------------
    // Z-order
    // -----------------------------------------------------------------------

    /// Raise a floating frame to the top. Frames linked to it are raised
    /// with it, keeping their relative order below it.
    pub fn raise_frame(&mut self, frame: FrameId) {
        if !self.z_order.contains(&frame) {
            return;
        }
        let group = if self.is_frame_linked(frame) {
            self.proximity.linked_frames(frame)
        } else {
            Vec::new()
        };
        let (raised, mut rest): (Vec<FrameId>, Vec<FrameId>) = self
            .z_order
            .iter()
            .copied()
            .filter(|f| *f != frame)
            .partition(|f| group.contains(f));
        rest.extend(raised);
        rest.push(frame);
        self.z_order = rest;
    }

    // -----------------------------------------------------------------------
    // Drag pipeline
    // -----------------------------------------------------------------------

    /// Record a title bar press on a frame. Docked containers stay in place
    /// until the pointer crosses the drag threshold.
    pub fn begin_frame_drag(&mut self, frame: FrameId, press_pos: IVec2) -> bool {
        let origin = match frame {
            FrameId::Container(id) => {
                let Some(container) = self.containers.get(id) else {
                    return false;
                };
                if container.is_floating() {
                    container.geometry().origin()
                } else {
                    match self.docked_geometry(id) {
                        Some(rect) => rect.origin(),
                        None => return false,
                    }
                }
            }
            FrameId::Window(id) => match self.windows.get(id) {
                Some(window) => window.geometry().origin(),
                None => return false,
            },
        };
        self.drags.start(frame, press_pos, press_pos - origin);
        tracing::trace!(?frame, "frame drag pending");
        true
    }

    /// Feed a pointer move into the current drag. Returns `true` while a
    /// drag is active.
    pub fn frame_drag_moved(&mut self, pos: IVec2) -> bool {
        profile_function!();
        let activated = self.drags.update(pos);
        let Some(drag) = self.drags.drag_state().cloned() else {
            return false;
        };
        if !drag.is_active {
            return false;
        }
        if activated {
            self.start_frame_move(drag.frame, drag.press_pos, drag.grab_offset);
        }
        let Some(drag) = self.drags.drag_state().cloned() else {
            return false;
        };
        self.drag_move_frame(drag.frame, drag.target_origin(), pos);
        true
    }

    /// Finish the current drag, docking the frame if it was released over a
    /// guide. Returns whether it was docked.
    pub fn end_frame_drag(&mut self, pos: IVec2) -> bool {
        let Some(drag) = self.drags.end() else {
            return false;
        };
        if !drag.is_active {
            return false;
        }
        self.drag_release_frame(drag.frame, pos)
    }

    /// Turn a threshold-crossing press into a move: docked containers are
    /// torn out and floated, maximized frames drop back to normal size.
    fn start_frame_move(&mut self, frame: FrameId, press_pos: IVec2, grab_offset: IVec2) {
        let mut offset = grab_offset;
        if let FrameId::Container(id) = frame {
            let docked = self.containers.get(id).is_some_and(|c| !c.is_floating());
            if docked {
                let size = self
                    .docked_geometry(id)
                    .filter(Rect::is_valid)
                    .map_or(self.config.default_frame_size, |r| r.size());
                self.detach_container(id);
                self.float_container(id, Rect::from_origin_size(press_pos - offset, size));
                let name = self.containers.name_of(id);
                tracing::debug!(item = %name, "tore container out of its layout");
                self.post(DockEvent::Undocked { name });
            }
        }
        if let Some((maximized, normal)) = self.maximized_frame_geometry(frame) {
            offset.x = if maximized.width > 0 {
                offset.x * normal.width / maximized.width
            } else {
                0
            };
            let restored = normal.moved_to(press_pos - offset);
            self.restore_frame(frame);
            self.apply_frame_geometry(frame, restored);
        }
        self.drags.retarget(frame, offset);
        self.raise_frame(frame);
    }

    fn maximized_frame_geometry(&self, frame: FrameId) -> Option<(Rect, Rect)> {
        match frame {
            FrameId::Container(id) => self
                .containers
                .get(id)
                .filter(|c| c.is_floating() && c.is_maximized())
                .map(|c| (c.geometry(), c.normal_geometry())),
            FrameId::Window(id) => self
                .windows
                .get(id)
                .filter(|w| w.is_maximized())
                .map(|w| (w.geometry(), w.normal_geometry())),
        }
    }

    /// Move a floating frame during a drag. A linked frame drags its whole
    /// group along; an unlinked frame snaps to nearby frames and drives the
    /// overlay.
    pub fn drag_move_frame(&mut self, frame: FrameId, target_pos: IVec2, mouse_pos: IVec2) {
        profile_function!();
        let Some(geometry) = self.frame_geometry(frame) else {
            return;
        };
        if self.is_frame_linked(frame) && self.proximity.has_linked_frames(frame) {
            let delta = target_pos - geometry.origin();
            let mut group = self.proximity.linked_frames(frame);
            group.push(frame);
            for member in group {
                if let Some(rect) = self.frame_geometry(member) {
                    self.apply_frame_geometry(member, rect.translated(delta));
                }
            }
            self.overlay.hide();
            return;
        }

        let snap = self.config.snap_distance();
        let target = geometry.moved_to(target_pos);
        let others: Vec<Rect> = self
            .proximity
            .proximal_frames(target, snap, &self.frame_view())
            .into_iter()
            .filter(|other| *other != frame)
            .filter_map(|other| self.frame_geometry(other))
            .collect();
        let origin = snap_origin(target, &others, snap);
        self.apply_frame_geometry(frame, target.moved_to(origin));
        self.update_links(frame);
        self.hover_overlay(frame, mouse_pos);
    }

    /// Point the overlay at whatever lies under the pointer: floating frames
    /// top down, then the primary area.
    fn hover_overlay(&mut self, frame: FrameId, pos: IVec2) {
        for sibling in self.z_order.iter().rev().copied() {
            if sibling == frame {
                continue;
            }
            match sibling {
                FrameId::Window(id) => {
                    let Some(window) = self.windows.get(id) else {
                        continue;
                    };
                    if window.is_visible() && window.geometry().contains(pos) {
                        hover_area(&mut self.overlay, window.area(), pos, &self.metrics);
                        return;
                    }
                }
                FrameId::Container(id) => {
                    let Some(container) = self.containers.get(id) else {
                        continue;
                    };
                    if container.is_visible() && container.geometry().contains(pos) {
                        self.overlay.mouse_over_widget(container.geometry(), pos, false);
                        return;
                    }
                }
            }
        }
        if self.area.geometry().contains(pos) {
            hover_area(&mut self.overlay, &self.area, pos, &self.metrics);
            return;
        }
        self.overlay.hide();
    }

    /// Drop a dragged frame at `pos`. Returns whether it was docked.
    pub fn drag_release_frame(&mut self, frame: FrameId, pos: IVec2) -> bool {
        profile_function!();
        self.overlay.hide();
        let guide = self.overlay.guide_at(pos);
        if guide == Guide::NoGuide {
            return false;
        }
        if self.is_frame_linked(frame) && self.proximity.has_linked_frames(frame) {
            tracing::trace!(?frame, "linked frames do not dock");
            return false;
        }

        let mut hit = None;
        for sibling in self.z_order.iter().rev().copied() {
            if sibling == frame {
                continue;
            }
            if self.frame_geometry(sibling).is_some_and(|r| r.contains(pos)) {
                hit = Some(sibling);
                break;
            }
        }

        let docked = match hit {
            Some(FrameId::Container(target)) => self.with_dock_context(target, |manager, area_id| {
                let target = manager
                    .area(area_id)
                    .and_then(|area| container_target(area, target));
                manager.plug_frame_into(area_id, target.as_ref(), frame, guide)
            }),
            Some(FrameId::Window(id)) => self.drop_into_area(AreaId::Window(id), frame, guide, pos),
            None if self.area.geometry().contains(pos) => self.drop_into_area(AreaId::Primary, frame, guide, pos),
            None => false,
        };
        if docked {
            if let FrameId::Container(id) = frame {
                self.post_docked(id);
            }
            tracing::debug!(?frame, ?guide, "docked frame");
        }
        docked
    }

    fn drop_into_area(&mut self, area_id: AreaId, frame: FrameId, guide: Guide, pos: IVec2) -> bool {
        let Some(area) = self.area(area_id) else {
            return false;
        };
        if area.maximized().is_some() {
            return false;
        }
        let target = area.hit_test(pos, &self.metrics);
        self.plug_frame_into(area_id, target.as_ref(), frame, guide)
    }

    /// Plug a container or a whole window into an area. A window that gives
    /// up its contents is discarded.
    pub(crate) fn plug_frame_into(
        &mut self,
        area_id: AreaId,
        target: Option<&HitTarget>,
        frame: FrameId,
        guide: Guide,
    ) -> bool {
        match frame {
            FrameId::Container(id) => {
                let Some((area, containers)) = self.area_and_containers(area_id) else {
                    return false;
                };
                if !plug_frame(area, containers, target, PlugFrame::Container(id), guide) {
                    return false;
                }
                self.untrack_floating(frame);
                true
            }
            FrameId::Window(id) => {
                if area_id == AreaId::Window(id) {
                    return false;
                }
                let Some(mut source) = self.windows.get_mut(id).map(|w| std::mem::take(&mut w.area)) else {
                    return false;
                };
                let plugged = self
                    .area_and_containers(area_id)
                    .is_some_and(|(area, containers)| {
                        plug_frame(area, containers, target, PlugFrame::Area(&mut source), guide)
                    });
                if let Some(window) = self.windows.get_mut(id) {
                    window.area = source;
                }
                if plugged {
                    self.discard_window(id);
                }
                plugged
            }
        }
    }

    /// Run `f` against the area of a temporary window wrapping the floating
    /// container `target`. If `f` fails the window is unwound and the
    /// container floats again exactly where it was.
    pub(crate) fn with_dock_context(
        &mut self,
        target: ContainerId,
        f: impl FnOnce(&mut Self, AreaId) -> bool,
    ) -> bool {
        let Some(context) = self.open_dock_context(target) else {
            return false;
        };
        let area_id = AreaId::Window(context.window);
        let done = f(self, area_id);
        self.close_dock_context(context, done);
        done
    }

    fn open_dock_context(&mut self, target: ContainerId) -> Option<DockContext> {
        let container = self.containers.get(target).filter(|c| c.is_floating())?;
        let maximized = container.is_maximized();
        let linked = container.is_linked();
        let z = self.untrack_floating(FrameId::Container(target));
        self.containers.update(target, DockContainer::unfloat);
        let geometry = self.containers.get(target)?.geometry();

        let mut window = DockWindow::new(geometry, self.config.window_margin);
        window.visible = true;
        let id = self.windows.insert(window);
        let (area, containers) = self.area_and_containers(AreaId::Window(id))?;
        let plugged = plug_frame(area, containers, None, PlugFrame::Container(target), Guide::AreaCenter);
        debug_assert!(plugged, "a fresh window area takes any container");
        self.track_floating(FrameId::Window(id), z);
        Some(DockContext {
            window: id,
            target,
            maximized,
            linked,
        })
    }

    fn close_dock_context(&mut self, context: DockContext, done: bool) {
        let DockContext {
            window,
            target,
            maximized,
            linked,
        } = context;
        if done {
            self.post_docked(target);
            if maximized {
                self.set_window_maximized(window, true);
            }
            return;
        }
        let geometry = self.windows.get(window).map(DockWindow::geometry);
        if let Some((area, containers)) = self.area_and_containers(AreaId::Window(window)) {
            unplug_container(area, containers, target);
        }
        let z = self.z_order.iter().position(|f| *f == FrameId::Window(window));
        self.discard_window(window);
        let Some(container) = self.containers.get_mut(target) else {
            return;
        };
        container.float();
        container.visible = true;
        container.linked = linked;
        if let Some(geometry) = geometry {
            container.geometry = geometry;
        }
        self.track_floating(FrameId::Container(target), z);
        if maximized {
            self.maximize_container(target);
        }
    }

    // -----------------------------------------------------------------------
    // Closing
    // -----------------------------------------------------------------------

    /// Close a container. The item may veto; otherwise the container is
    /// taken out of the layout and hidden, and stays registered.
    pub fn close_container(&mut self, id: ContainerId) -> bool {
        let Some(container) = self.containers.get_mut(id) else {
            return false;
        };
        if !container.closable() || !container.item_mut().request_close() {
            tracing::debug!(item = %container.name(), "close refused");
            return false;
        }
        self.detach_container(id);
        self.containers.update(id, DockContainer::reset);
        let name = self.containers.name_of(id);
        tracing::debug!(item = %name, "closed container");
        self.post(DockEvent::Closed { name });
        true
    }

    /// Close a floating window. If any item is not closable or refuses,
    /// nothing changes. Otherwise every container spills out as a floating
    /// frame at the place it occupied, and the window is discarded.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        let ids = window.area().containers();
        let layout = window.area().layout_geometry(&self.metrics);
        let fallback = Rect::from_origin_size(window.geometry().origin(), self.config.default_frame_size);
        let spill: Vec<(ContainerId, Rect)> = ids
            .iter()
            .map(|c| {
                let rect = layout
                    .container_rect(*c)
                    .filter(Rect::is_valid)
                    .unwrap_or(fallback);
                (*c, rect)
            })
            .collect();

        if ids
            .iter()
            .any(|c| self.containers.get(*c).is_some_and(|c| !c.closable()))
        {
            tracing::debug!(?id, "window holds a non-closable item");
            return false;
        }
        for container in &ids {
            let refused = self
                .containers
                .get_mut(*container)
                .is_some_and(|c| !c.item_mut().request_close());
            if refused {
                tracing::debug!(?id, "window close refused by an item");
                return false;
            }
        }

        let z = self.z_order.iter().position(|f| *f == FrameId::Window(id));
        self.discard_window(id);
        for (offset, (container, rect)) in spill.into_iter().enumerate() {
            self.containers.update(container, |c| {
                c.reset();
                c.float();
                c.visible = true;
                c.geometry = rect;
            });
            self.track_floating(FrameId::Container(container), z.map(|z| z + offset));
        }
        true
    }

    // -----------------------------------------------------------------------
    // Maximize
    // -----------------------------------------------------------------------

    /// Maximize a floating container to its screen, or a docked container
    /// to fill its area.
    pub fn maximize_container(&mut self, id: ContainerId) -> bool {
        match self.container_location(id) {
            ContainerLocation::Floating => {
                let Some(geometry) = self.containers.get(id).filter(|c| !c.is_maximized()).map(|c| c.geometry())
                else {
                    return false;
                };
                let screen = self.screen_for(geometry);
                self.containers.update(id, |c| {
                    c.normal_geometry = Some(geometry);
                    c.geometry = screen;
                    c.maximized = true;
                });
                self.update_links(FrameId::Container(id));
                true
            }
            ContainerLocation::Docked(area_id) => {
                let Some(area) = self.area_mut(area_id) else {
                    return false;
                };
                let previous = area.maximized.replace(id);
                area.mark_dirty(AreaDirty::MAXIMIZED);
                if let Some(previous) = previous.filter(|p| *p != id) {
                    self.containers.update(previous, |c| c.maximized = false);
                }
                self.containers.update(id, |c| c.maximized = true);
                true
            }
            _ => false,
        }
    }

    pub fn restore_container(&mut self, id: ContainerId) -> bool {
        match self.container_location(id) {
            ContainerLocation::Floating => self.restore_frame(FrameId::Container(id)),
            ContainerLocation::Docked(area_id) => {
                let Some(area) = self.area_mut(area_id) else {
                    return false;
                };
                if area.maximized != Some(id) {
                    return false;
                }
                area.maximized = None;
                area.mark_dirty(AreaDirty::MAXIMIZED);
                self.containers.update(id, |c| c.maximized = false);
                true
            }
            _ => false,
        }
    }

    pub fn set_window_maximized(&mut self, id: WindowId, maximized: bool) -> bool {
        let Some(screen) = self.windows.get(id).map(|w| self.screen_for(w.geometry())) else {
            return false;
        };
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        if window.maximized == maximized {
            return false;
        }
        if maximized {
            window.normal_geometry = Some(window.geometry);
            window.maximized = true;
            window.set_geometry(screen);
        } else {
            let normal = window.normal_geometry.take().unwrap_or(window.geometry);
            window.maximized = false;
            window.set_geometry(normal);
        }
        self.update_links(FrameId::Window(id));
        true
    }

    pub(crate) fn maximize_frame(&mut self, frame: FrameId) -> bool {
        match frame {
            FrameId::Container(id) => self.maximize_container(id),
            FrameId::Window(id) => self.set_window_maximized(id, true),
        }
    }

    /// Bring a maximized floating frame back to its normal geometry.
    pub(crate) fn restore_frame(&mut self, frame: FrameId) -> bool {
        match frame {
            FrameId::Container(id) => {
                let Some(container) = self.containers.get_mut(id).filter(|c| c.is_floating() && c.is_maximized())
                else {
                    return false;
                };
                container.maximized = false;
                if let Some(normal) = container.normal_geometry.take() {
                    container.geometry = normal;
                }
                self.update_links(frame);
                true
            }
            FrameId::Window(id) => self.set_window_maximized(id, false),
        }
    }

    // -----------------------------------------------------------------------
    // Dock bars and tabs
    // -----------------------------------------------------------------------

    /// Slide a pinned item out of its dock bar. Another extended item in the
    /// same area slides back in first.
    pub fn extend_item(&mut self, name: &str) -> bool {
        let Some(id) = self.find_container(name) else {
            return false;
        };
        let ContainerLocation::DockBar(area_id, _) = self.container_location(id) else {
            return false;
        };
        if let Some(other) = self
            .area(area_id)
            .and_then(|a| a.dock_bars().extended())
            .filter(|other| *other != id)
        {
            self.retract_container(area_id, other);
        }
        let hint = self.slide_hint(id);
        let duration = self.config.slide_duration;
        let Some(area) = self.area_mut(area_id) else {
            return false;
        };
        let pane = area.geometry();
        if area.dock_bars.extend(id, pane, hint, duration).is_none() {
            return false;
        }
        self.containers.update(id, |c| c.visible = true);
        self.post(DockEvent::Extended { name: name.to_owned() });
        true
    }

    /// Slide an extended item back into its dock bar. It is hidden once the
    /// slide finishes.
    pub fn retract_item(&mut self, name: &str) -> bool {
        let Some(id) = self.find_container(name) else {
            return false;
        };
        let ContainerLocation::DockBar(area_id, _) = self.container_location(id) else {
            return false;
        };
        self.retract_container(area_id, id)
    }

    pub fn toggle_item(&mut self, name: &str) -> bool {
        let Some(id) = self.find_container(name) else {
            return false;
        };
        let extended = self.areas().any(|(_, area)| area.dock_bars().extended() == Some(id));
        if extended {
            self.retract_item(name)
        } else {
            self.extend_item(name)
        }
    }

    fn retract_container(&mut self, area_id: AreaId, id: ContainerId) -> bool {
        let hint = self.slide_hint(id);
        let duration = self.config.slide_duration;
        let Some(area) = self.area_mut(area_id) else {
            return false;
        };
        let pane = area.geometry();
        if !area.dock_bars.retract(id, pane, hint, duration) {
            return false;
        }
        let name = self.containers.name_of(id);
        self.post(DockEvent::Retracted { name });
        true
    }

    fn slide_hint(&self, id: ContainerId) -> dockyard_core::geometry::Size {
        self.containers
            .get(id)
            .map_or(self.config.default_frame_size, |c| c.size_hint(self.config.default_frame_size))
    }

    /// Make a tabbed item the current tab of its group.
    pub fn select_tab(&mut self, name: &str) -> bool {
        let Some(id) = self.find_container(name) else {
            return false;
        };
        let ContainerLocation::Docked(area_id) = self.container_location(id) else {
            return false;
        };
        let Some(root) = self.area_mut(area_id).and_then(|area| area.root.as_mut()) else {
            return false;
        };
        let Some(slot) = root.find_container(id) else {
            return false;
        };
        let (Some(index), Some(DockWidget::Tabs(tabs))) = (slot.tab, root.node_at_mut(&slot.path)) else {
            return false;
        };
        let previous = tabs.current();
        tabs.set_current_index(index);
        if let Some(previous) = previous.filter(|p| *p != id) {
            let previous = self.containers.name_of(previous);
            self.post(DockEvent::TabSelected {
                current: name.to_owned(),
                previous,
            });
        }
        true
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    /// Snapshot the primary area followed by the floating frames in
    /// Z-order.
    pub fn save_layout(&self) -> DockLayout {
        profile_function!();
        let saver = LayoutSaver::new(&self.containers, &self.metrics);
        let mut items = vec![DockLayoutItem::Area(saver.save_area(&self.area))];
        for frame in &self.z_order {
            match frame {
                FrameId::Container(id) => {
                    if let Some(container) = self.containers.get(*id) {
                        items.push(DockLayoutItem::Item(saver.save_floating_container(container)));
                    }
                }
                FrameId::Window(id) => {
                    if let Some(window) = self.windows.get(*id).filter(|w| w.is_visible()) {
                        items.push(DockLayoutItem::Area(saver.save_window(window)));
                    }
                }
            }
        }
        DockLayout::new(items)
    }

    // -----------------------------------------------------------------------
    // Events and time
    // -----------------------------------------------------------------------

    pub fn set_dock_events_enabled(&mut self, enabled: bool) {
        self.events.set_enabled(enabled);
    }

    pub fn dock_events_enabled(&self) -> bool {
        self.events.is_enabled()
    }

    /// Take the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<DockEvent> {
        self.events.drain()
    }

    /// Advance overlay feedback and dock bar slides, then close windows
    /// whose areas ran empty. Returns whether anything is still animating.
    pub fn update(&mut self, dt: Duration) -> bool {
        profile_function!();
        let mut pending = self.overlay.update(dt);

        let mut finished = self.area.dock_bars.update(dt);
        pending |= self.area.dock_bars().is_animating();
        for (_, window) in self.windows.iter_mut() {
            finished.extend(window.area.dock_bars.update(dt));
            pending |= window.area().dock_bars().is_animating();
        }
        for slide in finished {
            if slide.kind == SlideKind::In {
                self.containers.update(slide.container, |c| c.visible = false);
            }
        }

        self.run_pending_closes();
        pending
    }
}

/// Hover the overlay over one dock area.
fn hover_area(overlay: &mut DockOverlay, area: &DockArea, pos: IVec2, metrics: &LayoutMetrics) {
    if area.maximized().is_some() {
        overlay.hide();
        return;
    }
    if area.root().is_none() {
        overlay.mouse_over_widget(area.geometry(), pos, true);
        return;
    }
    match area.hit_test(pos, metrics) {
        Some(target) => overlay.mouse_over_area(area.geometry(), Some(&target), pos),
        None => overlay.hide(),
    }
}

/// Snap a frame's origin so its edges meet the edges of `others` when they
/// come within `distance`. Each axis snaps independently to the closest
/// candidate.
pub fn snap_origin(target: Rect, others: &[Rect], distance: i32) -> IVec2 {
    fn consider(best: &mut Option<(i32, i32)>, current: i32, candidate: i32, distance: i32) {
        let delta = (candidate - current).abs();
        if delta <= distance && best.is_none_or(|(d, _)| delta < d) {
            *best = Some((delta, candidate));
        }
    }

    let mut best_x = None;
    let mut best_y = None;
    for other in others {
        let rows_meet = target.y <= other.bottom() + distance && other.y <= target.bottom() + distance;
        let cols_meet = target.x <= other.right() + distance && other.x <= target.right() + distance;
        if rows_meet {
            for x in [other.right(), other.x - target.width, other.x, other.right() - target.width] {
                consider(&mut best_x, target.x, x, distance);
            }
        }
        if cols_meet {
            for y in [other.bottom(), other.y - target.height, other.y, other.bottom() - target.height] {
                consider(&mut best_y, target.y, y, distance);
            }
        }
    }
    IVec2::new(
        best_x.map_or(target.x, |(_, x)| x),
        best_y.map_or(target.y, |(_, y)| y),
    )
}
