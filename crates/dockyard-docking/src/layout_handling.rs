//! Structural mutation of a dock area's layout tree.
//!
//! [`plug_frame`] inserts a dragged frame at the place a guide names and
//! [`unplug_container`] takes a container out again. Both keep the tree
//! normalized: no splitter or tab group is ever left with a single child.
//!
//! Every plug validates its target before anything is moved, so a rejected
//! plug leaves both the target area and the frame untouched.

use crate::area::{AreaDirty, DockArea};
use crate::container::Containers;
use crate::geometry::HitTarget;
use crate::tree::{DockSplitter, DockTabs, DockWidget, NodePath};
use crate::types::{ContainerId, DockBarPosition, Guide, Orientation, TabPosition};
use dockyard_core::profiling::profile_function;

/// The frame being plugged into an area.
#[derive(Debug)]
pub enum PlugFrame<'a> {
    /// A single floating container.
    Container(ContainerId),
    /// The nested area of a floating window. On success its tree and dock
    /// bars move into the target area and it is left empty.
    Area(&'a mut DockArea),
}

impl PlugFrame<'_> {
    /// Containers the frame would add to a layout tree.
    fn tree_containers(&self) -> Vec<ContainerId> {
        match self {
            PlugFrame::Container(id) => vec![*id],
            PlugFrame::Area(area) => area.root().map(DockWidget::containers).unwrap_or_default(),
        }
    }

    fn take_widget(&mut self) -> Option<DockWidget> {
        match self {
            PlugFrame::Container(id) => Some(DockWidget::Container(*id)),
            PlugFrame::Area(area) => {
                area.mark_dirty(AreaDirty::CONTENTS);
                area.maximized = None;
                area.root.take()
            }
        }
    }
}

/// Plug `frame` into `area` according to `guide`. `target` is the widget
/// under the pointer, if any. Returns `false` when the guide does not apply.
pub fn plug_frame(
    area: &mut DockArea,
    containers: &mut Containers,
    target: Option<&HitTarget>,
    frame: PlugFrame<'_>,
    guide: Guide,
) -> bool {
    profile_function!();
    debug_assert!(
        frame.tree_containers().iter().all(|id| !area.tree_contains(*id)),
        "frame is already part of the target layout"
    );
    let plugged = match guide {
        Guide::NoGuide => false,
        Guide::AreaCenter => plug_area_center(area, containers, target, frame),
        Guide::CompassCenter => {
            let position = match target {
                Some(HitTarget::Tabs { tab_position, .. }) => *tab_position,
                _ => area.tab_position(),
            };
            plug_center(area, containers, target, frame, position)
        }
        Guide::CompassExNorth => plug_center(area, containers, target, frame, TabPosition::Top),
        Guide::CompassExEast => plug_center(area, containers, target, frame, TabPosition::Right),
        Guide::CompassExSouth => plug_center(area, containers, target, frame, TabPosition::Bottom),
        Guide::CompassExWest => plug_center(area, containers, target, frame, TabPosition::Left),
        Guide::CompassNorth => plug_compass(area, containers, target, frame, Orientation::Vertical, false),
        Guide::CompassEast => plug_compass(area, containers, target, frame, Orientation::Horizontal, true),
        Guide::CompassSouth => plug_compass(area, containers, target, frame, Orientation::Vertical, true),
        Guide::CompassWest => plug_compass(area, containers, target, frame, Orientation::Horizontal, false),
        Guide::BorderNorth => plug_border(area, containers, frame, Orientation::Vertical, false),
        Guide::BorderEast => plug_border(area, containers, frame, Orientation::Horizontal, true),
        Guide::BorderSouth => plug_border(area, containers, frame, Orientation::Vertical, true),
        Guide::BorderWest => plug_border(area, containers, frame, Orientation::Horizontal, false),
        Guide::SplitHorizontal | Guide::SplitVertical => plug_split(area, containers, target, frame, guide),
        Guide::BorderExNorth | Guide::BorderExEast | Guide::BorderExSouth | Guide::BorderExWest => {
            match guide.dock_bar_position() {
                Some(position) => plug_dock_bar(area, containers, frame, position),
                None => false,
            }
        }
    };
    if plugged {
        tracing::debug!(?guide, "plugged frame");
    } else {
        tracing::trace!(?guide, "plug rejected");
    }
    plugged
}

fn plug_area_center(
    area: &mut DockArea,
    containers: &mut Containers,
    target: Option<&HitTarget>,
    mut frame: PlugFrame<'_>,
) -> bool {
    if target.is_some() || area.root.is_some() {
        return false;
    }
    let Some(widget) = frame.take_widget() else {
        return false;
    };
    area.root = Some(widget);
    finish_tree_plug(area, containers, frame);
    true
}

fn plug_border(
    area: &mut DockArea,
    containers: &mut Containers,
    mut frame: PlugFrame<'_>,
    orientation: Orientation,
    append: bool,
) -> bool {
    if area.root.is_none() || frame.tree_containers().is_empty() {
        return false;
    }
    let Some(widget) = frame.take_widget() else {
        return false;
    };
    split_root(area, orientation, widget, append);
    finish_tree_plug(area, containers, frame);
    true
}

/// Path of a compass target, if the tree still holds what was hit.
fn compass_target_path(area: &DockArea, target: Option<&HitTarget>) -> Option<NodePath> {
    let root = area.root.as_ref()?;
    match target? {
        HitTarget::Container { id, path, .. } => {
            matches!(root.node_at(path), Some(DockWidget::Container(c)) if c == id).then(|| path.clone())
        }
        HitTarget::Tabs { path, .. } => {
            matches!(root.node_at(path), Some(DockWidget::Tabs(_))).then(|| path.clone())
        }
        HitTarget::SplitHandle { .. } => None,
    }
}

fn plug_compass(
    area: &mut DockArea,
    containers: &mut Containers,
    target: Option<&HitTarget>,
    mut frame: PlugFrame<'_>,
    orientation: Orientation,
    append: bool,
) -> bool {
    let Some(path) = compass_target_path(area, target) else {
        return false;
    };
    if frame.tree_containers().is_empty() {
        return false;
    }
    if path.is_root() {
        let Some(widget) = frame.take_widget() else {
            return false;
        };
        split_root(area, orientation, widget, append);
        finish_tree_plug(area, containers, frame);
        return true;
    }

    let (Some(parent_path), Some(index)) = (path.parent(), path.last()) else {
        return false;
    };
    let parent = match area.root.as_mut().and_then(|root| root.node_at_mut(&parent_path)) {
        Some(DockWidget::Splitter(splitter)) => splitter,
        _ => return false,
    };
    let Some(widget) = frame.take_widget() else {
        return false;
    };
    if parent.orientation() == orientation {
        parent.insert_child(index + usize::from(append), widget);
    } else {
        let sizes = parent.sizes().to_vec();
        let existing = parent.remove_child(index);
        let nested = if append {
            DockSplitter::from_pair(orientation, existing, widget)
        } else {
            DockSplitter::from_pair(orientation, widget, existing)
        };
        parent.insert_child(index, DockWidget::Splitter(nested));
        parent.set_sizes(&sizes);
    }
    finish_tree_plug(area, containers, frame);
    true
}

fn plug_center(
    area: &mut DockArea,
    containers: &mut Containers,
    target: Option<&HitTarget>,
    mut frame: PlugFrame<'_>,
    tab_position: TabPosition,
) -> bool {
    let incoming = frame.tree_containers();
    if incoming.is_empty() {
        return false;
    }
    let Some(root) = area.root.as_mut() else {
        return false;
    };
    match target {
        Some(HitTarget::Tabs { path, .. }) => {
            let Some(DockWidget::Tabs(tabs)) = root.node_at_mut(path) else {
                return false;
            };
            if tabs.tab_position() != tab_position {
                return false;
            }
            let _ = frame.take_widget();
            let first = tabs.len();
            for id in incoming {
                tabs.push(id);
            }
            tabs.set_current_index(first);
        }
        Some(HitTarget::Container { id, path, .. }) => {
            let Some(node) = root.node_at_mut(path) else {
                return false;
            };
            if *node != DockWidget::Container(*id) {
                return false;
            }
            let _ = frame.take_widget();
            let mut children = vec![*id];
            children.extend(incoming);
            let mut tabs = DockTabs::new(tab_position, children);
            tabs.set_current_index(1);
            *node = DockWidget::Tabs(tabs);
        }
        _ => return false,
    }
    finish_tree_plug(area, containers, frame);
    true
}

fn plug_split(
    area: &mut DockArea,
    containers: &mut Containers,
    target: Option<&HitTarget>,
    mut frame: PlugFrame<'_>,
    guide: Guide,
) -> bool {
    let Some(HitTarget::SplitHandle {
        splitter,
        index,
        orientation,
        ..
    }) = target
    else {
        return false;
    };
    let expected = match orientation {
        Orientation::Horizontal => Guide::SplitHorizontal,
        Orientation::Vertical => Guide::SplitVertical,
    };
    if guide != expected || frame.tree_containers().is_empty() {
        return false;
    }
    let node = match area.root.as_mut().and_then(|root| root.node_at_mut(splitter)) {
        Some(DockWidget::Splitter(node)) => node,
        _ => return false,
    };
    if node.orientation() != *orientation || *index == 0 || *index >= node.len() {
        return false;
    }
    let Some(widget) = frame.take_widget() else {
        return false;
    };
    node.insert_child(*index, widget);
    finish_tree_plug(area, containers, frame);
    true
}

fn plug_dock_bar(
    area: &mut DockArea,
    containers: &mut Containers,
    frame: PlugFrame<'_>,
    position: DockBarPosition,
) -> bool {
    let incoming = match frame {
        PlugFrame::Container(id) => vec![id],
        PlugFrame::Area(source) => {
            let ids = source.containers();
            if ids.is_empty() {
                return false;
            }
            source.root = None;
            source.maximized = None;
            source.dock_bars.take_all();
            source.mark_dirty(AreaDirty::CONTENTS | AreaDirty::DOCK_BARS);
            ids
        }
    };
    for id in incoming {
        area.dock_bars.add_container(id, position, None);
        containers.update(id, |c| {
            c.unfloat();
            c.visible = false;
            c.title_bar_visible = true;
        });
    }
    area.mark_dirty(AreaDirty::DOCK_BARS);
    true
}

/// Make `widget` a child of a root splitter of `orientation`, wrapping the
/// current root when it is not already such a splitter.
fn split_root(area: &mut DockArea, orientation: Orientation, widget: DockWidget, append: bool) {
    let mut splitter = match area.root.take() {
        Some(DockWidget::Splitter(splitter)) if splitter.orientation() == orientation => splitter,
        Some(other) => {
            let mut splitter = DockSplitter::new(orientation);
            splitter.push_child(other);
            splitter
        }
        None => DockSplitter::new(orientation),
    };
    if append {
        splitter.push_child(widget);
    } else {
        splitter.insert_child(0, widget);
    }
    area.root = Some(DockWidget::Splitter(splitter));
}

/// Bookkeeping after the frame's widget was grafted into the tree.
fn finish_tree_plug(area: &mut DockArea, containers: &mut Containers, frame: PlugFrame<'_>) {
    if let PlugFrame::Area(source) = frame {
        let pinned = source.dock_bars.take_all();
        if !pinned.is_empty() {
            source.mark_dirty(AreaDirty::DOCK_BARS);
            for (id, position) in pinned {
                if !area.dock_bars.contains(id) {
                    area.dock_bars.add_container(id, position, None);
                }
            }
            area.mark_dirty(AreaDirty::DOCK_BARS);
        }
    }
    if let Some(root) = &area.root {
        for id in root.containers() {
            containers.update(id, |c| {
                c.unfloat();
                c.visible = true;
            });
        }
    }
    sync_title_bars(area, containers);
    area.mark_dirty(AreaDirty::CONTENTS);
    debug_assert!(area.root.as_ref().is_none_or(DockWidget::is_normalized));
}

/// Tabbed containers hide their title bar; every other docked container
/// shows it.
pub(crate) fn sync_title_bars(area: &DockArea, containers: &mut Containers) {
    let Some(root) = &area.root else {
        return;
    };
    root.visit(&NodePath::root(), &mut |_, node| match node {
        DockWidget::Container(id) => containers.update(*id, |c| c.title_bar_visible = true),
        DockWidget::Tabs(tabs) => {
            for id in tabs.children() {
                containers.update(*id, |c| c.title_bar_visible = false);
            }
        }
        DockWidget::Splitter(_) => {}
    });
}

// ---------------------------------------------------------------------------
// Unplug
// ---------------------------------------------------------------------------

enum Unplug {
    NotFound,
    /// The node itself is the container; the parent must drop it.
    Removed,
    /// The container was removed somewhere below this node.
    Done,
}

fn unplug_node(node: &mut DockWidget, id: ContainerId) -> Unplug {
    let (result, replacement) = match node {
        DockWidget::Container(c) => {
            return if *c == id { Unplug::Removed } else { Unplug::NotFound };
        }
        DockWidget::Tabs(tabs) => {
            let Some(index) = tabs.index_of(id) else {
                return Unplug::NotFound;
            };
            tabs.remove(index);
            let sole = (tabs.len() == 1).then(|| tabs.children()[0]);
            (Unplug::Done, sole.map(DockWidget::Container))
        }
        DockWidget::Splitter(splitter) => {
            let mut found = None;
            for index in 0..splitter.len() {
                let Some(child) = splitter.child_mut(index) else {
                    break;
                };
                match unplug_node(child, id) {
                    Unplug::NotFound => continue,
                    Unplug::Removed => {
                        splitter.remove_child(index);
                    }
                    Unplug::Done => {
                        // A collapsed child may now share this splitter's
                        // orientation; re-inserting splices it in.
                        let orientation = splitter.orientation();
                        let merge = matches!(
                            splitter.children().get(index),
                            Some(DockWidget::Splitter(inner)) if inner.orientation() == orientation
                        );
                        if merge {
                            let child = splitter.remove_child(index);
                            splitter.insert_child(index, child);
                        }
                    }
                }
                found = Some(Unplug::Done);
                break;
            }
            let Some(result) = found else {
                return Unplug::NotFound;
            };
            let sole = (splitter.len() == 1).then(|| splitter.remove_child(0));
            (result, sole)
        }
    };
    if let Some(replacement) = replacement {
        *node = replacement;
    }
    result
}

/// Remove a container from the area's layout tree. Returns `false` if the
/// tree does not hold it.
pub fn unplug_container(area: &mut DockArea, containers: &mut Containers, id: ContainerId) -> bool {
    profile_function!();
    let Some(root) = area.root.as_mut() else {
        return false;
    };
    match unplug_node(root, id) {
        Unplug::NotFound => return false,
        Unplug::Removed => area.root = None,
        Unplug::Done => {}
    }
    containers.update(id, |c| {
        c.visible = false;
        c.title_bar_visible = true;
    });
    if area.maximized == Some(id) {
        area.maximized = None;
        containers.update(id, |c| c.maximized = false);
        area.mark_dirty(AreaDirty::MAXIMIZED);
    }
    sync_title_bars(area, containers);
    area.mark_dirty(AreaDirty::CONTENTS);
    debug_assert!(area.root.as_ref().is_none_or(DockWidget::is_normalized));
    tracing::debug!(container = %containers.name_of(id), "unplugged container");
    true
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// The drop target a layout operation aims at when it names `id`: the tab
/// group holding it, or the container itself.
pub fn container_target(area: &DockArea, id: ContainerId) -> Option<HitTarget> {
    let slot = area.root()?.find_container(id)?;
    let rect = area.geometry();
    match (slot.tab, area.root()?.node_at(&slot.path)) {
        (Some(_), Some(DockWidget::Tabs(tabs))) => Some(HitTarget::Tabs {
            path: slot.path,
            rect,
            tab_position: tabs.tab_position(),
        }),
        _ => Some(HitTarget::Container {
            id,
            path: slot.path,
            rect,
        }),
    }
}

/// Containers in the area's layout tree, left to right.
pub fn iter_containers(area: &DockArea) -> impl Iterator<Item = ContainerId> {
    area.root().map(DockWidget::containers).unwrap_or_default().into_iter()
}

/// Paths of the tab groups in the area's layout tree.
pub fn iter_tabs(area: &DockArea) -> impl Iterator<Item = NodePath> {
    area.root().map(DockWidget::tab_groups).unwrap_or_default().into_iter()
}

/// Splitter handles as `(splitter path, index of the following child)`.
pub fn iter_handles(area: &DockArea) -> impl Iterator<Item = (NodePath, usize)> {
    let mut handles = Vec::new();
    if let Some(root) = area.root() {
        root.visit(&NodePath::root(), &mut |path, node| {
            if let DockWidget::Splitter(splitter) = node {
                handles.extend((1..splitter.len()).map(|index| (path.clone(), index)));
            }
        });
    }
    handles.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::DockContainer;
    use crate::item::NamedItem;
    use dockyard_core::geometry::Rect;

    struct Fixture {
        area: DockArea,
        containers: Containers,
    }

    impl Fixture {
        fn new() -> Self {
            let mut area = DockArea::new();
            area.set_geometry(Rect::new(0, 0, 800, 600));
            Self {
                area,
                containers: Containers::default(),
            }
        }

        fn add(&mut self, name: &str) -> ContainerId {
            self.containers
                .insert(DockContainer::new(Box::new(NamedItem::new(name))))
        }

        fn plug(&mut self, target: Option<&HitTarget>, id: ContainerId, guide: Guide) -> bool {
            plug_frame(
                &mut self.area,
                &mut self.containers,
                target,
                PlugFrame::Container(id),
                guide,
            )
        }

        fn target(&self, id: ContainerId) -> HitTarget {
            let slot = self.area.root().and_then(|r| r.find_container(id)).expect("docked");
            HitTarget::Container {
                id,
                path: slot.path,
                rect: Rect::INVALID,
            }
        }
    }

    #[test]
    fn compass_east_on_a_root_container_splits_horizontally() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let b = fx.add("B");
        assert!(fx.plug(None, a, Guide::AreaCenter));
        let target = fx.target(a);
        assert!(fx.plug(Some(&target), b, Guide::CompassEast));

        let Some(DockWidget::Splitter(root)) = fx.area.root() else {
            panic!("expected a splitter root");
        };
        assert_eq!(root.orientation(), Orientation::Horizontal);
        assert_eq!(root.children(), &[DockWidget::Container(a), DockWidget::Container(b)]);
        assert!(fx.containers.get(b).is_some_and(|c| c.is_visible()));
    }

    #[test]
    fn unplugging_a_tab_collapses_the_group() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let x = fx.add("X");
        let y = fx.add("Y");
        assert!(fx.plug(None, a, Guide::AreaCenter));
        let target = fx.target(a);
        assert!(fx.plug(Some(&target), x, Guide::CompassEast));
        let target = fx.target(x);
        assert!(fx.plug(Some(&target), y, Guide::CompassCenter));
        assert!(!fx.containers.get(y).is_some_and(|c| c.is_title_bar_visible()));

        assert!(unplug_container(&mut fx.area, &mut fx.containers, x));
        let Some(DockWidget::Splitter(root)) = fx.area.root() else {
            panic!("expected a splitter root");
        };
        assert_eq!(root.children(), &[DockWidget::Container(a), DockWidget::Container(y)]);
        assert!(fx.containers.get(y).is_some_and(|c| c.is_title_bar_visible()));
        assert!(!fx.containers.get(x).is_some_and(|c| c.is_visible()));
    }

    #[test]
    fn unplug_then_area_center_restores_the_root() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        assert!(fx.plug(None, a, Guide::AreaCenter));
        assert!(unplug_container(&mut fx.area, &mut fx.containers, a));
        assert!(fx.area.root().is_none());
        assert!(fx.plug(None, a, Guide::AreaCenter));
        assert_eq!(fx.area.root(), Some(&DockWidget::Container(a)));
    }

    #[test]
    fn border_requires_a_root_and_area_center_an_empty_area() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let b = fx.add("B");
        assert!(!fx.plug(None, a, Guide::BorderNorth));
        assert!(fx.plug(None, a, Guide::AreaCenter));
        assert!(!fx.plug(None, b, Guide::AreaCenter));
        assert!(fx.plug(None, b, Guide::BorderNorth));
        let Some(DockWidget::Splitter(root)) = fx.area.root() else {
            panic!("expected a splitter root");
        };
        assert_eq!(root.orientation(), Orientation::Vertical);
        assert_eq!(root.children()[0], DockWidget::Container(b));
    }

    #[test]
    fn perpendicular_compass_nests_and_keeps_parent_sizes() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let b = fx.add("B");
        let c = fx.add("C");
        fx.plug(None, a, Guide::AreaCenter);
        fx.plug(None, b, Guide::BorderEast);
        if let Some(DockWidget::Splitter(root)) = fx.area.root.as_mut() {
            root.set_sizes(&[300, 500]);
        }
        let target = fx.target(b);
        assert!(fx.plug(Some(&target), c, Guide::CompassSouth));

        let Some(DockWidget::Splitter(root)) = fx.area.root() else {
            panic!("expected a splitter root");
        };
        assert_eq!(root.sizes(), &[300, 500]);
        let DockWidget::Splitter(nested) = &root.children()[1] else {
            panic!("expected a nested splitter");
        };
        assert_eq!(nested.orientation(), Orientation::Vertical);
        assert_eq!(nested.children(), &[DockWidget::Container(b), DockWidget::Container(c)]);
    }

    #[test]
    fn split_guides_must_match_the_handle() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let b = fx.add("B");
        let c = fx.add("C");
        fx.plug(None, a, Guide::AreaCenter);
        fx.plug(None, b, Guide::BorderEast);
        let handle = HitTarget::SplitHandle {
            splitter: NodePath::root(),
            index: 1,
            orientation: Orientation::Horizontal,
            rect: Rect::INVALID,
        };
        assert!(!fx.plug(Some(&handle), c, Guide::SplitVertical));
        assert!(fx.plug(Some(&handle), c, Guide::SplitHorizontal));
        assert_eq!(iter_containers(&fx.area).collect::<Vec<_>>(), vec![a, c, b]);
        assert_eq!(iter_handles(&fx.area).count(), 2);
    }

    #[test]
    fn tab_position_must_match_an_existing_group() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let b = fx.add("B");
        let c = fx.add("C");
        fx.plug(None, a, Guide::AreaCenter);
        let target = fx.target(a);
        assert!(fx.plug(Some(&target), b, Guide::CompassExSouth));
        let tabs = HitTarget::Tabs {
            path: NodePath::root(),
            rect: Rect::INVALID,
            tab_position: TabPosition::Bottom,
        };
        assert!(!fx.plug(Some(&tabs), c, Guide::CompassExNorth));
        assert!(fx.plug(Some(&tabs), c, Guide::CompassCenter));
        let Some(DockWidget::Tabs(group)) = fx.area.root() else {
            panic!("expected a tab group");
        };
        assert_eq!(group.children(), &[a, b, c]);
        assert_eq!(group.current(), Some(c));
        assert_eq!(iter_tabs(&fx.area).count(), 1);
    }

    #[test]
    fn window_frames_are_absorbed_with_their_dock_bars() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let b = fx.add("B");
        let c = fx.add("C");
        let pinned = fx.add("P");
        fx.plug(None, a, Guide::AreaCenter);

        let mut source = DockArea::new();
        source.root = Some(DockWidget::Splitter(DockSplitter::from_pair(
            Orientation::Horizontal,
            DockWidget::Container(b),
            DockWidget::Container(c),
        )));
        source.dock_bars.add_container(pinned, DockBarPosition::Left, None);

        assert!(plug_frame(
            &mut fx.area,
            &mut fx.containers,
            None,
            PlugFrame::Area(&mut source),
            Guide::BorderWest,
        ));
        assert!(source.is_empty());
        assert_eq!(iter_containers(&fx.area).collect::<Vec<_>>(), vec![b, c, a]);
        assert_eq!(fx.area.dock_bars().bar(DockBarPosition::Left), &[pinned]);
    }

    #[test]
    fn rejected_plugs_leave_the_frame_alone() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let b = fx.add("B");
        let mut source = DockArea::new();
        source.root = Some(DockWidget::Container(b));
        fx.plug(None, a, Guide::AreaCenter);
        assert!(!plug_frame(
            &mut fx.area,
            &mut fx.containers,
            None,
            PlugFrame::Area(&mut source),
            Guide::CompassEast,
        ));
        assert_eq!(source.root(), Some(&DockWidget::Container(b)));
    }

    #[test]
    fn extended_border_pins_to_the_dock_bar() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        assert!(fx.plug(None, a, Guide::BorderExEast));
        assert!(fx.area.root().is_none());
        assert_eq!(fx.area.dock_bars().bar(DockBarPosition::Right), &[a]);
        assert!(!fx.containers.get(a).is_some_and(|c| c.is_visible()));
    }

    #[test]
    fn unplugging_an_unknown_container_fails() {
        let mut fx = Fixture::new();
        let a = fx.add("A");
        let b = fx.add("B");
        assert!(!unplug_container(&mut fx.area, &mut fx.containers, a));
        fx.plug(None, a, Guide::AreaCenter);
        assert!(!unplug_container(&mut fx.area, &mut fx.containers, b));
    }
}
