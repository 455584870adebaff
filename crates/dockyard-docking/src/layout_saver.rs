//! Snapshotting live dock areas into the [`layout`](crate::layout) model.

use crate::area::DockArea;
use crate::container::{Containers, DockContainer};
use crate::geometry::{LayoutGeometry, LayoutMetrics};
use crate::layout::{AreaLayout, DockBarLayout, ItemLayout, LayoutNode, SplitLayout, TabLayout};
use crate::tree::{DockWidget, NodePath};
use crate::types::DockBarPosition;
use crate::window::DockWindow;
use dockyard_core::profiling::profile_function;

/// Builds layout nodes for the frames of one manager.
pub(crate) struct LayoutSaver<'a> {
    containers: &'a Containers,
    metrics: &'a LayoutMetrics,
}

impl<'a> LayoutSaver<'a> {
    pub fn new(containers: &'a Containers, metrics: &'a LayoutMetrics) -> Self {
        Self { containers, metrics }
    }

    pub fn save_area(&self, area: &DockArea) -> AreaLayout {
        profile_function!();
        let geometry = area.geometry().is_valid().then(|| area.layout_geometry(self.metrics));
        let mut layout = AreaLayout {
            item: area
                .root()
                .map(|root| self.save_node(root, &NodePath::root(), geometry.as_ref())),
            ..AreaLayout::default()
        };
        for position in DockBarPosition::ALL {
            let items: Vec<ItemLayout> = area
                .dock_bars()
                .bar(position)
                .iter()
                .map(|id| ItemLayout::new(self.containers.name_of(*id)))
                .collect();
            if !items.is_empty() {
                layout.dock_bars.push(DockBarLayout::new(position, items));
            }
        }
        if let Some(id) = area.maximized() {
            layout.mark_maximized(&self.containers.name_of(id));
        }
        layout
    }

    fn save_node(&self, node: &DockWidget, path: &NodePath, geometry: Option<&LayoutGeometry>) -> LayoutNode {
        match node {
            DockWidget::Container(id) => LayoutNode::item(self.containers.name_of(*id)),
            DockWidget::Tabs(tabs) => LayoutNode::Tab(TabLayout {
                items: tabs
                    .children()
                    .iter()
                    .map(|id| ItemLayout::new(self.containers.name_of(*id)))
                    .collect(),
                tab_position: tabs.tab_position(),
                tabs_movable: tabs.is_movable(),
                index: tabs.current_index(),
            }),
            DockWidget::Splitter(splitter) => {
                let items = splitter
                    .children()
                    .iter()
                    .enumerate()
                    .map(|(i, child)| self.save_node(child, &path.child(i), geometry))
                    .collect();
                let sizes = geometry
                    .and_then(|g| g.splitter_sizes(path))
                    .map(<[i32]>::to_vec)
                    .unwrap_or_else(|| splitter.effective_sizes());
                LayoutNode::Split(SplitLayout {
                    items,
                    orientation: splitter.orientation(),
                    sizes,
                })
            }
        }
    }

    /// A top-level floating container.
    pub fn save_floating_container(&self, container: &DockContainer) -> ItemLayout {
        let geometry = if container.is_maximized() {
            container.normal_geometry()
        } else {
            container.geometry()
        };
        ItemLayout {
            name: container.name().to_owned(),
            floating: true,
            geometry: geometry.is_valid().then_some(geometry),
            linked: container.is_linked(),
            maximized: container.is_maximized(),
        }
    }

    /// A floating window with its nested area.
    pub fn save_window(&self, window: &DockWindow) -> AreaLayout {
        let geometry = if window.is_maximized() {
            window.normal_geometry()
        } else {
            window.geometry()
        };
        AreaLayout {
            floating: true,
            geometry: geometry.is_valid().then_some(geometry),
            linked: window.is_linked(),
            maximized: window.is_maximized(),
            ..self.save_area(window.area())
        }
    }
}
