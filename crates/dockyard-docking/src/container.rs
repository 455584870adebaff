//! Containers: the frame around a single dock item.

use crate::item::DockItem;
use crate::types::{AreaId, ContainerId, DockBarPosition};
use dockyard_core::alloc::sparse_set::SparseSet;
use dockyard_core::geometry::{Rect, Size};
use std::fmt;

/// Where a container currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerLocation {
    /// Registered but not shown anywhere.
    Unparented,
    /// A top-level floating frame.
    Floating,
    /// Part of an area's layout tree.
    Docked(AreaId),
    /// Pinned to one of an area's dock bars.
    DockBar(AreaId, DockBarPosition),
}

pub struct DockContainer {
    item: Box<dyn DockItem>,
    pub(crate) floating: bool,
    pub(crate) visible: bool,
    pub(crate) title_bar_visible: bool,
    pub(crate) geometry: Rect,
    pub(crate) linked: bool,
    pub(crate) maximized: bool,
    pub(crate) normal_geometry: Option<Rect>,
}

impl fmt::Debug for DockContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockContainer")
            .field("name", &self.name())
            .field("floating", &self.floating)
            .field("visible", &self.visible)
            .field("title_bar_visible", &self.title_bar_visible)
            .field("geometry", &self.geometry)
            .field("linked", &self.linked)
            .field("maximized", &self.maximized)
            .finish()
    }
}

impl DockContainer {
    pub fn new(item: Box<dyn DockItem>) -> Self {
        Self {
            item,
            floating: false,
            visible: false,
            title_bar_visible: true,
            geometry: Rect::INVALID,
            linked: false,
            maximized: false,
            normal_geometry: None,
        }
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn title(&self) -> &str {
        self.item.title()
    }

    pub fn icon(&self) -> Option<&str> {
        self.item.icon()
    }

    pub fn closable(&self) -> bool {
        self.item.closable()
    }

    pub fn item(&self) -> &dyn DockItem {
        self.item.as_ref()
    }

    pub fn item_mut(&mut self) -> &mut dyn DockItem {
        self.item.as_mut()
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_title_bar_visible(&self) -> bool {
        self.title_bar_visible
    }

    /// Global geometry of the frame while floating.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Geometry to restore when leaving the maximized state.
    pub fn normal_geometry(&self) -> Rect {
        self.normal_geometry.unwrap_or(self.geometry)
    }

    pub(crate) fn size_hint(&self, fallback: Size) -> Size {
        if self.geometry.is_valid() {
            self.geometry.size()
        } else {
            fallback
        }
    }

    pub(crate) fn float(&mut self) {
        self.floating = true;
        self.title_bar_visible = true;
    }

    pub(crate) fn unfloat(&mut self) {
        self.floating = false;
        self.linked = false;
        if self.maximized {
            self.maximized = false;
            if let Some(normal) = self.normal_geometry.take() {
                self.geometry = normal;
            }
        }
    }

    /// Back to a plain, hidden, docked-style state.
    pub(crate) fn reset(&mut self) {
        self.unfloat();
        self.visible = false;
        self.title_bar_visible = true;
        self.normal_geometry = None;
    }
}

/// The manager's store of containers.
#[derive(Default)]
pub struct Containers {
    set: SparseSet<DockContainer>,
}

impl Containers {
    pub fn insert(&mut self, container: DockContainer) -> ContainerId {
        ContainerId(self.set.push(container))
    }

    pub fn remove(&mut self, id: ContainerId) -> Option<DockContainer> {
        self.set.remove(id.0)
    }

    pub fn get(&self, id: ContainerId) -> Option<&DockContainer> {
        self.set.get(id.0)
    }

    pub fn get_mut(&mut self, id: ContainerId) -> Option<&mut DockContainer> {
        self.set.get_mut(id.0)
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.set.contains(id.0)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContainerId, &DockContainer)> + '_ {
        self.set.iter().map(|(slot, c)| (ContainerId(slot), c))
    }

    pub(crate) fn name_of(&self, id: ContainerId) -> String {
        self.get(id).map(|c| c.name().to_owned()).unwrap_or_default()
    }

    /// Apply `f` to the container if it is still registered.
    pub(crate) fn update(&mut self, id: ContainerId, f: impl FnOnce(&mut DockContainer)) {
        if let Some(container) = self.get_mut(id) {
            f(container);
        }
    }
}

impl fmt::Debug for Containers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|(_, c)| c)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NamedItem;

    #[test]
    fn unfloat_restores_normal_geometry() {
        let mut container = DockContainer::new(Box::new(NamedItem::new("a")));
        container.float();
        container.geometry = Rect::new(0, 0, 1920, 1080);
        container.maximized = true;
        container.normal_geometry = Some(Rect::new(10, 10, 200, 100));
        container.linked = true;
        container.unfloat();
        assert!(!container.is_floating());
        assert!(!container.is_linked());
        assert!(!container.is_maximized());
        assert_eq!(container.geometry(), Rect::new(10, 10, 200, 100));
    }

    #[test]
    fn store_hands_out_distinct_ids() {
        let mut store = Containers::default();
        let a = store.insert(DockContainer::new(Box::new(NamedItem::new("a"))));
        let b = store.insert(DockContainer::new(Box::new(NamedItem::new("b"))));
        assert_ne!(a, b);
        assert_eq!(store.name_of(b), "b");
        store.remove(a);
        assert!(!store.contains(a));
        assert_eq!(store.len(), 1);
    }
}
