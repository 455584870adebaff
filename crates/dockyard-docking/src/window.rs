//! Floating windows holding a nested dock area.

use crate::area::DockArea;
use crate::types::WindowId;
use dockyard_core::alloc::sparse_set::SparseSet;
use dockyard_core::geometry::Rect;

#[derive(Debug, Default)]
pub struct DockWindow {
    pub(crate) area: DockArea,
    pub(crate) geometry: Rect,
    pub(crate) margin: i32,
    pub(crate) linked: bool,
    pub(crate) maximized: bool,
    pub(crate) normal_geometry: Option<Rect>,
    pub(crate) visible: bool,
}

impl DockWindow {
    pub fn new(geometry: Rect, margin: i32) -> Self {
        let mut window = Self {
            margin,
            ..Self::default()
        };
        window.set_geometry(geometry);
        window
    }

    pub fn area(&self) -> &DockArea {
        &self.area
    }

    pub fn area_mut(&mut self) -> &mut DockArea {
        &mut self.area
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Move or resize the window; the nested area follows.
    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
        self.area.set_geometry(geometry.inset(self.margin));
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn normal_geometry(&self) -> Rect {
        self.normal_geometry.unwrap_or(self.geometry)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// The manager's store of floating windows.
#[derive(Default)]
pub struct Windows {
    set: SparseSet<DockWindow>,
}

impl std::fmt::Debug for Windows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Windows {
    pub fn insert(&mut self, window: DockWindow) -> WindowId {
        WindowId(self.set.push(window))
    }

    pub fn remove(&mut self, id: WindowId) -> Option<DockWindow> {
        self.set.remove(id.0)
    }

    pub fn get(&self, id: WindowId) -> Option<&DockWindow> {
        self.set.get(id.0)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut DockWindow> {
        self.set.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &DockWindow)> + '_ {
        self.set.iter().map(|(slot, w)| (WindowId(slot), w))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (WindowId, &mut DockWindow)> + '_ {
        self.set.iter_mut().map(|(slot, w)| (WindowId(slot), w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_tracks_window_geometry() {
        let mut window = DockWindow::new(Rect::new(100, 100, 400, 300), 5);
        assert_eq!(window.area().geometry(), Rect::new(105, 105, 390, 290));
        window.set_geometry(Rect::new(0, 0, 200, 200));
        assert_eq!(window.area().geometry(), Rect::new(5, 5, 190, 190));
    }
}
