use crate::types::{DockBarPosition, Orientation, TabPosition};
use dockyard_core::geometry::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

/// A single dock item, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemLayout {
    pub name: String,
    /// Only meaningful at the top level of a [`DockLayout`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub floating: bool,
    /// `None` leaves the geometry unspecified.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub geometry: Option<Rect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub linked: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub maximized: bool,
}

impl ItemLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A top-level floating item.
    pub fn floating(name: impl Into<String>, geometry: Option<Rect>) -> Self {
        Self {
            name: name.into(),
            floating: true,
            geometry,
            ..Self::default()
        }
    }

    pub fn with_linked(mut self, linked: bool) -> Self {
        self.linked = linked;
        self
    }

    pub fn with_maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitLayout {
    pub items: Vec<LayoutNode>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: Orientation,
    /// Relative child sizes; ignored unless there is one per child.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sizes: Vec<i32>,
}

impl SplitLayout {
    pub fn new(orientation: Orientation, items: Vec<LayoutNode>) -> Self {
        Self {
            items,
            orientation,
            sizes: Vec::new(),
        }
    }

    pub fn horizontal(items: Vec<LayoutNode>) -> Self {
        Self::new(Orientation::Horizontal, items)
    }

    pub fn vertical(items: Vec<LayoutNode>) -> Self {
        Self::new(Orientation::Vertical, items)
    }

    pub fn with_sizes(mut self, sizes: Vec<i32>) -> Self {
        self.sizes = sizes;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabLayout {
    pub items: Vec<ItemLayout>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tab_position: TabPosition,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub tabs_movable: bool,
    /// Index of the current tab.
    #[cfg_attr(feature = "serde", serde(default))]
    pub index: usize,
}

impl Default for TabLayout {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            tab_position: TabPosition::default(),
            tabs_movable: true,
            index: 0,
        }
    }
}

impl TabLayout {
    pub fn new(items: Vec<ItemLayout>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_tab_position(mut self, position: TabPosition) -> Self {
        self.tab_position = position;
        self
    }
}

/// The items pinned to one dock bar, in bar order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DockBarLayout {
    pub items: Vec<ItemLayout>,
    pub position: DockBarPosition,
}

impl DockBarLayout {
    pub fn new(position: DockBarPosition, items: Vec<ItemLayout>) -> Self {
        Self { items, position }
    }
}

/// A node of an area's layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum LayoutNode {
    Item(ItemLayout),
    Split(SplitLayout),
    Tab(TabLayout),
    /// A node kind this version does not know. Skipped when applied.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl LayoutNode {
    pub fn item(name: impl Into<String>) -> Self {
        LayoutNode::Item(ItemLayout::new(name))
    }

    /// Every item under this node, depth first.
    pub fn items(&self) -> Vec<&ItemLayout> {
        let mut out = Vec::new();
        self.collect_items(&mut out);
        out
    }

    fn collect_items<'a>(&'a self, out: &mut Vec<&'a ItemLayout>) {
        match self {
            LayoutNode::Item(item) => out.push(item),
            LayoutNode::Split(split) => {
                for child in &split.items {
                    child.collect_items(out);
                }
            }
            LayoutNode::Tab(tabs) => out.extend(tabs.items.iter()),
            LayoutNode::Unknown => {}
        }
    }

    pub(crate) fn find_item_mut(&mut self, name: &str) -> Option<&mut ItemLayout> {
        match self {
            LayoutNode::Item(item) => (item.name == name).then_some(item),
            LayoutNode::Split(split) => split.items.iter_mut().find_map(|c| c.find_item_mut(name)),
            LayoutNode::Tab(tabs) => tabs.items.iter_mut().find(|item| item.name == name),
            LayoutNode::Unknown => None,
        }
    }
}

impl From<ItemLayout> for LayoutNode {
    fn from(item: ItemLayout) -> Self {
        LayoutNode::Item(item)
    }
}

impl From<SplitLayout> for LayoutNode {
    fn from(split: SplitLayout) -> Self {
        LayoutNode::Split(split)
    }
}

impl From<TabLayout> for LayoutNode {
    fn from(tabs: TabLayout) -> Self {
        LayoutNode::Tab(tabs)
    }
}

/// A dock area: the primary area or the nested area of a floating window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AreaLayout {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub item: Option<LayoutNode>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub dock_bars: Vec<DockBarLayout>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub floating: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub geometry: Option<Rect>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub linked: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub maximized: bool,
}

impl AreaLayout {
    pub fn new(item: impl Into<LayoutNode>) -> Self {
        Self {
            item: Some(item.into()),
            ..Self::default()
        }
    }

    pub fn with_dock_bar(mut self, bar: DockBarLayout) -> Self {
        self.dock_bars.push(bar);
        self
    }

    pub fn floating(mut self, geometry: Option<Rect>) -> Self {
        self.floating = true;
        self.geometry = geometry;
        self
    }

    /// Items of the tree followed by the dock bar items.
    pub fn items(&self) -> Vec<&ItemLayout> {
        let mut out = self.item.as_ref().map(LayoutNode::items).unwrap_or_default();
        for bar in &self.dock_bars {
            out.extend(bar.items.iter());
        }
        out
    }

    /// Flag the tree item named `name` as the maximized one.
    pub(crate) fn mark_maximized(&mut self, name: &str) {
        if let Some(item) = self.item.as_mut().and_then(|node| node.find_item_mut(name)) {
            item.maximized = true;
        }
    }
}

/// A top-level entry of a [`DockLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DockLayoutItem {
    Area(AreaLayout),
    /// A single floating item.
    Item(ItemLayout),
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl From<AreaLayout> for DockLayoutItem {
    fn from(area: AreaLayout) -> Self {
        DockLayoutItem::Area(area)
    }
}

impl From<ItemLayout> for DockLayoutItem {
    fn from(item: ItemLayout) -> Self {
        DockLayoutItem::Item(item)
    }
}

/// A whole docking arrangement: the primary area followed by floating
/// frames in Z-order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DockLayout {
    pub items: Vec<DockLayoutItem>,
}

impl DockLayout {
    pub fn new(items: Vec<DockLayoutItem>) -> Self {
        Self { items }
    }

    /// Every item the layout references, in document order.
    pub fn items(&self) -> Vec<&ItemLayout> {
        let mut out = Vec::new();
        for entry in &self.items {
            match entry {
                DockLayoutItem::Area(area) => out.extend(area.items()),
                DockLayoutItem::Item(item) => out.push(item),
                DockLayoutItem::Unknown => {}
            }
        }
        out
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items().into_iter().map(|item| item.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DockLayout {
        let tree = SplitLayout::horizontal(vec![
            LayoutNode::item("a"),
            TabLayout::new(vec![ItemLayout::new("b"), ItemLayout::new("c")]).into(),
        ]);
        DockLayout::new(vec![
            AreaLayout::new(tree)
                .with_dock_bar(DockBarLayout::new(DockBarPosition::Left, vec![ItemLayout::new("d")]))
                .into(),
            ItemLayout::floating("e", Some(Rect::new(10, 10, 200, 100))).into(),
        ])
    }

    #[test]
    fn items_are_listed_in_document_order() {
        assert_eq!(sample().item_names(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn mark_maximized_only_touches_tree_items() {
        let DockLayoutItem::Area(mut area) = sample().items.remove(0) else {
            panic!("expected an area");
        };
        area.mark_maximized("c");
        area.mark_maximized("d");
        let flagged: Vec<_> = area.items().into_iter().filter(|i| i.maximized).map(|i| i.name.as_str()).collect();
        assert_eq!(flagged, vec!["c"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_kinds_deserialize_to_unknown() {
        let json = r#"{
            "items": [
                { "kind": "area", "item": { "kind": "split", "items": [
                    { "kind": "item", "name": "a" },
                    { "kind": "stack", "items": [] }
                ] } },
                { "kind": "hologram" }
            ]
        }"#;
        let layout: DockLayout = serde_json::from_str(json).expect("valid layout");
        assert_eq!(layout.items.len(), 2);
        assert_eq!(layout.items[1], DockLayoutItem::Unknown);
        let DockLayoutItem::Area(area) = &layout.items[0] else {
            panic!("expected an area");
        };
        let Some(LayoutNode::Split(split)) = &area.item else {
            panic!("expected a split");
        };
        assert_eq!(split.items[1], LayoutNode::Unknown);
        assert_eq!(layout.item_names(), vec!["a"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn defaults_fill_missing_fields() {
        let tabs: LayoutNode = serde_json::from_str(r#"{ "kind": "tab", "items": [{ "name": "x" }] }"#)
            .expect("valid tab layout");
        let LayoutNode::Tab(tabs) = tabs else {
            panic!("expected tabs");
        };
        assert!(tabs.tabs_movable);
        assert_eq!(tabs.tab_position, TabPosition::Top);
        assert_eq!(tabs.items[0].geometry, None);
    }
}
