use super::model::{AreaLayout, ItemLayout};
use crate::types::{DockBarPosition, InsertPosition, TabPosition};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An incremental edit of a live layout, applied with
/// [`DockManager::update_layout`](crate::DockManager::update_layout).
///
/// Items and targets are referenced by name. An op naming an unknown item
/// does nothing; an op naming an unknown target falls back as documented per
/// variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum LayoutOp {
    /// Dock `item` next to `target`. Without a target this behaves like
    /// [`LayoutOp::InsertBorderItem`] on the primary area; a target pinned
    /// to a dock bar pins the item to the same bar.
    InsertItem {
        item: String,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        position: InsertPosition,
    },
    /// Dock `item` along a border of the area holding `target`, or of the
    /// primary area. An empty area takes the item as its root.
    InsertBorderItem {
        item: String,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        position: InsertPosition,
    },
    /// Pin `item` to a dock bar of the area holding `target`, or of the
    /// primary area.
    InsertDockBarItem {
        item: String,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Option<String>,
        position: DockBarPosition,
        #[cfg_attr(feature = "serde", serde(default))]
        index: Option<usize>,
    },
    /// Add `item` as a tab next to `target`, then move it to `index`.
    /// `tab_position` applies when a new tab group has to be created; `None`
    /// uses the area default.
    InsertTab {
        item: String,
        #[cfg_attr(feature = "serde", serde(default))]
        target: Option<String>,
        #[cfg_attr(feature = "serde", serde(default))]
        index: Option<usize>,
        #[cfg_attr(feature = "serde", serde(default))]
        tab_position: Option<TabPosition>,
    },
    /// Float a single item with the given geometry and flags.
    FloatItem { item: ItemLayout },
    /// Build a new floating window from an area layout.
    FloatArea { area: AreaLayout },
    /// Take the item out of the layout and hide it.
    RemoveItem { item: String },
    /// Slide an item out of its dock bar.
    ExtendItem { item: String },
    /// Slide an item back into its dock bar.
    RetractItem { item: String },
    /// An op this version does not know. Skipped with a warning.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl LayoutOp {
    pub fn insert_item(item: impl Into<String>, target: impl Into<String>, position: InsertPosition) -> Self {
        LayoutOp::InsertItem {
            item: item.into(),
            target: Some(target.into()),
            position,
        }
    }

    pub fn insert_border_item(item: impl Into<String>, position: InsertPosition) -> Self {
        LayoutOp::InsertBorderItem {
            item: item.into(),
            target: None,
            position,
        }
    }

    pub fn insert_tab(item: impl Into<String>, target: impl Into<String>) -> Self {
        LayoutOp::InsertTab {
            item: item.into(),
            target: Some(target.into()),
            index: None,
            tab_position: None,
        }
    }

    pub fn remove_item(item: impl Into<String>) -> Self {
        LayoutOp::RemoveItem { item: item.into() }
    }

    /// The item the op acts on, if it names exactly one.
    pub fn item_name(&self) -> Option<&str> {
        match self {
            LayoutOp::InsertItem { item, .. }
            | LayoutOp::InsertBorderItem { item, .. }
            | LayoutOp::InsertDockBarItem { item, .. }
            | LayoutOp::InsertTab { item, .. }
            | LayoutOp::RemoveItem { item }
            | LayoutOp::ExtendItem { item }
            | LayoutOp::RetractItem { item } => Some(item),
            LayoutOp::FloatItem { item } => Some(&item.name),
            LayoutOp::FloatArea { .. } | LayoutOp::Unknown => None,
        }
    }
}
