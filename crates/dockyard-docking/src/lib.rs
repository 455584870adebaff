//! Dockyard Docking - split, tab, float and dock-bar layouts for dock items
//!
//! This crate is the headless core of a docking framework:
//! - A layout tree per dock area (containers, splitters, tab groups)
//! - Structural plug/unplug driven by drop guides
//! - Guide rose and rubber band feedback while a frame is dragged
//! - Floating frames with edge snapping and linked groups
//! - Auto-hide dock bars with slide animations
//! - A serializable layout model with whole-layout apply and incremental ops
//!
//! The embedding application owns the real widgets. It feeds pointer input
//! and elapsed time into the [`DockManager`] and mirrors the resulting
//! geometry and visibility.
//!
//! ## Quick Start
//!
//! ```rust
//! use dockyard_core::geometry::Rect;
//! use dockyard_docking::{DockManager, InsertPosition, LayoutOp, NamedItem};
//!
//! let mut manager = DockManager::default();
//! manager.set_area_geometry(Rect::new(0, 0, 800, 600));
//! manager.add_item(NamedItem::new("editor")).unwrap();
//! manager.add_item(NamedItem::new("console")).unwrap();
//!
//! manager.update_layout(&[
//!     LayoutOp::insert_border_item("editor", InsertPosition::Left),
//!     LayoutOp::insert_item("console", "editor", InsertPosition::Bottom),
//! ]);
//!
//! let layout = manager.save_layout();
//! assert_eq!(layout.item_names(), vec!["editor", "console"]);
//! ```

pub mod animation;
pub mod area;
pub mod config;
pub mod container;
pub mod dock_bar;
pub mod drag;
pub mod error;
pub mod event;
pub mod geometry;
pub mod guide_rose;
pub mod item;
pub mod layout;
pub mod layout_builder;
pub mod layout_handling;
mod layout_saver;
pub mod manager;
pub mod overlay;
pub mod proximity;
pub mod tree;
pub mod types;
pub mod window;

pub use area::{AreaDirty, DockArea};
pub use config::DockConfig;
pub use container::{ContainerLocation, DockContainer};
pub use error::{DockError, DockResult};
pub use event::DockEvent;
pub use geometry::{HitTarget, LayoutGeometry, LayoutMetrics};
pub use item::{DockItem, NamedItem};
pub use layout::{
    AreaLayout, DockBarLayout, DockLayout, DockLayoutItem, ItemLayout, LayoutNode, LayoutOp, SplitLayout, TabLayout,
};
pub use layout_builder::ensure_on_screen;
pub use manager::DockManager;
pub use overlay::DockOverlay;
pub use tree::{DockSplitter, DockTabs, DockWidget, NodePath};
pub use types::{
    AreaId, ContainerId, DockBarPosition, FrameId, Guide, GuideMode, InsertPosition, Orientation, TabPosition, WindowId,
};
pub use window::DockWindow;
