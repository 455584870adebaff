//! Test utilities for the Dockyard docking engine.
//!
//! This crate provides the fixtures the docking integration tests share:
//!
//! - [`TestItem`] - a dock item whose close behaviour tests can steer
//! - [`CloseSwitch`] - shared handle to a [`TestItem`]'s veto flag and close
//!   counter
//! - [`EventRecorder`] - collects [`DockEvent`]s drained from a manager
//! - [`tree_signature`] / [`assert_tree`] - compact textual layout trees
//!
//! # Example
//!
//! ```rust
//! use dockyard_docking::{AreaId, InsertPosition, LayoutOp};
//! use dockyard_test_utils::{TestItem, assert_tree, manager_with_items};
//!
//! let mut manager = manager_with_items(["a", "b"]);
//! manager.update_layout(&[
//!     LayoutOp::insert_border_item("a", InsertPosition::Left),
//!     LayoutOp::insert_item("b", "a", InsertPosition::Right),
//! ]);
//! assert_tree(&manager, AreaId::Primary, "H(a,b)");
//! ```
//!
//! # Tree signatures
//!
//! A signature spells out one area's layout tree:
//!
//! - a container is its item name
//! - a splitter is `H(..)` or `V(..)` by orientation
//! - a tab group is `T[..]`, with `*` after the current tab
//!
//! An empty area is `-`.

use dockyard_core::geometry::Rect;
use dockyard_docking::{
    AreaId, DockEvent, DockItem, DockManager, DockWidget, NamedItem, Orientation,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared view of a [`TestItem`]'s close state.
#[derive(Debug, Clone, Default)]
pub struct CloseSwitch {
    inner: Arc<Mutex<CloseState>>,
}

#[derive(Debug, Default)]
struct CloseState {
    veto: bool,
    requests: usize,
}

impl CloseSwitch {
    /// Make the item refuse (or accept) close requests from now on.
    pub fn set_veto(&self, veto: bool) {
        self.inner.lock().veto = veto;
    }

    /// How many times the item was asked to close.
    pub fn requests(&self) -> usize {
        self.inner.lock().requests
    }
}

/// A dock item for tests: fixed name and title, optional non-closable flag,
/// and a veto switch shared through [`CloseSwitch`].
#[derive(Debug)]
pub struct TestItem {
    inner: NamedItem,
    closable: bool,
    switch: CloseSwitch,
}

impl TestItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: NamedItem::new(name),
            closable: true,
            switch: CloseSwitch::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.inner = self.inner.with_title(title);
        self
    }

    pub fn not_closable(mut self) -> Self {
        self.closable = false;
        self
    }

    /// Starts out vetoing close requests.
    pub fn vetoing(self) -> Self {
        self.switch.set_veto(true);
        self
    }

    pub fn switch(&self) -> CloseSwitch {
        self.switch.clone()
    }
}

impl DockItem for TestItem {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn title(&self) -> &str {
        self.inner.title()
    }

    fn closable(&self) -> bool {
        self.closable
    }

    fn request_close(&mut self) -> bool {
        let mut state = self.switch.inner.lock();
        state.requests += 1;
        !state.veto
    }
}

/// A manager with an 800x600 primary area, dock events enabled and one
/// [`TestItem`] per name.
pub fn manager_with_items<'a>(names: impl IntoIterator<Item = &'a str>) -> DockManager {
    let mut manager = DockManager::default();
    manager.set_area_geometry(Rect::new(0, 0, 800, 600));
    manager.set_dock_events_enabled(true);
    for name in names {
        if let Err(err) = manager.add_item(TestItem::new(name)) {
            panic!("failed to register test item: {err}");
        }
    }
    manager
}

/// Collects events drained from a manager across several steps.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<DockEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the manager's queue into the recorder.
    pub fn capture(&self, manager: &mut DockManager) {
        self.events.lock().extend(manager.drain_events());
    }

    pub fn events(&self) -> Vec<DockEvent> {
        self.events.lock().clone()
    }

    pub fn take(&self) -> Vec<DockEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// `"kind:name"` strings, e.g. `"docked:a"`, for terse assertions.
    pub fn summary(&self) -> Vec<String> {
        self.events.lock().iter().map(describe_event).collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

fn describe_event(event: &DockEvent) -> String {
    let kind = match event {
        DockEvent::Docked { .. } => "docked",
        DockEvent::Undocked { .. } => "undocked",
        DockEvent::Extended { .. } => "extended",
        DockEvent::Retracted { .. } => "retracted",
        DockEvent::Shown { .. } => "shown",
        DockEvent::Hidden { .. } => "hidden",
        DockEvent::Closed { .. } => "closed",
        DockEvent::TabSelected { .. } => "tab_selected",
    };
    format!("{kind}:{}", event.name())
}

/// Compact textual form of an area's layout tree. See the crate docs for
/// the notation.
pub fn tree_signature(manager: &DockManager, area: AreaId) -> String {
    let Some(area) = manager.area(area) else {
        return "<no area>".to_owned();
    };
    match area.root() {
        Some(root) => widget_signature(manager, root),
        None => "-".to_owned(),
    }
}

fn name_of(manager: &DockManager, id: dockyard_docking::ContainerId) -> String {
    manager
        .container(id)
        .map_or_else(|| "?".to_owned(), |c| c.name().to_owned())
}

fn widget_signature(manager: &DockManager, widget: &DockWidget) -> String {
    match widget {
        DockWidget::Container(id) => name_of(manager, *id),
        DockWidget::Splitter(splitter) => {
            let axis = match splitter.orientation() {
                Orientation::Horizontal => 'H',
                Orientation::Vertical => 'V',
            };
            let children: Vec<String> = splitter
                .children()
                .iter()
                .map(|child| widget_signature(manager, child))
                .collect();
            format!("{axis}({})", children.join(","))
        }
        DockWidget::Tabs(tabs) => {
            let current = tabs.current();
            let children: Vec<String> = tabs
                .children()
                .iter()
                .map(|id| {
                    let mut name = name_of(manager, *id);
                    if current == Some(*id) {
                        name.push('*');
                    }
                    name
                })
                .collect();
            format!("T[{}]", children.join(","))
        }
    }
}

/// Assert an area's layout tree matches `expected`.
#[track_caller]
pub fn assert_tree(manager: &DockManager, area: AreaId, expected: &str) {
    let actual = tree_signature(manager, area);
    assert_eq!(actual, expected, "unexpected layout tree");
}

/// Assert no splitter or tab group in any area has fewer than two children.
#[track_caller]
pub fn assert_normalized(manager: &DockManager) {
    for (id, area) in manager.areas() {
        if let Some(root) = area.root() {
            assert!(root.is_normalized(), "area {id:?} holds a degenerate node");
        }
    }
}
