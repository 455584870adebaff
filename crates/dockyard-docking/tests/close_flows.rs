//! Closing containers and floating windows, with and without vetoes.

use dockyard_core::geometry::Rect;
use dockyard_docking::{
    AreaId, AreaLayout, ContainerLocation, DockLayout, DockManager, FrameId, LayoutNode, SplitLayout,
};
use dockyard_test_utils::{CloseSwitch, EventRecorder, TestItem, assert_tree};
use std::time::Duration;

const WINDOW: Rect = Rect::new(100, 100, 400, 300);

/// "keep" and "a" docked in the primary area, "b" and "c" in a floating
/// window. Returns the close switches of "a" and "b".
fn setup() -> (DockManager, CloseSwitch, CloseSwitch) {
    let mut manager = DockManager::default();
    manager.set_area_geometry(Rect::new(0, 0, 800, 600));
    manager.set_dock_events_enabled(true);

    let a = TestItem::new("a");
    let b = TestItem::new("b");
    let (switch_a, switch_b) = (a.switch(), b.switch());
    manager.add_item(TestItem::new("keep").not_closable()).expect("unique name");
    manager.add_item(a).expect("unique name");
    manager.add_item(b).expect("unique name");
    manager.add_item(TestItem::new("c")).expect("unique name");

    manager
        .apply_layout(&DockLayout::new(vec![
            AreaLayout::new(SplitLayout::horizontal(vec![LayoutNode::item("keep"), LayoutNode::item("a")])).into(),
            AreaLayout::new(SplitLayout::horizontal(vec![LayoutNode::item("b"), LayoutNode::item("c")]))
                .floating(Some(WINDOW))
                .into(),
        ]))
        .expect("all items registered");
    (manager, switch_a, switch_b)
}

#[test]
fn non_closable_items_are_never_asked() {
    let (mut manager, _, _) = setup();
    let keep = manager.find_container("keep").expect("registered");
    assert!(!manager.close_container(keep));
    assert_tree(&manager, AreaId::Primary, "H(keep,a)");
}

#[test]
fn a_vetoed_close_changes_nothing() {
    let (mut manager, switch_a, _) = setup();
    let a = manager.find_container("a").expect("registered");
    switch_a.set_veto(true);

    assert!(!manager.close_container(a));
    assert_eq!(switch_a.requests(), 1);
    assert_tree(&manager, AreaId::Primary, "H(keep,a)");
    assert!(manager.drain_events().is_empty());

    switch_a.set_veto(false);
    assert!(manager.close_container(a));
    assert_tree(&manager, AreaId::Primary, "keep");
    assert_eq!(manager.container_location(a), ContainerLocation::Unparented);
    assert!(!manager.container(a).expect("still registered").is_visible());

    let events = EventRecorder::new();
    events.capture(&mut manager);
    assert_eq!(events.summary(), vec!["closed:a"]);
}

#[test]
fn window_close_is_all_or_nothing() {
    let (mut manager, _, switch_b) = setup();
    let window = manager.windows().ids()[0];
    switch_b.set_veto(true);

    assert!(!manager.close_window(window));
    assert_eq!(switch_b.requests(), 1);
    assert_tree(&manager, AreaId::Window(window), "H(b,c)");
    assert_eq!(manager.frames(), &[FrameId::Window(window)]);
}

#[test]
fn closing_a_window_spills_its_items_as_floating_frames() {
    let (mut manager, _, _) = setup();
    let window = manager.windows().ids()[0];
    let (b, c) = (
        manager.find_container("b").expect("registered"),
        manager.find_container("c").expect("registered"),
    );
    let docked_b = manager.docked_geometry(b).expect("b is docked in the window");
    let docked_c = manager.docked_geometry(c).expect("c is docked in the window");

    assert!(manager.close_window(window));
    assert!(manager.window(window).is_none());
    assert_eq!(manager.frames(), &[FrameId::Container(b), FrameId::Container(c)]);
    assert_eq!(manager.frame_geometry(b.into()), Some(docked_b));
    assert_eq!(manager.frame_geometry(c.into()), Some(docked_c));
    assert!(docked_b.x < docked_c.x);
    assert!(WINDOW.contains(docked_b.origin()) && WINDOW.contains(docked_c.origin()));
    for id in [b, c] {
        let container = manager.container(id).expect("registered");
        assert!(container.is_floating() && container.is_visible() && container.is_title_bar_visible());
    }
}

#[test]
fn emptied_windows_are_hidden_then_closed_on_update() {
    let (mut manager, _, _) = setup();
    let window = manager.windows().ids()[0];
    let (b, c) = (
        manager.find_container("b").expect("registered"),
        manager.find_container("c").expect("registered"),
    );

    assert!(manager.close_container(b));
    assert_tree(&manager, AreaId::Window(window), "c");
    assert!(manager.close_container(c));
    let hidden = manager.window(window).expect("kept until the next update");
    assert!(!hidden.is_visible());
    assert!(manager.frames().is_empty());

    manager.update(Duration::from_millis(16));
    assert!(manager.window(window).is_none());
    assert!(manager.windows().is_empty());
}

#[test]
fn a_non_closable_item_keeps_its_window_open() {
    let mut manager = DockManager::default();
    manager.set_area_geometry(Rect::new(0, 0, 800, 600));
    let b = TestItem::new("b");
    let switch_b = b.switch();
    manager.add_item(b).expect("unique name");
    manager.add_item(TestItem::new("pinned").not_closable()).expect("unique name");
    manager
        .apply_layout(&DockLayout::new(vec![
            AreaLayout::new(SplitLayout::horizontal(vec![LayoutNode::item("b"), LayoutNode::item("pinned")]))
                .floating(Some(WINDOW))
                .into(),
        ]))
        .expect("all items registered");
    let window = manager.windows().ids()[0];

    assert!(!manager.close_window(window));
    assert_eq!(switch_b.requests(), 0);
    assert_tree(&manager, AreaId::Window(window), "H(b,pinned)");
    assert_eq!(manager.frames(), &[FrameId::Window(window)]);
}
