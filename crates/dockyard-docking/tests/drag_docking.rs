//! Pointer-driven frame moves: tear out, docking drops and linked groups.

use dockyard_core::geometry::Rect;
use dockyard_core::math::IVec2;
use dockyard_docking::{
    AreaId, AreaLayout, ContainerLocation, DockEvent, DockLayout, DockManager, FrameId, ItemLayout, LayoutNode,
    SplitLayout,
};
use dockyard_test_utils::{EventRecorder, assert_tree, manager_with_items};
use std::time::Duration;

/// Longer than the rose debounce so the hovered guide becomes droppable.
const SETTLE: Duration = Duration::from_millis(50);

fn docked_and_floating() -> DockManager {
    let mut manager = manager_with_items(["a", "b"]);
    manager
        .apply_layout(&DockLayout::new(vec![
            AreaLayout::new(LayoutNode::item("a")).into(),
            ItemLayout::floating("b", Some(Rect::new(1000, 100, 200, 150))).into(),
        ]))
        .expect("all items registered");
    manager
}

#[test]
fn dropping_on_a_border_guide_docks_the_frame() {
    let mut manager = docked_and_floating();
    let b = manager.find_container("b").expect("registered");

    assert!(manager.begin_frame_drag(b.into(), IVec2::new(1010, 110)));
    assert!(manager.frame_drag_moved(IVec2::new(1100, 110)));
    assert!(!manager.overlay().is_visible());

    // Over the west border guide of the 800x600 primary area.
    let west = IVec2::new(35, 300);
    assert!(manager.frame_drag_moved(west));
    assert!(manager.overlay().is_visible());
    manager.update(SETTLE);

    assert!(manager.end_frame_drag(west));
    assert_tree(&manager, AreaId::Primary, "H(b,a)");
    assert_eq!(manager.container_location(b), ContainerLocation::Docked(AreaId::Primary));
    assert!(manager.frames().is_empty());
    assert!(!manager.proximity().contains(b.into()));
    assert!(!manager.overlay().is_visible());
    assert_eq!(manager.drain_events(), vec![DockEvent::Docked { name: "b".into() }]);
}

#[test]
fn releasing_away_from_guides_leaves_the_frame_floating() {
    let mut manager = docked_and_floating();
    let b = manager.find_container("b").expect("registered");

    manager.begin_frame_drag(b.into(), IVec2::new(1010, 110));
    manager.frame_drag_moved(IVec2::new(200, 450));
    manager.update(SETTLE);
    assert!(!manager.end_frame_drag(IVec2::new(200, 450)));

    assert_eq!(manager.container_location(b), ContainerLocation::Floating);
    assert_eq!(manager.frame_geometry(b.into()), Some(Rect::new(190, 440, 200, 150)));
    assert_tree(&manager, AreaId::Primary, "a");
}

#[test]
fn short_presses_do_not_move_anything() {
    let mut manager = docked_and_floating();
    let a = manager.find_container("a").expect("registered");

    manager.begin_frame_drag(a.into(), IVec2::new(400, 10));
    assert!(!manager.frame_drag_moved(IVec2::new(404, 14)));
    assert!(!manager.end_frame_drag(IVec2::new(404, 14)));
    assert_tree(&manager, AreaId::Primary, "a");
    assert!(manager.drain_events().is_empty());
}

#[test]
fn tearing_out_the_last_container_empties_the_area() {
    let mut manager = docked_and_floating();
    let a = manager.find_container("a").expect("registered");
    let events = EventRecorder::new();

    manager.begin_frame_drag(a.into(), IVec2::new(400, 10));
    assert!(manager.frame_drag_moved(IVec2::new(400, 60)));
    events.capture(&mut manager);

    assert_tree(&manager, AreaId::Primary, "-");
    assert_eq!(manager.container_location(a), ContainerLocation::Floating);
    assert_eq!(manager.frames().last(), Some(&FrameId::Container(a)));
    assert_eq!(events.summary(), vec!["undocked:a"]);
}

#[test]
fn linked_frames_move_together_and_hide_the_overlay() {
    let mut manager = manager_with_items(["a", "b"]);
    manager
        .apply_layout(&DockLayout::new(vec![
            ItemLayout::floating("a", Some(Rect::new(1000, 0, 100, 100)))
                .with_linked(true)
                .into(),
            ItemLayout::floating("b", Some(Rect::new(1300, 0, 100, 100)))
                .with_linked(true)
                .into(),
        ]))
        .expect("all items registered");
    let (a, b) = (
        manager.find_container("a").expect("registered"),
        manager.find_container("b").expect("registered"),
    );
    assert!(!manager.proximity().has_linked_frames(a.into()));

    // Bring a next to b: its right edge snaps onto b's left edge and the
    // two frames link up.
    manager.begin_frame_drag(a.into(), IVec2::new(1010, 10));
    assert!(manager.frame_drag_moved(IVec2::new(1205, 10)));
    assert_eq!(manager.frame_geometry(a.into()), Some(Rect::new(1200, 0, 100, 100)));
    assert!(manager.proximity().is_linked_to(a.into(), b.into()));
    assert!(manager.proximity().is_linked_to(b.into(), a.into()));

    // Further moves carry the whole group by the same delta.
    assert!(manager.frame_drag_moved(IVec2::new(1205, 60)));
    assert_eq!(manager.frame_geometry(a.into()), Some(Rect::new(1195, 50, 100, 100)));
    assert_eq!(manager.frame_geometry(b.into()), Some(Rect::new(1295, 50, 100, 100)));
    assert!(!manager.overlay().is_visible());

    manager.update(SETTLE);
    assert!(!manager.end_frame_drag(IVec2::new(1205, 60)));
    assert_eq!(manager.container_location(a), ContainerLocation::Floating);
    assert_eq!(manager.frames(), &[FrameId::Container(b), FrameId::Container(a)]);
}

#[test]
fn resizing_away_from_a_neighbour_clears_the_link_flag() {
    let mut manager = manager_with_items(["a", "b"]);
    manager
        .apply_layout(&DockLayout::new(vec![
            ItemLayout::floating("a", Some(Rect::new(1000, 0, 100, 100)))
                .with_linked(true)
                .into(),
            ItemLayout::floating("b", Some(Rect::new(1100, 0, 100, 100)))
                .with_linked(true)
                .into(),
        ]))
        .expect("all items registered");
    let (a, b) = (
        manager.find_container("a").expect("registered"),
        manager.find_container("b").expect("registered"),
    );
    assert!(manager.proximity().is_linked_to(a.into(), b.into()));

    // Still touching after a taller resize: the flag survives.
    assert!(manager.set_frame_geometry(a.into(), Rect::new(1000, 0, 100, 150)));
    manager.frame_resized(a.into());
    assert!(manager.is_frame_linked(a.into()));

    assert!(manager.set_frame_geometry(a.into(), Rect::new(1000, 0, 50, 100)));
    manager.frame_resized(a.into());
    assert!(!manager.proximity().has_linked_frames(a.into()));
    assert!(!manager.is_frame_linked(a.into()));
    assert!(manager.is_frame_linked(b.into()));
}

#[test]
fn dropping_a_window_grafts_its_tree_and_discards_it() {
    let mut manager = manager_with_items(["a", "p", "q"]);
    manager
        .apply_layout(&DockLayout::new(vec![
            AreaLayout::new(LayoutNode::item("a")).into(),
            AreaLayout::new(SplitLayout::horizontal(vec![LayoutNode::item("p"), LayoutNode::item("q")]))
                .floating(Some(Rect::new(1000, 100, 400, 300)))
                .into(),
        ]))
        .expect("all items registered");
    let window = manager.windows().ids()[0];
    let frame = FrameId::Window(window);
    assert_eq!(manager.frames(), &[frame]);

    assert!(manager.begin_frame_drag(frame, IVec2::new(1010, 110)));
    assert!(manager.frame_drag_moved(IVec2::new(1100, 110)));
    let west = IVec2::new(35, 300);
    assert!(manager.frame_drag_moved(west));
    manager.update(SETTLE);

    assert!(manager.end_frame_drag(west));
    assert_tree(&manager, AreaId::Primary, "H(p,q,a)");
    assert!(manager.window(window).is_none());
    assert!(manager.windows().is_empty());
    assert!(manager.frames().is_empty());
    assert!(!manager.proximity().contains(frame));
    for name in ["p", "q"] {
        let id = manager.find_container(name).expect("registered");
        assert_eq!(manager.container_location(id), ContainerLocation::Docked(AreaId::Primary));
    }
}
