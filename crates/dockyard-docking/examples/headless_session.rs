//! Drives a docking session without any UI attached.
//!
//! This example shows how to:
//! - Register dock items and build a layout from layout ops
//! - Tear a frame out, drag it over the dock guides and drop it
//! - Drain dock events and save the resulting layout as JSON
//!
//! Run with: cargo run -p dockyard-docking --example headless_session

use dockyard_core::geometry::Rect;
use dockyard_core::math::IVec2;
use dockyard_docking::{DockBarPosition, DockManager, InsertPosition, ItemLayout, LayoutOp, NamedItem};
use std::time::Duration;

fn main() {
    dockyard_core::logging::init();

    let mut manager = DockManager::default();
    manager.set_area_geometry(Rect::new(0, 0, 800, 600));
    manager.set_screens(vec![Rect::new(0, 0, 1920, 1080)]);
    manager.set_dock_events_enabled(true);

    for (name, title) in [
        ("explorer", "Explorer"),
        ("editor", "main.rs"),
        ("console", "Console"),
        ("outline", "Outline"),
    ] {
        if let Err(err) = manager.add_item(NamedItem::new(name).with_title(title)) {
            eprintln!("could not register {name}: {err}");
            return;
        }
    }

    println!("=== Building the initial layout ===\n");

    let applied = manager.update_layout(&[
        LayoutOp::insert_border_item("editor", InsertPosition::Left),
        LayoutOp::insert_border_item("explorer", InsertPosition::Left),
        LayoutOp::InsertDockBarItem {
            item: "outline".into(),
            target: None,
            position: DockBarPosition::Right,
            index: None,
        },
        LayoutOp::FloatItem {
            item: ItemLayout::floating("console", Some(Rect::new(1000, 100, 200, 150))),
        },
    ]);
    println!("Applied {applied} layout ops");
    print_events(&mut manager);

    println!("\n=== Dragging the console onto the west guide ===\n");

    let Some(console) = manager.find_container("console") else {
        eprintln!("console is not registered");
        return;
    };
    manager.begin_frame_drag(console.into(), IVec2::new(1010, 110));
    manager.frame_drag_moved(IVec2::new(1100, 110));

    let west_guide = IVec2::new(35, 300);
    manager.frame_drag_moved(west_guide);
    println!("Overlay visible while hovering: {}", manager.overlay().is_visible());

    // Let the guide rose settle before releasing over it.
    manager.update(Duration::from_millis(50));
    let docked = manager.end_frame_drag(west_guide);
    println!("Dropped onto a guide: {docked}");
    println!("Location: {:?}", manager.container_location(console));
    print_events(&mut manager);

    println!("\n=== Saved layout ===\n");

    match serde_json::to_string_pretty(&manager.save_layout()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize layout: {err}"),
    }
}

fn print_events(manager: &mut DockManager) {
    for event in manager.drain_events() {
        println!("  event: {event:?}");
    }
}
