//! The persisted layout description and the operations that edit a live
//! layout in place.
//!
//! A [`DockLayout`] is a pure value: it names dock items by their unique
//! name and never holds handles. The manager turns it into live state with
//! [`DockManager::apply_layout`](crate::DockManager::apply_layout) and back
//! with [`DockManager::save_layout`](crate::DockManager::save_layout).

mod model;
mod ops;

pub use model::*;
pub use ops::*;
