//! Dockyard Core
//!
//! Shared building blocks for the Dockyard docking engine: pixel geometry,
//! generational arenas, logging and profiling setup.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
