//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing,
//! so call sites never need their own `cfg` guards.

#[cfg(feature = "profiling")]
use std::sync::OnceLock;

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

/// No-op stand-in for `puffin::profile_function!`.
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    ($($arg:tt)*) => {};
}

/// No-op stand-in for `puffin::profile_scope!`.
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($($arg:tt)*) => {};
}

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

#[cfg(feature = "profiling")]
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use dockyard_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::PuffinHttp);
/// ```
#[cfg(feature = "profiling")]
pub fn init_profiling(backend: ProfilingBackend) {
    match backend {
        ProfilingBackend::PuffinHttp => {
            puffin::set_scopes_on(true);

            match puffin_http::Server::new("127.0.0.1:8585") {
                Ok(server) => {
                    tracing::info!("Puffin profiler server started on http://127.0.0.1:8585");
                    let _ = PROFILING_SERVER.set(server);
                }
                Err(e) => {
                    tracing::error!("Failed to start puffin server: {}", e);
                }
            }
        }
    }
}

#[cfg(not(feature = "profiling"))]
pub fn init_profiling(backend: ProfilingBackend) {
    tracing::debug!(?backend, "profiling feature disabled, ignoring backend");
}

/// Mark the start of a new profiling frame.
///
/// The docking engine calls this once per `DockManager::update` tick.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
