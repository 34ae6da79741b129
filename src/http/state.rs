//! Shared state for the HTTP front end.

use std::path::PathBuf;
use std::sync::Arc;

use crate::resolver;
use crate::service::CompileService;

/// Immutable per-process state handed to every handler: the shared
/// orchestration service and the compiler path resolved at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: Arc<CompileService>,
    pub compiler_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(service: Arc<CompileService>, compiler_path: Option<PathBuf>) -> Self {
        Self {
            service,
            compiler_path,
        }
    }

    /// Whether the resolved compiler path currently exists on disk. Never
    /// spawns the compiler and never touches request state.
    pub fn compiler_available(&self) -> bool {
        resolver::is_available(self.compiler_path.as_deref())
    }
}
