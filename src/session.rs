//! Shared engine handle for concurrent adapters.

use crate::game::GameEngine;
use std::sync::{Arc, Mutex};

/// Thread-safe handle around a single [`GameEngine`].
///
/// The engine itself is a plain mutable value with no internal
/// synchronization. Adapters with concurrent callers (the HTTP server)
/// go through this handle so each operation runs under one lock
/// acquisition, start to finish.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Creates a handle around a fresh engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut GameEngine) -> T) -> T {
        let mut engine = self.inner.lock().unwrap();
        f(&mut engine)
    }
}
