use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::Config;
use crate::storage::Store;

/// Shared handler state. The store sits behind a mutex because the design
/// assumes a single logical writer: each mutation holds the lock from load
/// through persist, so its read-compute-write cycle is never interleaved.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Store, config: Arc<Config>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config,
        }
    }

    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }
}
