pub mod file;
pub mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{Column, Link, LinkGroup, Task};

pub use file::FileBackend;
pub use memory::MemoryBackend;

pub const TASKS_KEY: &str = "tasks";
pub const COLUMNS_KEY: &str = "columns";
pub const LINKS_KEY: &str = "links";
pub const LINK_GROUPS_KEY: &str = "link_groups";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Synchronous key-value boundary to durable storage. Values are
/// JSON-encoded collections under fixed string keys.
pub trait KvBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Typed facade over a [`KvBackend`]. A missing key reads as an empty
/// collection, never as an error.
pub struct Store {
    backend: Box<dyn KvBackend>,
}

impl Store {
    pub fn new(backend: Box<dyn KvBackend>) -> Self {
        Self { backend }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageError> {
        match self.backend.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw)
    }

    pub fn tasks(&self) -> Result<Vec<Task>, StorageError> {
        self.load(TASKS_KEY)
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        self.save(TASKS_KEY, tasks)
    }

    pub fn columns(&self) -> Result<Vec<Column>, StorageError> {
        self.load(COLUMNS_KEY)
    }

    pub fn save_columns(&self, columns: &[Column]) -> Result<(), StorageError> {
        self.save(COLUMNS_KEY, columns)
    }

    pub fn links(&self) -> Result<Vec<Link>, StorageError> {
        self.load(LINKS_KEY)
    }

    pub fn save_links(&self, links: &[Link]) -> Result<(), StorageError> {
        self.save(LINKS_KEY, links)
    }

    pub fn link_groups(&self) -> Result<Vec<LinkGroup>, StorageError> {
        self.load(LINK_GROUPS_KEY)
    }

    pub fn save_link_groups(&self, groups: &[LinkGroup]) -> Result<(), StorageError> {
        self.save(LINK_GROUPS_KEY, groups)
    }
}
