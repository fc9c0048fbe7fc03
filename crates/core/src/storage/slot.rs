use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::CoreError;

/// Name of the storage slot holding the serialized expense list.
pub const STORAGE_KEY: &str = "expenses";

/// A single named key-value location holding the serialized list.
///
/// `read` returns `None` when nothing has ever been stored. `write`
/// overwrites any prior value. Implementations do no interpretation of
/// the stored string — serialization lives in the storage manager.
pub trait StorageSlot {
    fn read(&self) -> Result<Option<String>, CoreError>;
    fn write(&mut self, value: &str) -> Result<(), CoreError>;
}

/// In-memory slot. Clones share one cell, so a value written through
/// one handle is visible through every other — the same way two page
/// loads observe a single localStorage key.
///
/// Single-threaded by design, matching the strictly synchronous
/// event-handling model of the tracker.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with raw contents (handy for rehydration tests).
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(contents.into()))),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, CoreError> {
        Ok(self.value.borrow().clone())
    }

    fn write(&mut self, value: &str) -> Result<(), CoreError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// File-backed slot: one JSON file on disk (native only).
///
/// A missing file reads as an empty slot; writing creates the parent
/// directory if needed.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSlot {
    /// Use an explicit file path.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Place the slot at `<dir>/expenses.json`, named after [`STORAGE_KEY`].
    pub fn in_dir(dir: impl AsRef<std::path::Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, CoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, value: &str) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, value)?;
        Ok(())
    }
}
