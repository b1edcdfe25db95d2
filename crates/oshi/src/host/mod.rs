//! Host ports for persisted storage and the document root.
//!
//! The resolver never reaches for ambient globals. A hosting environment
//! hands it a [`Host`] carrying whichever ports it can provide:
//!
//! - [`ThemeStorage`]: synchronous string key-value storage
//! - [`RootElement`]: the document root's class list
//!
//! A headless host (no ports at all) resolves to the default theme and keeps
//! theme changes in memory only.

mod memory;

use std::fmt;

use thiserror::Error;

pub use memory::{MemoryRoot, MemoryStorage};

/// Failure reported by a [`ThemeStorage`] implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store refused the operation (quota, permissions, disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store exists but its contents cannot be read back.
    #[error("storage is corrupt: {0}")]
    Corrupt(String),
}

/// Synchronous key-value storage surface, the analogue of browser local storage.
pub trait ThemeStorage {
    /// Returns the value stored under `key`, or `None` when the key is unset.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Class-list access on the document root element.
pub trait RootElement {
    fn contains_class(&self, class: &str) -> bool;

    /// Adds `class`. Adding a class that is already present is a no-op.
    fn add_class(&mut self, class: &str);

    /// Removes `class`. Removing an absent class is a no-op.
    fn remove_class(&mut self, class: &str);
}

/// The ports a hosting environment provides.
pub struct Host {
    pub(crate) storage: Option<Box<dyn ThemeStorage>>,
    pub(crate) root: Option<Box<dyn RootElement>>,
}

impl Host {
    /// Creates a host with both storage and a document root.
    pub fn new<S, R>(storage: S, root: R) -> Self
    where
        S: ThemeStorage + 'static,
        R: RootElement + 'static,
    {
        Self {
            storage: Some(Box::new(storage)),
            root: Some(Box::new(root)),
        }
    }

    /// Creates a host with neither storage nor a document root.
    ///
    /// Used for off-screen rendering and other non-interactive contexts.
    pub fn headless() -> Self {
        Self {
            storage: None,
            root: None,
        }
    }

    /// Replaces the storage port.
    pub fn with_storage<S: ThemeStorage + 'static>(mut self, storage: S) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Replaces the document root port.
    pub fn with_root<R: RootElement + 'static>(mut self, root: R) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    /// Returns `true` when no storage port is available.
    pub fn is_headless(&self) -> bool {
        self.storage.is_none()
    }

    pub(crate) fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match &self.storage {
            Some(storage) => storage.get(key),
            None => Ok(None),
        }
    }

    pub(crate) fn root_has_class(&self, class: &str) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.contains_class(class))
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("storage", &self.storage.is_some())
            .field("root", &self.root.is_some())
            .finish()
    }
}
