//! In-memory host adapters.
//!
//! Clones share state: keep one handle, give the other to a [`Host`](super::Host),
//! and observe what the theme store wrote.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::{RootElement, StorageError, ThemeStorage};

/// Key-value storage held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry directly, bypassing the theme store.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns a copy of the value stored under `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }
}

/// A document root whose class list lives in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root that starts out carrying `classes`.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: Rc::new(RefCell::new(classes.into_iter().map(Into::into).collect())),
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    /// The class attribute as a browser would serialize it, sorted.
    pub fn class_name(&self) -> String {
        self.classes
            .borrow()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl RootElement for MemoryRoot {
    fn contains_class(&self, class: &str) -> bool {
        self.contains(class)
    }

    fn add_class(&mut self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let mut handle = storage.clone();
        assert!(storage.is_empty());

        handle.set("theme", "dark").unwrap();
        assert_eq!(storage.value("theme").as_deref(), Some("dark"));

        handle.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_memory_storage_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_memory_root_class_list() {
        let root = MemoryRoot::with_classes(["antialiased"]);
        let mut handle = root.clone();

        handle.add_class("dark");
        handle.add_class("dark");
        assert!(root.contains("dark"));
        assert_eq!(root.class_name(), "antialiased dark");

        handle.remove_class("dark");
        handle.remove_class("dark");
        assert!(!root.contains_class("dark"));
        assert_eq!(root.class_name(), "antialiased");
    }
}
