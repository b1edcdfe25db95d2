//! The current theme and its observers.

use super::preference::ThemePreference;
use super::resolve::get_initial;
use super::sync::DocumentSync;
use crate::config::ThemeConfig;
use crate::host::Host;

/// Receives every committed theme change.
///
/// Implemented for any `FnMut(ThemePreference)` closure.
pub trait ThemeObserver {
    fn theme_changed(&mut self, theme: ThemePreference);
}

impl<F> ThemeObserver for F
where
    F: FnMut(ThemePreference),
{
    fn theme_changed(&mut self, theme: ThemePreference) {
        self(theme)
    }
}

/// Handle returned by [`ThemeStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the current theme for the lifetime of a mounted page.
///
/// The theme changes only through [`toggle`](Self::toggle) and
/// [`set_theme`](Self::set_theme). After each change is committed, every
/// observer runs synchronously, in subscription order, before the mutating
/// call returns.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use oshi::{ThemePreference, ThemeStore};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut store = ThemeStore::new(ThemePreference::Light);
///
/// let log = Rc::clone(&seen);
/// store.subscribe(move |theme: ThemePreference| log.borrow_mut().push(theme));
///
/// store.toggle();
/// store.toggle();
/// assert_eq!(*seen.borrow(), vec![ThemePreference::Dark, ThemePreference::Light]);
/// ```
pub struct ThemeStore {
    current: ThemePreference,
    observers: Vec<(SubscriptionId, Box<dyn ThemeObserver>)>,
    next_id: u64,
}

impl ThemeStore {
    /// Creates a store holding `initial`, with no observers.
    pub fn new(initial: ThemePreference) -> Self {
        Self {
            current: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Resolves the initial theme from `host` and keeps the host in sync.
    ///
    /// The synchronization runs once immediately so the document root and
    /// storage reflect the resolved value before the first interaction.
    pub fn mount(host: Host, config: ThemeConfig) -> Self {
        let initial = get_initial(&host, &config);
        tracing::debug!(theme = %initial, headless = host.is_headless(), "mounted theme store");

        let mut store = Self::new(initial);
        let mut sync = DocumentSync::new(host, config);
        sync.theme_changed(initial);
        store.subscribe(sync);
        store
    }

    /// The current theme.
    pub fn theme(&self) -> ThemePreference {
        self.current
    }

    /// Flips between light and dark.
    pub fn toggle(&mut self) {
        self.commit(self.current.toggled());
    }

    /// Assigns the theme directly.
    ///
    /// Assigning the current value is not a change and notifies no one.
    pub fn set_theme(&mut self, theme: ThemePreference) {
        if theme != self.current {
            self.commit(theme);
        }
    }

    /// Registers an observer for subsequent changes.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: ThemeObserver + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn commit(&mut self, theme: ThemePreference) {
        tracing::debug!(from = %self.current, to = %theme, "theme changed");
        self.current = theme;
        for (_, observer) in &mut self.observers {
            observer.theme_changed(theme);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryRoot, MemoryStorage};
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(store: &mut ThemeStore) -> (SubscriptionId, Rc<RefCell<Vec<ThemePreference>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let id = store.subscribe(move |theme: ThemePreference| log.borrow_mut().push(theme));
        (id, seen)
    }

    fn assert_in_sync(store: &ThemeStore, storage: &MemoryStorage, root: &MemoryRoot) {
        assert_eq!(storage.value("theme").as_deref(), Some(store.theme().as_str()));
        assert_eq!(root.contains("dark"), store.theme().is_dark());
    }

    #[test]
    fn test_toggle_flips_and_notifies() {
        let mut store = ThemeStore::new(ThemePreference::Light);
        let (_, seen) = recorder(&mut store);

        store.toggle();
        assert_eq!(store.theme(), ThemePreference::Dark);
        store.toggle();
        assert_eq!(store.theme(), ThemePreference::Light);
        assert_eq!(*seen.borrow(), vec![ThemePreference::Dark, ThemePreference::Light]);
    }

    #[test]
    fn test_set_theme_same_value_is_silent() {
        let mut store = ThemeStore::new(ThemePreference::Dark);
        let (_, seen) = recorder(&mut store);

        store.set_theme(ThemePreference::Dark);
        assert!(seen.borrow().is_empty());

        store.set_theme(ThemePreference::Light);
        assert_eq!(*seen.borrow(), vec![ThemePreference::Light]);
    }

    #[test]
    fn test_observers_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = ThemeStore::new(ThemePreference::Light);

        let first = Rc::clone(&order);
        store.subscribe(move |_: ThemePreference| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        store.subscribe(move |_: ThemePreference| second.borrow_mut().push("second"));

        store.toggle();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = ThemeStore::new(ThemePreference::Light);
        let (id, seen) = recorder(&mut store);
        assert_eq!(store.observer_count(), 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.observer_count(), 0);

        store.toggle();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_mount_syncs_initial_value() {
        let storage = MemoryStorage::new();
        let root = MemoryRoot::with_classes(["dark"]);
        let store = ThemeStore::mount(
            Host::new(storage.clone(), root.clone()),
            ThemeConfig::default(),
        );

        assert_eq!(store.theme(), ThemePreference::Dark);
        assert_eq!(store.observer_count(), 1);
        assert_in_sync(&store, &storage, &root);
    }

    #[test]
    fn test_mount_overwrites_malformed_value() {
        let storage = MemoryStorage::new();
        storage.insert("theme", "blue");
        let root = MemoryRoot::new();
        let store = ThemeStore::mount(
            Host::new(storage.clone(), root.clone()),
            ThemeConfig::default(),
        );

        assert_eq!(store.theme(), ThemePreference::Light);
        assert_eq!(storage.value("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_mount_headless_updates_memory_only() {
        let mut store = ThemeStore::mount(Host::headless(), ThemeConfig::default());
        assert_eq!(store.theme(), ThemePreference::Light);

        store.toggle();
        assert_eq!(store.theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_pair_restores_host_state() {
        for start in [ThemePreference::Light, ThemePreference::Dark] {
            let storage = MemoryStorage::new();
            storage.insert("theme", start.as_str());
            let root = MemoryRoot::new();
            let mut store = ThemeStore::mount(
                Host::new(storage.clone(), root.clone()),
                ThemeConfig::default(),
            );

            store.toggle();
            store.toggle();
            assert_eq!(store.theme(), start);
            assert_in_sync(&store, &storage, &root);
        }
    }

    #[derive(Debug, Clone)]
    enum Op {
        Toggle,
        Set(ThemePreference),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Toggle),
            Just(Op::Set(ThemePreference::Light)),
            Just(Op::Set(ThemePreference::Dark)),
        ]
    }

    proptest! {
        #[test]
        fn prop_host_mirrors_every_change(
            stored in proptest::option::of(prop_oneof![Just("light"), Just("dark"), Just("blue")]),
            marker in any::<bool>(),
            ops in proptest::collection::vec(op_strategy(), 0..20),
        ) {
            let storage = MemoryStorage::new();
            if let Some(value) = stored {
                storage.insert("theme", value);
            }
            let root = if marker { MemoryRoot::with_classes(["dark"]) } else { MemoryRoot::new() };
            let mut store = ThemeStore::mount(
                Host::new(storage.clone(), root.clone()),
                ThemeConfig::default(),
            );

            for op in ops {
                match op {
                    Op::Toggle => store.toggle(),
                    Op::Set(theme) => store.set_theme(theme),
                }
                let stored = storage.value("theme");
                prop_assert_eq!(stored.as_deref(), Some(store.theme().as_str()));
                prop_assert_eq!(root.contains("dark"), store.theme().is_dark());
            }
        }
    }
}
