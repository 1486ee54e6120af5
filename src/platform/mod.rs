//! Platform abstraction layer
//!
//! The simulation core never touches the platform. The only surface the
//! shell needs is an opaque key-value store: LocalStorage in the browser,
//! an in-memory map everywhere else (native demo, tests).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Opaque key-value persistence boundary
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Shared handle to a memory store, for hosts that keep their own view of
/// what was persisted (single-threaded, same model as the frame loop).
impl KeyValueStore for Rc<RefCell<MemoryStore>> {
    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.borrow_mut().set(key, value);
    }
}

/// Browser LocalStorage store (WASM only).
///
/// A missing window or denied storage degrades to reads of `None` and
/// dropped writes; the game keeps running without persistence.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok()).flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("best"), None);
        store.set("best", "45");
        assert_eq!(store.get("best"), Some("45".to_owned()));
        store.set("best", "50");
        assert_eq!(store.get("best"), Some("50".to_owned()));
    }

    #[test]
    fn shared_store_views_see_writes() {
        let shared = Rc::new(RefCell::new(MemoryStore::new()));
        let mut writer = shared.clone();
        writer.set("best", "12");
        assert_eq!(shared.get("best"), Some("12".to_owned()));
    }
}
