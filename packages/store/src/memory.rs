use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if a previous session persisted it.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        match self.token.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set(&self, token: &str) {
        match self.token.lock() {
            Ok(mut slot) => *slot = Some(token.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(token.to_string()),
        }
    }

    fn clear(&self) {
        match self.token.lock() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.get().is_none());

        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.set("def");
        assert_eq!(store.get().as_deref(), Some("def"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryTokenStore::with_token("shared");
        let other = store.clone();
        other.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_arc_forwarding() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        store.set("t");
        assert_eq!(store.get().as_deref(), Some("t"));
    }
}
