//! # localStorage token store: browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web platform**.
//! It keeps the bearer token as a plain string in `window.localStorage` under a
//! single key (`"token"` by default), with no structured schema.
//!
//! `Storage` handles are not `Clone`, so every call looks the storage up again
//! from `window`; the browser hands back the same object each time.

use web_sys::Storage;

use crate::token::TokenStore;

#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Option<Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        self.storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token) {
            tracing::warn!("Failed to persist token: {:?}", e);
        }
    }

    fn clear(&self) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(&self.key) {
            tracing::warn!("Failed to clear token: {:?}", e);
        }
    }
}
