//! # Persisted bearer token
//!
//! The only durable client state is a single string, the bearer token, stored
//! under a fixed key. [`TokenStore`] abstracts where it lives so the service
//! layer and the route guard can be exercised without a browser:
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`MemoryTokenStore`](crate::MemoryTokenStore) | any | process memory, for tests |
//! | [`FileTokenStore`](crate::FileTokenStore) | native | one file under the data directory |
//! | `LocalStorageTokenStore` | wasm + `web` | `window.localStorage` |
//!
//! Implementations log and swallow backend failures. A store that cannot be read
//! behaves like one with no token, which the route guard handles by redirecting
//! to sign-in.

/// Default storage key for the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "token";

pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for std::sync::Arc<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}
