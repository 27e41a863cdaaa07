//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageTokenStore`]
//! - **Native**: a file under the platform data dir via [`store::FileTokenStore`]

use dioxus::prelude::*;
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokens = store::LocalStorageTokenStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokens = store::MemoryTokenStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokens = store::FileTokenStore;

/// The client type every view talks to.
pub type Client = api::ApiClient<PlatformTokens>;

/// Create the platform-appropriate token store for `config`.
///
/// - **Web**: localStorage key `config.storage.token_key`
/// - **Native**: `<data_dir>/keep-notes/<token_key>`
pub fn make_tokens(config: &ClientConfig) -> PlatformTokens {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageTokenStore::new(&config.storage.token_key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::MemoryTokenStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("keep-notes");
        store::FileTokenStore::new(base, &config.storage.token_key)
    }
}

pub fn make_client(config: &ClientConfig) -> Client {
    api::ApiClient::from_config(config, make_tokens(config))
}

/// The client provided by [`SessionProvider`](crate::SessionProvider).
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// The configuration provided by [`SessionProvider`](crate::SessionProvider).
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}
