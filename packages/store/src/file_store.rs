//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the bearer token in a single file, named after the
//! configured token key, so a native build stays signed in across restarts.
//!
//! ```text
//! <base_dir>/
//! └── <token_key>        # the raw token, no trailing newline
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/keep-notes/` on Linux.
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::path::PathBuf;

use crate::token::TokenStore;

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf, key: &str) -> Self {
        Self {
            path: base.join(key),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create token directory {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!("Failed to persist token to {}: {}", self.path.display(), e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove token {}: {}", self.path.display(), e),
        }
    }
}
