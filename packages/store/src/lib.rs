pub mod config;
pub mod format;
pub mod guard;
pub mod models;
pub mod notes;
pub mod session;
pub mod token;
pub mod validation;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageTokenStore;

pub use config::{ClientConfig, ErrorSurface};
pub use format::{apply_format, apply_named, FormatKind, Formatted};
pub use guard::{Redirect, RouteGuard};
pub use models::{Note, NoteDraft, UserSummary};
pub use notes::{NotesAction, NotesState};
pub use session::{AuthStatus, SessionAction, SessionState};
pub use token::TokenStore;
pub use validation::ValidationError;
