//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, make_tokens, use_client, use_config, Client, PlatformTokens};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{use_session, LogoutButton, SessionProvider};

mod notes;
pub use notes::use_notes;

mod guard;
pub use guard::ProtectedRoute;

mod header;
pub use header::Header;

mod pending;

mod report;
pub use report::{alert, confirm, report_error};

pub mod markdown;
pub use markdown::render_preview;

mod editor;
pub use editor::RichTextEditor;

mod note_card;
pub use note_card::NoteCard;

mod note_modal;
pub use note_modal::NoteModal;
