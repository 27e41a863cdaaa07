//! # API crate: HTTP service layer for Keep Notes
//!
//! Thin wrappers over the REST backend. Every call is one request and one
//! response: no retries, no timeouts, no caching, no cancellation. A failed call
//! comes back as a typed [`ApiError`] and the caller decides how to show it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, `reqwest` client, bearer token attachment |
//! | [`auth`] | [`AuthService`]: sign up, sign in (persists the token), sign out |
//! | [`notes`] | [`NotesService`]: list, get, create, update, delete |
//! | [`error`] | [`ApiError`], [`ErrorKind`], and the per-call [`Operation`] fallbacks |
//! | [`models`] | Wire DTOs matching the backend's JSON and their conversions to `store` types |
//!
//! ## Endpoints
//!
//! - `POST /auth/signup`, `POST /auth/signin`
//! - `GET /notes`, `GET /notes/{id}`, `POST /notes`, `PUT /notes/{id}`, `DELETE /notes/{id}`

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod notes;

pub use auth::{AuthService, SignIn, SignUp, SignedIn};
pub use client::ApiClient;
pub use error::{ApiError, ErrorKind, Operation};
pub use notes::NotesService;
