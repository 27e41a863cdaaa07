//! Wire DTOs for the REST backend and their conversions into `store` types.

mod note;
mod user;

pub use note::{NoteRequest, NoteResponse};
pub use user::{SignInRequest, SignUpRequest, TokenResponse, UserResponse};
