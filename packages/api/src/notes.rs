//! CRUD on the signed-in user's notes. Ownership is enforced by the backend
//! from the bearer token; nothing here filters by user.

use reqwest::Method;
use store::{Note, NoteDraft, TokenStore};

use crate::client::ApiClient;
use crate::error::{ApiError, Operation};
use crate::models::{NoteRequest, NoteResponse};

pub struct NotesService<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: TokenStore> NotesService<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// All notes, newest first (the backend sorts by creation date).
    pub async fn list(&self) -> Result<Vec<Note>, ApiError> {
        let op = Operation::FetchNotes;
        let request = self.client.request(op, Method::GET, &["notes"])?;
        let notes: Vec<NoteResponse> = self.client.fetch(op, request).await?;
        tracing::debug!("Fetched {} notes", notes.len());
        Ok(notes.into_iter().map(Note::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Note, ApiError> {
        let op = Operation::FetchNote;
        let request = self.client.request(op, Method::GET, &["notes", id])?;
        let note: NoteResponse = self.client.fetch(op, request).await?;
        Ok(note.into())
    }

    pub async fn create(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        let op = Operation::CreateNote;
        let request = self
            .client
            .request(op, Method::POST, &["notes"])?
            .json(&NoteRequest::from(draft));
        let note: NoteResponse = self.client.fetch(op, request).await?;
        tracing::debug!("Created note {}", note.note_id);
        Ok(note.into())
    }

    /// Replace title and content of note `id`.
    pub async fn update(&self, id: &str, draft: &NoteDraft) -> Result<Note, ApiError> {
        let op = Operation::UpdateNote;
        let request = self
            .client
            .request(op, Method::PUT, &["notes", id])?
            .json(&NoteRequest::from(draft));
        let note: NoteResponse = self.client.fetch(op, request).await?;
        tracing::debug!("Updated note {}", note.note_id);
        Ok(note.into())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let op = Operation::DeleteNote;
        let request = self.client.request(op, Method::DELETE, &["notes", id])?;
        self.client.execute(op, request).await?;
        tracing::debug!("Deleted note {}", id);
        Ok(())
    }
}
