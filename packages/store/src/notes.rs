//! # Notes store
//!
//! [`NotesState`] is the in-memory view of the signed-in user's notes. It is
//! never the source of truth: the backend is, and every mutation here follows a
//! successful service call.
//!
//! All changes go through [`NotesState::apply`] with a [`NotesAction`]:
//!
//! | Action | Effect |
//! |--------|--------|
//! | `SetAll(list)` | Replace the collection, clear `loading` and `error`. |
//! | `SetSelected(note)` | Track the note being edited (or none). |
//! | `Add(note)` | Prepend, so new notes appear first. |
//! | `Update(note)` | Replace the entry with the same id; no-op if absent. |
//! | `Remove(id)` | Drop the entry with that id; no-op if absent. |
//! | `SetLoading(flag)` | Toggle the loading flag. |
//! | `SetError(msg)` | Set or clear the error; always clears `loading`. |

use crate::models::Note;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub selected: Option<Note>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotesAction {
    SetAll(Vec<Note>),
    SetSelected(Option<Note>),
    Add(Note),
    Update(Note),
    Remove(String),
    SetLoading(bool),
    SetError(Option<String>),
}

impl NotesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: NotesAction) {
        match action {
            NotesAction::SetAll(notes) => {
                self.notes = notes;
                self.loading = false;
                self.error = None;
            }
            NotesAction::SetSelected(note) => {
                self.selected = note;
            }
            NotesAction::Add(note) => {
                self.notes.insert(0, note);
            }
            NotesAction::Update(note) => {
                if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
                    *slot = note;
                }
            }
            NotesAction::Remove(id) => {
                self.notes.retain(|n| n.id != id);
                if self.selected.as_ref().is_some_and(|n| n.id == id) {
                    self.selected = None;
                }
            }
            NotesAction::SetLoading(loading) => {
                self.loading = loading;
            }
            NotesAction::SetError(error) => {
                self.error = error;
                self.loading = false;
            }
        }
    }

    /// Back to the initial empty state, used on sign-out.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
