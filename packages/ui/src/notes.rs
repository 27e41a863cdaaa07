use dioxus::prelude::*;
use store::NotesState;

/// The notes store provided by [`SessionProvider`](crate::SessionProvider).
pub fn use_notes() -> Signal<NotesState> {
    use_context::<Signal<NotesState>>()
}
