//! The signed-in home page: every note of the user in a grid, with
//! create/edit/delete.

use api::{ApiError, Operation};
use dioxus::prelude::*;
use store::config::ErrorSurfaces;
use store::{Note, NoteDraft, NotesAction, NotesState, SessionAction, SessionState};

use crate::auth::use_session;
use crate::client::{use_client, use_config, Client};
use crate::guard::ProtectedRoute;
use crate::header::Header;
use crate::icons::FaPlus;
use crate::note_card::NoteCard;
use crate::note_modal::NoteModal;
use crate::notes::use_notes;
use crate::pending::try_begin;
use crate::report::{confirm, report_error};
use crate::Icon;

const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";

/// Dashboard behind the sign-in guard.
///
/// `on_sign_in_required` fires when there is no session token on mount, after
/// logout, and when the backend rejects the token.
#[component]
pub fn DashboardView(on_sign_in_required: EventHandler<()>) -> Element {
    rsx! {
        ProtectedRoute {
            on_redirect: move |_| on_sign_in_required.call(()),
            NotesDashboard { on_sign_in_required }
        }
    }
}

/// What every async handler of the dashboard needs.
#[derive(Clone)]
struct Handles {
    client: Client,
    surfaces: ErrorSurfaces,
    session: Signal<SessionState>,
    notes: Signal<NotesState>,
    on_sign_in_required: EventHandler<()>,
}

impl Handles {
    /// A rejected token ends the session; anything else goes to the
    /// operation's configured surface, inline meaning the dashboard banner.
    fn fail(&self, op: Operation, err: &ApiError) {
        let mut notes = self.notes;
        if err.is_unauthorized() {
            tracing::warn!("Session rejected by backend, signing out");
            let mut session = self.session;
            self.client.auth().sign_out();
            session.write().apply(SessionAction::Logout);
            notes.write().reset();
            self.on_sign_in_required.call(());
            return;
        }
        tracing::error!("{:?} failed: {}", op, err);
        notes.write().apply(NotesAction::SetLoading(false));
        report_error(op, err, &self.surfaces, |msg| {
            notes.write().apply(NotesAction::SetError(Some(msg)))
        });
    }
}

#[component]
fn NotesDashboard(on_sign_in_required: EventHandler<()>) -> Element {
    let mut notes = use_notes();
    let handles = Handles {
        client: use_client(),
        surfaces: use_config().errors,
        session: use_session(),
        notes,
        on_sign_in_required,
    };
    let mut show_modal = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    // Initial load
    let load = handles.clone();
    use_effect(move || {
        let h = load.clone();
        spawn(async move {
            let mut notes = h.notes;
            notes.write().apply(NotesAction::SetLoading(true));
            match h.client.notes().list().await {
                Ok(list) => {
                    tracing::info!("Loaded {} notes", list.len());
                    notes.write().apply(NotesAction::SetAll(list));
                }
                Err(err) => h.fail(Operation::FetchNotes, &err),
            }
        });
    });

    let open_create = move |_| {
        notes.write().apply(NotesAction::SetSelected(None));
        show_modal.set(true);
    };

    let open_edit = move |note: Note| {
        notes.write().apply(NotesAction::SetSelected(Some(note)));
        show_modal.set(true);
    };

    let close_modal = move |_| {
        notes.write().apply(NotesAction::SetSelected(None));
        show_modal.set(false);
    };

    let save = {
        let h = handles.clone();
        move |draft: NoteDraft| {
            if !saving.with_mut(try_begin) {
                return;
            }
            let h = h.clone();
            let editing = notes.peek().selected.clone();
            spawn(async move {
                let mut notes = h.notes;
                match editing {
                    Some(existing) => {
                        match h.client.notes().update(&existing.id, &draft).await {
                            Ok(updated) => {
                                let mut state = notes.write();
                                state.apply(NotesAction::Update(updated));
                                state.apply(NotesAction::SetSelected(None));
                                show_modal.set(false);
                            }
                            Err(err) => h.fail(Operation::UpdateNote, &err),
                        }
                    }
                    None => match h.client.notes().create(&draft).await {
                        Ok(created) => {
                            notes.write().apply(NotesAction::Add(created));
                            show_modal.set(false);
                        }
                        Err(err) => h.fail(Operation::CreateNote, &err),
                    },
                }
                saving.set(false);
            });
        }
    };

    let delete = {
        let h = handles.clone();
        move |id: String| {
            if *deleting.peek() || !confirm(DELETE_PROMPT) {
                return;
            }
            if !deleting.with_mut(try_begin) {
                return;
            }
            let h = h.clone();
            spawn(async move {
                let mut notes = h.notes;
                match h.client.notes().delete(&id).await {
                    Ok(()) => notes.write().apply(NotesAction::Remove(id)),
                    Err(err) => h.fail(Operation::DeleteNote, &err),
                }
                deleting.set(false);
            });
        }
    };

    let state = notes.read();
    let busy = saving() || deleting();

    rsx! {
        div {
            class: "dashboard",
            Header { on_logout: move |_| on_sign_in_required.call(()) }

            main {
                class: "dashboard-main",
                div {
                    class: "dashboard-toolbar",
                    h1 { class: "dashboard-title", "My Notes" }
                    button {
                        class: "btn btn-primary",
                        disabled: busy,
                        onclick: open_create,
                        Icon { width: 12, height: 12, icon: FaPlus }
                        span { "Create New Note" }
                    }
                }

                if let Some(err) = state.error.clone() {
                    div { class: "error-banner", "{err}" }
                }

                if state.loading {
                    div { class: "dashboard-status", "Loading notes..." }
                } else if state.is_empty() {
                    div {
                        class: "dashboard-empty",
                        p { "No notes yet" }
                        p { class: "dashboard-empty-hint", "Create your first note to get started." }
                    }
                } else {
                    div {
                        class: "note-grid",
                        for note in state.notes.iter().cloned() {
                            NoteCard {
                                key: "{note.id}",
                                note,
                                busy,
                                on_edit: open_edit,
                                on_delete: delete.clone(),
                            }
                        }
                    }
                }
            }

            if show_modal() {
                NoteModal {
                    key: "{modal_key(state.selected.as_ref())}",
                    note: state.selected.clone(),
                    saving: saving(),
                    on_save: save.clone(),
                    on_close: close_modal,
                }
            }
        }
    }
}

/// Remount the modal when switching between notes so its fields reset.
fn modal_key(selected: Option<&Note>) -> String {
    match selected {
        Some(note) => format!("edit-{}", note.id),
        None => "create".to_string(),
    }
}
