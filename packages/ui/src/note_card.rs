use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use store::Note;

use crate::markdown::render_preview;

/// One note in the dashboard grid: date, title, rendered preview, and
/// Edit/Delete actions.
#[component]
pub fn NoteCard(
    note: Note,
    on_edit: EventHandler<Note>,
    on_delete: EventHandler<String>,
    /// Disable the actions while another mutation is running.
    #[props(default)]
    busy: bool,
) -> Element {
    let preview = render_preview(&note.content);
    let date = note.created_label();
    let id = note.id.clone();

    rsx! {
        div {
            class: "note-card",
            div { class: "note-card-date", "{date}" }
            h3 { class: "note-card-title", "{note.title}" }
            div {
                class: "note-card-preview markdown",
                dangerous_inner_html: "{preview}",
            }
            div {
                class: "note-card-actions",
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: busy,
                    onclick: {
                        let note = note.clone();
                        move |_| on_edit.call(note.clone())
                    },
                    Icon { width: 12, height: 12, icon: FaPen }
                    span { "Edit" }
                }
                button {
                    class: "btn btn-danger btn-sm",
                    disabled: busy,
                    onclick: move |_| on_delete.call(id.clone()),
                    Icon { width: 12, height: 12, icon: FaTrash }
                    span { "Delete" }
                }
            }
        }
    }
}
