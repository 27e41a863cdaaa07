use dioxus::prelude::*;
use store::{Note, NoteDraft, ValidationError};

use crate::editor::RichTextEditor;
use crate::views::ModalOverlay;

/// Create/edit form for a note.
///
/// With `note` set the form is prefilled and titled "Edit Note"; otherwise it
/// starts empty as "Create New Note". `on_save` only fires for a draft that
/// passes validation. The fields are kept when a save fails so the user can
/// retry.
#[component]
pub fn NoteModal(
    note: Option<Note>,
    /// A save is in flight; the submit button is disabled.
    #[props(default)]
    saving: bool,
    on_save: EventHandler<NoteDraft>,
    on_close: EventHandler<()>,
) -> Element {
    let is_edit = note.is_some();
    let initial = note.as_ref().map(Note::draft).unwrap_or_default();
    let mut title = use_signal(|| initial.title.clone());
    let mut content = use_signal(|| initial.content.clone());
    let mut errors = use_signal(Vec::<ValidationError>::new);

    let heading = if is_edit { "Edit Note" } else { "Create New Note" };
    let submit_label = match (is_edit, saving) {
        (_, true) => "Saving...",
        (true, false) => "Update Note",
        (false, false) => "Create Note",
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = NoteDraft::new(title(), content());
        let problems = draft.validate();
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());
        on_save.call(draft);
    };

    let field_error = move |which: ValidationError| {
        errors
            .read()
            .iter()
            .find(|e| **e == which)
            .map(|e| e.to_string())
    };

    rsx! {
        ModalOverlay {
            title: "{heading}",
            on_close: move |_| on_close.call(()),
            form {
                class: "note-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "note-title", "Title" }
                    input {
                        id: "note-title",
                        class: "input",
                        r#type: "text",
                        placeholder: "Note title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                    if let Some(msg) = field_error(ValidationError::TitleRequired) {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-field",
                    label { "Content" }
                    RichTextEditor {
                        value: content(),
                        on_change: move |text: String| content.set(text),
                    }
                    if let Some(msg) = field_error(ValidationError::ContentRequired) {
                        p { class: "field-error", "{msg}" }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
