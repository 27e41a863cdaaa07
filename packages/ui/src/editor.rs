use dioxus::prelude::*;
use store::format::{apply_format, utf16_len, FormatKind};

/// Simple counter for unique IDs
static EDITOR_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Script that reports `[selectionStart, selectionEnd]` of the textarea.
fn selection_script(id: &str) -> String {
    format!(
        r#"(function() {{
            var el = document.getElementById({id_js});
            if (!el) {{ dioxus.send([]); return; }}
            dioxus.send([el.selectionStart, el.selectionEnd]);
        }})();"#,
        id_js = js_string_escape(id),
    )
}

/// Script that refocuses the textarea and puts the caret at `caret` once the
/// new value has been rendered.
fn caret_script(id: &str, caret: usize) -> String {
    format!(
        r#"(function() {{
            requestAnimationFrame(function() {{
                setTimeout(function() {{
                    var el = document.getElementById({id_js});
                    if (!el) return;
                    el.focus();
                    el.setSelectionRange({caret}, {caret});
                }}, 0);
            }});
        }})();"#,
        id_js = js_string_escape(id),
    )
}

/// Textarea with a markdown formatting toolbar (bold, italic, heading, bullet).
///
/// Toolbar buttons read the current selection from the DOM, rewrite the text
/// with [`apply_format`], report it through `on_change`, then restore focus
/// with the caret just past the inserted markup.
#[component]
pub fn RichTextEditor(
    value: String,
    on_change: EventHandler<String>,
    #[props(default = "Start writing your note...".to_string())] placeholder: String,
) -> Element {
    let editor_id = use_signal(|| {
        let n = EDITOR_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("editor-textarea-{n}")
    });
    let mut content = use_signal(|| value.clone());

    // Follow external resets of the value
    if *content.peek() != value {
        content.set(value.clone());
    }

    let apply = move |kind: FormatKind| {
        spawn(async move {
            let id = editor_id.peek().clone();
            let text = content.peek().clone();

            let mut eval = document::eval(&selection_script(&id));
            let selection = match eval.recv::<Vec<usize>>().await {
                Ok(sel) if sel.len() == 2 => sel[0]..sel[1],
                Ok(_) | Err(_) => {
                    tracing::debug!("No selection for {}, formatting at end", id);
                    let end = utf16_len(&text);
                    end..end
                }
            };

            let formatted = apply_format(&text, selection, kind);
            content.set(formatted.text.clone());
            on_change.call(formatted.text);
            document::eval(&caret_script(&id, formatted.caret));
        });
    };

    rsx! {
        div {
            class: "editor",
            div {
                class: "editor-toolbar",
                for kind in FormatKind::ALL {
                    button {
                        key: "{kind.name()}",
                        r#type: "button",
                        class: "editor-btn editor-btn--{kind.name()}",
                        title: kind.title(),
                        onclick: move |_| apply(kind),
                        "{kind.label()}"
                    }
                }
            }
            textarea {
                id: "{editor_id}",
                class: "editor-textarea",
                placeholder: "{placeholder}",
                value: "{content}",
                oninput: move |evt: FormEvent| {
                    let text = evt.value();
                    content.set(text.clone());
                    on_change.call(text);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escape() {
        assert_eq!(js_string_escape("plain"), "\"plain\"");
        assert_eq!(js_string_escape("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(js_string_escape("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(js_string_escape("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_scripts_embed_escaped_id() {
        let script = selection_script("editor-textarea-3");
        assert!(script.contains("getElementById(\"editor-textarea-3\")"));

        let script = caret_script("x", 15);
        assert!(script.contains("setSelectionRange(15, 15)"));
    }
}
