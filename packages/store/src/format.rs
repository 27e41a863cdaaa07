//! # Markdown formatting of a text selection
//!
//! The editor toolbar applies markdown symbols to the selected text of a
//! `<textarea>`. [`apply_format`] is the pure transform behind it: given the
//! buffer, the selection `[start, end)` and a [`FormatKind`], it returns the new
//! buffer and where the caret should go.
//!
//! | Kind | Result | Caret |
//! |------|--------|-------|
//! | `Bold` | `**sel**` | `end + 4` |
//! | `Italic` | `*sel*` | `end + 2` |
//! | `Heading` | `# sel` | `end + 2` |
//! | `BulletList` | `- sel` | `end + 2` |
//! | unknown (via [`apply_named`]) | unchanged | `end` |
//!
//! Offsets are UTF-16 code units, which is what the DOM reports for
//! `selectionStart`/`selectionEnd`. Offsets past the end are clamped, a reversed
//! range is swapped, and an offset inside a surrogate pair snaps back to the
//! start of that character. Nothing checks that the result is valid markdown.

use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Bold,
    Italic,
    Heading,
    BulletList,
}

impl FormatKind {
    /// Toolbar order.
    pub const ALL: [FormatKind; 4] = [
        FormatKind::Bold,
        FormatKind::Italic,
        FormatKind::Heading,
        FormatKind::BulletList,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(FormatKind::Bold),
            "italic" => Some(FormatKind::Italic),
            "heading" => Some(FormatKind::Heading),
            "bullet" | "bullet-list" => Some(FormatKind::BulletList),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Bold => "bold",
            FormatKind::Italic => "italic",
            FormatKind::Heading => "heading",
            FormatKind::BulletList => "bullet",
        }
    }

    /// Button face.
    pub fn label(&self) -> &'static str {
        match self {
            FormatKind::Bold => "B",
            FormatKind::Italic => "I",
            FormatKind::Heading => "H",
            FormatKind::BulletList => "•",
        }
    }

    /// Button tooltip.
    pub fn title(&self) -> &'static str {
        match self {
            FormatKind::Bold => "Bold",
            FormatKind::Italic => "Italic",
            FormatKind::Heading => "Heading",
            FormatKind::BulletList => "Bullet List",
        }
    }

    /// Tokens inserted before and after the selection.
    fn tokens(&self) -> (&'static str, &'static str) {
        match self {
            FormatKind::Bold => ("**", "**"),
            FormatKind::Italic => ("*", "*"),
            FormatKind::Heading => ("# ", ""),
            FormatKind::BulletList => ("- ", ""),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// New caret position, in UTF-16 code units.
    pub caret: usize,
}

/// Wrap or prefix the selected text with the markup for `kind`.
pub fn apply_format(text: &str, selection: Range<usize>, kind: FormatKind) -> Formatted {
    let (start, end) = normalize(text, selection);
    let (before, after) = kind.tokens();
    let start_byte = utf16_to_byte(text, start);
    let end_byte = utf16_to_byte(text, end);

    let mut out = String::with_capacity(text.len() + before.len() + after.len());
    out.push_str(&text[..start_byte]);
    out.push_str(before);
    out.push_str(&text[start_byte..end_byte]);
    out.push_str(after);
    out.push_str(&text[end_byte..]);

    // Tokens are ASCII, so byte length equals UTF-16 length
    Formatted {
        text: out,
        caret: end + before.len() + after.len(),
    }
}

/// Like [`apply_format`], but takes the toolbar's format name. Unknown names
/// leave the buffer untouched with the caret at the end of the selection.
pub fn apply_named(text: &str, selection: Range<usize>, name: &str) -> Formatted {
    match FormatKind::from_name(name) {
        Some(kind) => apply_format(text, selection, kind),
        None => {
            let (_, end) = normalize(text, selection);
            Formatted {
                text: text.to_string(),
                caret: end,
            }
        }
    }
}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn normalize(text: &str, selection: Range<usize>) -> (usize, usize) {
    let len = utf16_len(text);
    let a = selection.start.min(len);
    let b = selection.end.min(len);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    (snap(text, start), snap(text, end))
}

/// Move an offset that lands inside a surrogate pair back to the pair's start.
fn snap(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for c in text.chars() {
        let width = c.len_utf16();
        if units + width > offset {
            return units;
        }
        units += width;
    }
    units
}

fn utf16_to_byte(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (byte, c) in text.char_indices() {
        if units >= offset {
            return byte;
        }
        units += c.len_utf16();
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_wraps_selection() {
        let out = apply_format("hello world", 6..11, FormatKind::Bold);
        assert_eq!(out.text, "hello **world**");
        assert_eq!(out.caret, 15);
    }

    #[test]
    fn test_italic_on_empty_selection() {
        let out = apply_format("hello", 5..5, FormatKind::Italic);
        assert_eq!(out.text, "hello**");
        assert_eq!(out.caret, 7);
    }

    #[test]
    fn test_heading_and_bullet_prefix() {
        let out = apply_format("title", 0..5, FormatKind::Heading);
        assert_eq!(out.text, "# title");
        assert_eq!(out.caret, 7);

        let out = apply_format("a\nitem", 2..6, FormatKind::BulletList);
        assert_eq!(out.text, "a\n- item");
        assert_eq!(out.caret, 8);
    }

    #[test]
    fn test_unknown_kind_is_identity() {
        let out = apply_named("hello world", 0..5, "underline");
        assert_eq!(out.text, "hello world");
        assert_eq!(out.caret, 5);
    }

    #[test]
    fn test_named_kinds() {
        assert_eq!(apply_named("x", 0..1, "bold").text, "**x**");
        assert_eq!(apply_named("x", 0..1, "bullet").text, "- x");
        assert_eq!(apply_named("x", 0..1, "bullet-list").text, "- x");
        for kind in FormatKind::ALL {
            assert_eq!(FormatKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_whole_buffer_and_empty_buffer() {
        let out = apply_format("all of it", 0..9, FormatKind::Italic);
        assert_eq!(out.text, "*all of it*");

        let out = apply_format("", 0..0, FormatKind::Bold);
        assert_eq!(out.text, "****");
        assert_eq!(out.caret, 4);
    }

    #[test]
    fn test_out_of_range_and_reversed_selection() {
        let out = apply_format("abc", 1..99, FormatKind::Bold);
        assert_eq!(out.text, "a**bc**");
        assert_eq!(out.caret, 7);

        let out = apply_format("abc", 3..1, FormatKind::Italic);
        assert_eq!(out.text, "a*bc*");
        assert_eq!(out.caret, 5);
    }

    #[test]
    fn test_utf16_offsets() {
        // "é" is one UTF-16 unit but two bytes
        let out = apply_format("café au lait", 0..4, FormatKind::Bold);
        assert_eq!(out.text, "**café** au lait");
        assert_eq!(out.caret, 8);

        // "😀" is two UTF-16 units
        let text = "hi 😀 there";
        assert_eq!(utf16_len(text), 11);
        let out = apply_format(text, 3..5, FormatKind::Italic);
        assert_eq!(out.text, "hi *😀* there");
        assert_eq!(out.caret, 7);
    }

    #[test]
    fn test_offset_inside_surrogate_pair_snaps_back() {
        let out = apply_format("😀x", 1..1, FormatKind::Heading);
        assert_eq!(out.text, "# 😀x");
        assert_eq!(out.caret, 2);
    }
}
