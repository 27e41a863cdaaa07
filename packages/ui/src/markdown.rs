use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

/// Whether a link or image destination may be emitted as-is: relative, or
/// one of `http`, `https`, `mailto`.
fn is_safe_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside the scheme
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let scheme_end = cleaned.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}

fn sanitize(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Render note content to HTML for the card preview.
///
/// Raw HTML in the note is shown as text rather than injected, and link or
/// image targets with any scheme other than `http`, `https` or `mailto` are
/// replaced by `#`.
pub fn render_preview(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: sanitize(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: sanitize(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_editor_markup() {
        let out = render_preview("# Title\n\n**bold** and *italic*\n\n- one\n- two");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<em>italic</em>"));
        assert!(out.contains("<li>one</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render_preview("hi <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let out = render_preview("[click](javascript:alert(document.cookie))");
        assert!(!out.contains("href=\"javascript:"));
        assert!(out.contains("<a href=\"#\">click</a>"));

        let out = render_preview("[x](JavaScript:alert(1)) ![img](data:image/svg+xml,abc)");
        assert!(!out.to_lowercase().contains("javascript:"));
        assert!(!out.contains("data:"));
    }

    #[test]
    fn test_safe_links_are_kept() {
        let out = render_preview("[site](https://example.com) [mail](mailto:a@b.c) [rel](/notes/1)");
        assert!(out.contains("href=\"https://example.com\""));
        assert!(out.contains("href=\"mailto:a@b.c\""));
        assert!(out.contains("href=\"/notes/1\""));
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("http://example.com"));
        assert!(is_safe_url("notes/page#top"));
        assert!(is_safe_url("?q=a:b"));
        assert!(!is_safe_url(" javascript:alert(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
        assert!(!is_safe_url("vbscript:msgbox"));
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(render_preview(""), "");
    }
}
