//! Inline Markdown for Activity Notes
//!
//! Notes support pulldown-cmark's inline syntax (emphasis, strong, links,
//! strikethrough). Extensions over plain CommonMark:
//! - external links (`http://`, `https://`) open in a new tab
//! - raw HTML in notes is shown as text

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render a note to HTML. A single paragraph loses its wrapping `<p>`.
pub fn parse_markdown_inline(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let events = transform_events(parser);
    let mut html = String::new();
    push_html(&mut html, events.into_iter());

    let single = html
        .trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .filter(|inner| !inner.contains("<p>"))
        .map(str::to_string);
    single.unwrap_or(html)
}

fn is_external(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // one entry per open link: whether it was rewritten
    let mut open_links: Vec<bool> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::Link { dest_url, title, .. }) if is_external(&dest_url) => {
                let mut html = format!(r#"<a href="{}""#, escape_html(&dest_url));
                if !title.is_empty() {
                    html.push_str(&format!(r#" title="{}""#, escape_html(&title)));
                }
                html.push_str(r#" target="_blank" rel="noopener noreferrer">"#);
                events.push(Event::Html(CowStr::from(html)));
                open_links.push(true);
            }
            Event::Start(tag @ Tag::Link { .. }) => {
                events.push(Event::Start(tag));
                open_links.push(false);
            }
            Event::End(TagEnd::Link) => {
                if open_links.pop().unwrap_or(false) {
                    events.push(Event::Html(CowStr::from("</a>")));
                } else {
                    events.push(Event::End(TagEnd::Link));
                }
            }
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            other => events.push(other),
        }
    }
    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_and_emphasis() {
        assert_eq!(
            parse_markdown_inline("**book ahead** in *high* season"),
            "<strong>book ahead</strong> in <em>high</em> season"
        );
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        assert_eq!(
            parse_markdown_inline("[Tickets](https://legohouse.com)"),
            r#"<a href="https://legohouse.com" target="_blank" rel="noopener noreferrer">Tickets</a>"#
        );
    }

    #[test]
    fn test_fragment_link_untouched() {
        assert_eq!(
            parse_markdown_inline("see [packing](#practical)"),
            r##"see <a href="#practical">packing</a>"##
        );
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown_inline("a <b>bold</b> claim");
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_multiple_paragraphs_keep_their_tags() {
        let html = parse_markdown_inline("Open from 10:00.\n\nClosed on *Mondays*.");
        assert_eq!(html.trim(), "<p>Open from 10:00.</p>\n<p>Closed on <em>Mondays</em>.</p>");
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_markdown_inline("Cathedral tower: 248 steps."), "Cathedral tower: 248 steps.");
    }
}
