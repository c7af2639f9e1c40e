//! Article Markdown Renderer
//!
//! Extends pulldown-cmark with:
//! - Syntax highlighting for fenced code blocks (syntect)
//! - Lazy-loaded images wrapped in a captioned `<figure>`
//! - External links opening in a new tab

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const CODE_THEME: &str = "base16-ocean.dark";

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(CODE_THEME)
}

/// Render an article body to HTML
pub fn render_article(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
    InImage { url: String, alt: String, depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }

                Event::Start(Tag::Image { dest_url, .. }) => {
                    state = State::InImage { url: dest_url.to_string(), alt: String::new(), depth: 0 };
                }

                Event::Start(Tag::Link { dest_url, title, .. }) if is_external(&dest_url) => {
                    let html = format!(
                        r#"<a href="{}" title="{}" target="_blank" rel="noopener noreferrer">"#,
                        escape_html(&dest_url),
                        escape_html(&title)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                }

                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },

            State::InImage { ref url, ref mut alt, ref mut depth } => match event {
                Event::Text(t) | Event::Code(t) => alt.push_str(&t),
                Event::Start(_) => *depth += 1,
                Event::End(_) if *depth > 0 => *depth -= 1,
                Event::End(_) => {
                    events.push(Event::Html(CowStr::from(figure_html(url, alt))));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn figure_html(url: &str, alt: &str) -> String {
    let alt = escape_html(alt);
    let caption = if alt.is_empty() {
        String::new()
    } else {
        format!("<figcaption>{alt}</figcaption>")
    };
    format!(
        r#"<figure class="article-figure"><img src="{}" alt="{}" loading="lazy" />{}</figure>"#,
        escape_html(url),
        alt,
        caption
    )
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme()
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
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
    fn test_plain_paragraph() {
        assert_eq!(render_article("Hello *world*").trim(), "<p>Hello <em>world</em></p>");
    }

    #[test]
    fn test_code_block_highlighted() {
        let html = render_article("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_external_link_new_tab() {
        let html = render_article("[docs](https://react.dev)");
        assert!(html.contains(r#"href="https://react.dev""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("docs</a>"));
    }

    #[test]
    fn test_internal_link_untouched() {
        let html = render_article("[more](/blogs)");
        assert!(html.contains(r#"<a href="/blogs">more</a>"#));
    }

    #[test]
    fn test_image_becomes_figure() {
        let html = render_article("![My *desk* setup](https://img.example/desk.jpg)");
        assert!(html.contains(r#"<figure class="article-figure">"#));
        assert!(html.contains(r#"alt="My desk setup""#));
        assert!(html.contains("<figcaption>My desk setup</figcaption>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
