//! Puzzle description extraction and Markdown conversion.
//!
//! The website marks each unlocked puzzle part with a `.day-desc` element.
//! That coupling to the page structure lives entirely here: the core only
//! sees the [`DescriptionConverter`] port, so a markup change on the site
//! touches this one adapter.
//!
//! Conversion is deliberately narrow - it covers the markup the event's
//! pages actually use (headings, paragraphs, emphasis, inline code, code
//! fences, lists, links) and degrades to plain text for anything else.
//! Emphasis renders with `**` delimiters.

use scraper::{ElementRef, Html, Node, Selector};

use advent_core::{application::ports::DescriptionConverter, error::AdventResult};

/// CSS class the website uses for description blocks.
const DAY_DESC_SELECTOR: &str = ".day-desc";

/// Scraper-based converter from puzzle page HTML to Markdown blocks.
pub struct DayDescConverter {
    selector: Selector,
}

impl DayDescConverter {
    pub fn new() -> Self {
        Self {
            // The selector is a literal; parsing it cannot fail.
            selector: Selector::parse(DAY_DESC_SELECTOR).unwrap(),
        }
    }
}

impl Default for DayDescConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptionConverter for DayDescConverter {
    fn convert(&self, page_html: &str) -> AdventResult<Vec<String>> {
        let page = Html::parse_document(page_html);
        Ok(page.select(&self.selector).map(render_block).collect())
    }
}

fn render_block(block: ElementRef) -> String {
    let mut out = String::new();
    render_children(block, &mut out);
    out.trim().to_string()
}

fn render_children(el: ElementRef, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => push_collapsed(out, text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    render_element(child_el, out);
                }
            }
            _ => {}
        }
    }
}

fn render_element(el: ElementRef, out: &mut String) {
    match el.value().name() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = usize::from(el.value().name().as_bytes()[1] - b'0');
            end_block(out);
            out.push_str(&"#".repeat(level));
            out.push(' ');
            render_children(el, out);
            end_block(out);
        }
        "p" => {
            render_children(el, out);
            end_block(out);
        }
        "em" | "i" | "strong" | "b" => {
            out.push_str("**");
            render_children(el, out);
            out.push_str("**");
        }
        "code" => {
            out.push('`');
            push_raw(el, out);
            out.push('`');
        }
        "pre" => {
            end_block(out);
            out.push_str("```\n");
            push_raw(el, out);
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```");
            end_block(out);
        }
        "ul" => {
            end_block(out);
            for item in el.children().filter_map(ElementRef::wrap) {
                if item.value().name() == "li" {
                    let mut line = String::new();
                    render_children(item, &mut line);
                    out.push_str("* ");
                    out.push_str(line.trim());
                    out.push('\n');
                }
            }
            end_block(out);
        }
        "a" => {
            let mut label = String::new();
            render_children(el, &mut label);
            match el.value().attr("href") {
                Some(href) => {
                    out.push('[');
                    out.push_str(label.trim());
                    out.push_str("](");
                    out.push_str(href);
                    out.push(')');
                }
                None => out.push_str(&label),
            }
        }
        "br" => out.push('\n'),
        // script/style never carry description text
        "script" | "style" => {}
        // spans and anything unrecognised: keep the text, drop the tag
        _ => render_children(el, out),
    }
}

/// Inline text with whitespace runs collapsed to a single space. Leading
/// whitespace after a line break or at the start of a block is dropped.
fn push_collapsed(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !(out.is_empty() || out.ends_with(' ') || out.ends_with('\n')) {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
}

/// Descendant text verbatim - used inside code spans and fences, where
/// whitespace is meaningful and nested markup is noise.
fn push_raw(el: ElementRef, out: &mut String) {
    for text in el.text() {
        out.push_str(text);
    }
}

/// Terminate the current block so the next one starts after a blank line.
fn end_block(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    if out.is_empty() {
        return;
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out.push_str("\n\n");
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(page: &str) -> Vec<String> {
        DayDescConverter::new().convert(page).unwrap()
    }

    #[test]
    fn extracts_single_block() {
        let blocks = convert(r#"<html><body><article class="day-desc"><p>Hello</p></article></body></html>"#);
        assert_eq!(blocks, vec!["Hello".to_string()]);
    }

    #[test]
    fn extracts_blocks_in_document_order() {
        let blocks = convert(concat!(
            r#"<article class="day-desc"><p>Part1</p></article>"#,
            r#"<p class="day-success">Done!</p>"#,
            r#"<article class="day-desc"><p>Part2</p></article>"#,
        ));
        assert_eq!(blocks, vec!["Part1".to_string(), "Part2".to_string()]);
    }

    #[test]
    fn page_without_description_yields_no_blocks() {
        assert!(convert("<html><body><main>nothing here</main></body></html>").is_empty());
    }

    #[test]
    fn heading_renders_with_hash_prefix() {
        let blocks = convert(
            r#"<article class="day-desc"><h2>--- Day 5: Hydrothermal Venture ---</h2><p>Lines of vents.</p></article>"#,
        );
        assert_eq!(
            blocks[0],
            "## --- Day 5: Hydrothermal Venture ---\n\nLines of vents."
        );
    }

    #[test]
    fn emphasis_uses_double_asterisks() {
        let blocks = convert(
            r#"<article class="day-desc"><p>How many points <em>at least two</em> overlap?</p></article>"#,
        );
        assert_eq!(blocks[0], "How many points **at least two** overlap?");
        let strong = convert(r#"<article class="day-desc"><p><strong>both</strong></p></article>"#);
        assert_eq!(strong[0], "**both**");
    }

    #[test]
    fn inline_code_and_fences() {
        let blocks = convert(concat!(
            r#"<article class="day-desc">"#,
            r#"<p>Consider <code>1,2,3</code>:</p>"#,
            "<pre><code>0,9 -&gt; 5,9\n8,0 -&gt; 0,8\n</code></pre>",
            r#"</article>"#,
        ));
        assert_eq!(
            blocks[0],
            "Consider `1,2,3`:\n\n```\n0,9 -> 5,9\n8,0 -> 0,8\n```"
        );
    }

    #[test]
    fn lists_render_as_bullets() {
        let blocks = convert(concat!(
            r#"<article class="day-desc"><ul>"#,
            r#"<li>An entry like <code>1-3 a</code></li>"#,
            r#"<li>Another <em>rule</em></li>"#,
            r#"</ul></article>"#,
        ));
        assert_eq!(blocks[0], "* An entry like `1-3 a`\n* Another **rule**");
    }

    #[test]
    fn links_keep_their_target() {
        let blocks = convert(
            r#"<article class="day-desc"><p>See <a href="/2021/day/4">day 4</a>.</p></article>"#,
        );
        assert_eq!(blocks[0], "See [day 4](/2021/day/4).");
    }

    #[test]
    fn source_whitespace_collapses() {
        let blocks = convert(
            "<article class=\"day-desc\"><p>wrapped\n    source\n    lines</p></article>",
        );
        assert_eq!(blocks[0], "wrapped source lines");
    }

    #[test]
    fn conversion_is_deterministic() {
        let page = r#"<article class="day-desc"><h2>T</h2><p>a <em>b</em> <code>c</code></p></article>"#;
        assert_eq!(convert(page), convert(page));
    }
}
