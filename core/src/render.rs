//! # Renderers
//!
//! A [`Renderer`] turns a [`Document`] into text. The assembler knows nothing
//! about output formats; anything that accepts the four node kinds in order
//! can sit behind this trait.

use crate::document::{Document, DocumentNode};

/// Converts an assembled document into a text blob.
pub trait Renderer {
    fn render(&self, document: &Document) -> String;
}

/// CommonMark output: ATX headings, `>` quotes, `-` bullet lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl Renderer for Markdown {
    fn render(&self, document: &Document) -> String {
        let mut out = document
            .iter()
            .map(render_node)
            .collect::<Vec<String>>()
            .join("\n\n");
        out.push('\n');
        out
    }
}

fn render_node(node: &DocumentNode) -> String {
    match node {
        DocumentNode::Heading { level, text } => {
            let text: Vec<&str> = text.lines().map(str::trim).collect();
            format!(
                "{} {}",
                "#".repeat(usize::from(*level).clamp(1, 6)),
                text.join(" ")
            )
        }
        DocumentNode::Quote(text) => text_lines(text)
            .map(|line| format!("> {line}"))
            .collect::<Vec<String>>()
            .join("\n"),
        DocumentNode::Paragraph(texts) => texts
            .iter()
            .map(|text| text_lines(text).collect::<Vec<String>>().join("\n"))
            .collect::<Vec<String>>()
            .join("\n\n"),
        DocumentNode::List(items) => items
            .iter()
            .map(|item| list_item(item))
            .collect::<Vec<String>>()
            .join("\n"),
    }
}

/// First line after the bullet, continuation lines indented under it.
fn list_item(item: &str) -> String {
    text_lines(item)
        .enumerate()
        .map(|(idx, line)| match idx {
            0 => format!("- {line}"),
            _ => format!("  {line}"),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// Lines of free text, each safe to place at the start of a Markdown line.
fn text_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n')
        .map(|line| escape_heading(line.trim_end_matches('\r')))
}

/// A leading `#` would open a heading; escape it.
fn escape_heading(line: &str) -> String {
    let body = line.trim_start();
    if body.starts_with('#') {
        let indent = &line[..line.len() - body.len()];
        format!("{indent}\\{body}")
    } else {
        line.to_string()
    }
}

/// Recovers the ATX headings of a Markdown text as `(level, text)` pairs.
pub fn parse_headings(markdown: &str) -> Vec<(u8, String)> {
    markdown.lines().filter_map(parse_heading).collect()
}

fn parse_heading(line: &str) -> Option<(u8, String)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let rest = &line[hashes..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }

    let level = u8::try_from(hashes).ok()?;
    Some((level, rest.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        [
            DocumentNode::heading(1, "Title"),
            DocumentNode::quote("Between us."),
            DocumentNode::heading(2, "Intro"),
            DocumentNode::paragraphs(["First.", "Second."]),
            DocumentNode::list(["One", "Two"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn renders_each_node_kind() {
        let text = Markdown.render(&sample());
        assert_eq!(
            text,
            "# Title\n\n> Between us.\n\n## Intro\n\nFirst.\n\nSecond.\n\n- One\n- Two\n"
        );
    }

    #[test]
    fn empty_document_renders_newline() {
        assert_eq!(Markdown.render(&Document::new()), "\n");
    }

    #[test]
    fn parses_atx_headings_only() {
        let text = "# One\nbody\n## Two\n#hashtag\n####### seven\n### \n*not* a heading\n";
        assert_eq!(
            parse_headings(text),
            vec![
                (1, String::from("One")),
                (2, String::from("Two")),
                (3, String::new()),
            ]
        );
    }

    #[test]
    fn multi_line_text_cannot_open_headings() {
        let document: Document = [
            DocumentNode::heading(2, "Phases"),
            DocumentNode::quote("Cost: $10\n## Payments"),
            DocumentNode::paragraph("Intro\n# Title"),
            DocumentNode::list(["Landing page\n## Payments", "Login"]),
        ]
        .into_iter()
        .collect();

        let text = Markdown.render(&document);
        assert_eq!(
            text,
            "## Phases\n\n> Cost: $10\n> \\## Payments\n\nIntro\n\\# Title\n\n\
- Landing page\n  \\## Payments\n- Login\n"
        );
        assert_eq!(parse_headings(&text), vec![(2, String::from("Phases"))]);
    }

    #[test]
    fn heading_text_is_kept_on_one_line() {
        let document: Document = [DocumentNode::heading(1, "Web\n## Development")]
            .into_iter()
            .collect();
        assert_eq!(Markdown.render(&document), "# Web ## Development\n");
    }

    #[test]
    fn headings_survive_rendering() {
        let document = sample();
        let rendered = Markdown.render(&document);
        let expected: Vec<(u8, String)> = document
            .headings()
            .map(|(level, text)| (level, text.to_string()))
            .collect();
        assert_eq!(parse_headings(&rendered), expected);
    }
}
