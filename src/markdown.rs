//! Markdown rendering for post bodies.
//!
//! Converts a post's markdown content to styled ratatui lines: headings,
//! bold, italic, inline code, fenced code blocks, and list items.
//! Anything else degrades to plain text. Styles come from the active
//! palette so post bodies follow the theme.

use crate::theme::Palette;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Render markdown text to a vector of styled lines.
pub fn render_markdown(text: &str, palette: &Palette) -> Vec<Line<'static>> {
    let heading_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let inline_code_style = Style::default().fg(palette.accent);
    let code_block_style = Style::default().fg(palette.dim);
    let base_style = Style::default().fg(palette.text);

    let parser = Parser::new_ext(text, Options::empty());

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut style_stack: Vec<Style> = vec![base_style];
    let mut in_code_block = false;
    let mut list_depth: usize = 0;

    let flush = |current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>| {
        if !current.is_empty() {
            lines.push(Line::from(std::mem::take(current)));
        }
    };

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { .. } => {
                    flush(&mut current, &mut lines);
                    style_stack.push(heading_style);
                }
                Tag::Strong => {
                    let top = *style_stack.last().unwrap_or(&base_style);
                    style_stack.push(top.add_modifier(Modifier::BOLD));
                }
                Tag::Emphasis => {
                    let top = *style_stack.last().unwrap_or(&base_style);
                    style_stack.push(top.add_modifier(Modifier::ITALIC));
                }
                Tag::CodeBlock(_) => {
                    flush(&mut current, &mut lines);
                    in_code_block = true;
                    style_stack.push(code_block_style);
                }
                Tag::List(_) => {
                    flush(&mut current, &mut lines);
                    list_depth += 1;
                }
                Tag::Item => {
                    flush(&mut current, &mut lines);
                    let indent = "  ".repeat(list_depth.saturating_sub(1));
                    current.push(Span::styled(
                        format!("{indent}• "),
                        Style::default().fg(palette.dim),
                    ));
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Heading(_) => {
                    style_stack.pop();
                    flush(&mut current, &mut lines);
                    lines.push(Line::default());
                }
                TagEnd::Strong | TagEnd::Emphasis => {
                    style_stack.pop();
                }
                TagEnd::CodeBlock => {
                    style_stack.pop();
                    in_code_block = false;
                    flush(&mut current, &mut lines);
                    lines.push(Line::default());
                }
                TagEnd::Paragraph => {
                    flush(&mut current, &mut lines);
                    lines.push(Line::default());
                }
                TagEnd::Item => {
                    flush(&mut current, &mut lines);
                }
                TagEnd::List(_) => {
                    list_depth = list_depth.saturating_sub(1);
                    if list_depth == 0 {
                        lines.push(Line::default());
                    }
                }
                _ => {}
            },
            Event::Text(t) => {
                let style = *style_stack.last().unwrap_or(&base_style);
                if in_code_block {
                    // Preserve the block's own line structure.
                    for (i, part) in t.split('\n').enumerate() {
                        if i > 0 {
                            flush(&mut current, &mut lines);
                        }
                        if !part.is_empty() {
                            current.push(Span::styled(part.to_string(), style));
                        }
                    }
                } else {
                    current.push(Span::styled(t.to_string(), style));
                }
            }
            Event::Code(code) => {
                current.push(Span::styled(code.to_string(), inline_code_style));
            }
            Event::SoftBreak => {
                current.push(Span::styled(" ".to_string(), *style_stack.last().unwrap_or(&base_style)));
            }
            Event::HardBreak => {
                flush(&mut current, &mut lines);
            }
            Event::Rule => {
                flush(&mut current, &mut lines);
                lines.push(Line::from(Span::styled(
                    "───".to_string(),
                    Style::default().fg(palette.dim),
                )));
            }
            _ => {}
        }
    }

    flush(&mut current, &mut lines);

    // Trim trailing blank lines left by block endings.
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DARK;

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_plain_paragraph() {
        let lines = render_markdown("hello world", &DARK);
        assert_eq!(text_of(&lines), "hello world");
    }

    #[test]
    fn test_heading_is_bold_accent() {
        let lines = render_markdown("# Title\n\nbody", &DARK);
        let heading = &lines[0];
        assert_eq!(heading.spans[0].content.as_ref(), "Title");
        assert!(heading.spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn test_bold_and_italic_modifiers() {
        let lines = render_markdown("**strong** and *slanted*", &DARK);
        let spans = &lines[0].spans;
        let strong = spans.iter().find(|s| s.content.as_ref() == "strong").unwrap();
        assert!(strong.style.add_modifier.contains(Modifier::BOLD));
        let slanted = spans.iter().find(|s| s.content.as_ref() == "slanted").unwrap();
        assert!(slanted.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_code_block_keeps_line_structure() {
        let lines = render_markdown("```\nline one\nline two\n```", &DARK);
        let rendered = text_of(&lines);
        assert!(rendered.contains("line one"));
        assert!(rendered.contains("line two"));
        // Separate lines, not joined.
        assert!(!rendered.contains("line oneline two"));
    }

    #[test]
    fn test_list_items_get_bullets() {
        let lines = render_markdown("- first\n- second", &DARK);
        let rendered = text_of(&lines);
        assert!(rendered.contains("• first"));
        assert!(rendered.contains("• second"));
    }

    #[test]
    fn test_catalog_posts_render_without_panicking() {
        for post in crate::content::CATALOG.iter() {
            let lines = render_markdown(&post.content, &DARK);
            assert!(!lines.is_empty(), "post {} rendered empty", post.id);
        }
    }
}
