//! Content panel: renders the body for the active category.
//!
//! The `ai-ml` category gets the post list with sort controls and
//! expand/collapse; `contact` gets the mail form; the remaining
//! categories render static text.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::Focus;
use crate::contact::ContactForm;
use crate::content::{Category, PostListState, SortOrder};
use crate::markdown::render_markdown;
use crate::profile::ProfileInfo;
use crate::theme::Palette;
use crate::ui::contact_panel::render_contact_panel;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

#[allow(clippy::too_many_arguments)]
pub fn render_content(
    frame: &mut Frame,
    area: Rect,
    active: Category,
    focus: Focus,
    post_list: &PostListState,
    contact: &ContactForm,
    profile: &ProfileInfo,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    let border_style = if focus == Focus::Posts || (focus == Focus::Form && active == Category::Contact)
    {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", active.label()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match active {
        Category::Me => render_about(frame, inner, profile, palette),
        Category::AiMl => render_posts(frame, inner, focus, post_list, palette, hits),
        Category::Ideas => render_ideas(frame, inner, palette),
        Category::Contact => render_contact_panel(frame, inner, contact, palette, hits),
    }
}

fn render_about(frame: &mut Frame, area: Rect, profile: &ProfileInfo, palette: &Palette) {
    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(palette.header)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.role.clone(),
            Style::default().fg(palette.accent),
        )),
        Line::default(),
    ];
    for paragraph in &profile.bio {
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            Style::default().fg(palette.text),
        )));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_ideas(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "A scratchpad of half-formed thoughts.".to_string(),
            Style::default().fg(palette.text),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Longer write-ups graduate to the ai/ml section once they hold together."
                .to_string(),
            Style::default().fg(palette.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_posts(
    frame: &mut Frame,
    area: Rect,
    focus: Focus,
    post_list: &PostListState,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    // Sort controls on the first row, right-aligned.
    let controls_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    render_sort_controls(frame, controls_area, post_list.order(), palette, hits);

    let body = Rect {
        x: area.x,
        y: area.y + 2,
        width: area.width,
        height: area.height.saturating_sub(2),
    };
    if body.height == 0 {
        return;
    }

    if let Some(post) = post_list.expanded_post() {
        render_expanded_post(frame, body, post_list, post, palette, hits);
    } else {
        render_post_rows(frame, body, focus, post_list, palette, hits);
    }
}

fn render_sort_controls(
    frame: &mut Frame,
    area: Rect,
    order: SortOrder,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    let entries = [
        ("newest \u{2193}", SortOrder::Descending),
        ("oldest \u{2191}", SortOrder::Ascending),
    ];

    let mut x = area.x;
    for (label, target) in entries {
        let width = label.width() as u16 + 2;
        if x + width > area.x + area.width {
            break;
        }
        let rect = Rect {
            x,
            y: area.y,
            width,
            height: 1,
        };

        let mut style = if order == target {
            Style::default()
                .fg(palette.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        if let Some(hover) = hits.get_hover_style(rect) {
            style = style.patch(hover);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {label} "), style))),
            rect,
        );
        hits.register(
            rect,
            ClickAction::SetSortOrder(target),
            Some(Style::default().bg(palette.hover_bg)),
        );
        x += width + 1;
    }
}

fn render_post_rows(
    frame: &mut Frame,
    area: Rect,
    focus: Focus,
    post_list: &PostListState,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    let mut y = area.y;
    for (i, post) in post_list.sequence().enumerate() {
        // Each post takes a title row, a description row, and a spacer.
        if y + 1 >= area.y + area.height {
            break;
        }
        let row = Rect {
            x: area.x,
            y,
            width: area.width,
            height: 2,
        };

        let under_cursor = focus == Focus::Posts && post_list.cursor() == i;
        let mut title_style = Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD);
        let mut meta_style = Style::default().fg(palette.dim);
        if under_cursor {
            title_style = title_style.bg(palette.hover_bg);
            meta_style = meta_style.bg(palette.hover_bg);
        }
        if let Some(hover) = hits.get_hover_style(row) {
            title_style = title_style.patch(hover);
            meta_style = meta_style.patch(hover);
        }

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(post.title.clone(), title_style),
                    Span::styled(
                        format!("  {} \u{00b7} {}", post.published_label(), post.read_time),
                        meta_style,
                    ),
                ]),
                Line::from(Span::styled(post.description.clone(), meta_style)),
            ]),
            row,
        );
        hits.register(
            row,
            ClickAction::SelectPost(post.id),
            Some(Style::default().bg(palette.hover_bg)),
        );
        y += 3;
    }
}

fn render_expanded_post(
    frame: &mut Frame,
    area: Rect,
    post_list: &PostListState,
    post: &crate::content::Post,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(palette.header)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} \u{00b7} {}", post.published_label(), post.read_time),
            Style::default().fg(palette.dim),
        )),
        Line::default(),
    ];
    lines.extend(render_markdown(&post.content, palette));

    let body_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(2),
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body_area);

    // Navigation controls pinned to the bottom row.
    let controls_y = area.y + area.height.saturating_sub(1);
    let at_first = post_list
        .sequence()
        .next()
        .is_some_and(|first| first.id == post.id);
    let at_last = post_list
        .sequence()
        .last()
        .is_some_and(|last| last.id == post.id);

    let entries: [(&str, ClickAction, bool); 3] = [
        ("\u{2190} prev", ClickAction::PreviousPost, at_first),
        ("\u{2715} close", ClickAction::CloseExpanded, false),
        ("next \u{2192}", ClickAction::NextPost, at_last),
    ];

    let mut x = area.x;
    for (label, action, disabled) in entries {
        let width = label.width() as u16 + 2;
        if x + width > area.x + area.width {
            break;
        }
        let rect = Rect {
            x,
            y: controls_y,
            width,
            height: 1,
        };

        let mut style = if disabled {
            Style::default().fg(palette.dim)
        } else {
            Style::default().fg(palette.accent)
        };
        if let Some(hover) = hits.get_hover_style(rect) {
            style = style.patch(hover);
        }
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {label} "), style))),
            rect,
        );
        if !disabled {
            hits.register(rect, action, Some(Style::default().bg(palette.hover_bg)));
        }
        x += width + 2;
    }
}
