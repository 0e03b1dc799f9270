//! Category navigation panel with hover preview text.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::Focus;
use crate::content::{Category, HoverPreview, ALL_CATEGORIES};
use crate::theme::Palette;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

#[allow(clippy::too_many_arguments)]
pub fn render_categories(
    frame: &mut Frame,
    area: Rect,
    active: Category,
    cursor: usize,
    focus: Focus,
    preview: &HoverPreview,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    let border_style = if focus == Focus::Categories {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(" categories ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, category) in ALL_CATEGORIES.into_iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };

        let is_active = category == active;
        let under_cursor = focus == Focus::Categories && cursor == i;
        let marker = if is_active { "\u{25b8} " } else { "  " };
        let label = if inner.width < 20 {
            category.short_label()
        } else {
            category.label()
        };

        let mut style = if is_active {
            Style::default()
                .fg(palette.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        if under_cursor {
            style = style.bg(palette.hover_bg);
        }
        if let Some(hover) = hits.get_hover_style(row) {
            style = style.patch(hover);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{marker}{label}"),
                style,
            ))),
            row,
        );
        hits.register(
            row,
            ClickAction::SelectCategory(category),
            Some(Style::default().bg(palette.hover_bg)),
        );
    }

    // Preview text sits below the list while a hover is active or fading.
    if let Some(category) = preview.category() {
        let preview_y = inner.y + ALL_CATEGORIES.len() as u16 + 1;
        if preview_y < inner.y + inner.height {
            let preview_area = Rect {
                x: inner.x,
                y: preview_y,
                width: inner.width,
                height: (inner.y + inner.height).saturating_sub(preview_y),
            };
            let style = Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    category.preview_text().to_string(),
                    style,
                )))
                .wrap(Wrap { trim: true }),
                preview_area,
            );
        }
    }
}
