//! UI rendering.
//!
//! `render` draws the whole frame: header bar, the three body panels
//! (categories, content, profile card), and a footer hint line. Hit
//! areas are re-registered on every draw so mouse handling always
//! matches the visible layout.

pub mod components;
pub mod interaction;
pub mod layout;

mod categories;
mod contact_panel;
mod content;
mod header;
mod profile_card;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::content::ALL_CATEGORIES;
use crate::input::category_shortcut;
use crate::ui::layout::LayoutContext;

/// Rows used by the stacked categories panel: borders plus one row per
/// category and the preview area.
const STACKED_CATEGORIES_HEIGHT: u16 = ALL_CATEGORIES.len() as u16 + 5;
const STACKED_PROFILE_HEIGHT: u16 = 9;

/// Draw the full frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme_mode.palette();
    let area = frame.area();
    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(palette.surface)),
        area,
    );

    let ctx = LayoutContext::new(area.width, area.height);
    app.hit_areas.clear();

    let App {
        config,
        theme_mode,
        active_category,
        category_cursor,
        focus,
        post_list,
        preview,
        contact,
        profile,
        views,
        hit_areas,
        ..
    } = app;

    if ctx.is_extra_small() {
        // Too small for chrome: content panel only.
        content::render_content(
            frame,
            area,
            *active_category,
            *focus,
            post_list,
            contact,
            profile,
            palette,
            hit_areas,
        );
        return;
    }

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render_header(
        frame,
        header_area,
        &config.title,
        *theme_mode,
        palette,
        hit_areas,
    );

    let (categories_area, content_area, profile_area) = if ctx.should_stack_panels() {
        let [a, b, c] = Layout::vertical([
            Constraint::Length(STACKED_CATEGORIES_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STACKED_PROFILE_HEIGHT),
        ])
        .areas(body_area);
        (a, b, c)
    } else {
        let [a, b, c] = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .areas(body_area);
        (a, b, c)
    };

    categories::render_categories(
        frame,
        categories_area,
        *active_category,
        *category_cursor,
        *focus,
        preview,
        palette,
        hit_areas,
    );
    content::render_content(
        frame,
        content_area,
        *active_category,
        *focus,
        post_list,
        contact,
        profile,
        palette,
        hit_areas,
    );
    profile_card::render_profile_card(frame, profile_area, profile, views, palette);

    render_footer(frame, footer_area, *focus, palette);
}

fn render_footer(frame: &mut Frame, area: Rect, focus: Focus, palette: &crate::theme::Palette) {
    let hints = match focus {
        Focus::Categories => {
            let first = category_shortcut(ALL_CATEGORIES[0]);
            let last = category_shortcut(ALL_CATEGORIES[ALL_CATEGORIES.len() - 1]);
            format!(
                "\u{2191}\u{2193} move \u{00b7} enter open \u{00b7} {first}-{last} jump \u{00b7} t theme \u{00b7} q quit"
            )
        }
        Focus::Posts => {
            "\u{2191}\u{2193} move \u{00b7} enter expand \u{00b7} \u{2190}\u{2192} prev/next \u{00b7} s sort \u{00b7} esc back \u{00b7} q quit".to_string()
        }
        Focus::Form => {
            "tab next field \u{00b7} ctrl+s send \u{00b7} esc back \u{00b7} ctrl+c quit".to_string()
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette.dim),
        ))),
        area,
    );
}
