//! Header bar: site title on the left, theme toggle on the right.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{Palette, ThemeMode};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

/// Label shown on the theme toggle for the current mode.
fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "[ \u{263d} dark ]",
        ThemeMode::Dark => "[ \u{2600} light ]",
    }
}

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    mode: ThemeMode,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    let title_style = Style::default()
        .fg(palette.header)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title.to_string(), title_style))),
        area,
    );

    let label = toggle_label(mode);
    let label_width = label.width() as u16;
    if area.width <= label_width {
        return;
    }
    let toggle_area = Rect {
        x: area.x + area.width - label_width,
        y: area.y,
        width: label_width,
        height: 1,
    };

    let hover = hits
        .get_hover_style(toggle_area)
        .unwrap_or_else(|| Style::default().fg(palette.dim));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label.to_string(), hover))),
        toggle_area,
    );
    hits.register(
        toggle_area,
        ClickAction::ToggleTheme,
        Some(Style::default().fg(palette.accent)),
    );
}
