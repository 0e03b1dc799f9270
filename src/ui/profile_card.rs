//! Profile card: name, role, bio, and the visit counter.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::profile::ProfileInfo;
use crate::theme::Palette;

pub fn render_profile_card(
    frame: &mut Frame,
    area: Rect,
    profile: &ProfileInfo,
    views: &str,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(" profile ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

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
            Style::default().fg(palette.dim),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{views} views"),
        Style::default().fg(palette.dim),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
