//! Input field component.
//!
//! A labelled text input with focus handling, a block cursor, placeholder
//! text, and inline error display. Used by the contact form for all four
//! fields; the message field gets a taller box.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::theme::Palette;
use crate::widgets::TextInput;

/// Configuration for rendering an input field.
#[derive(Debug)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input.
    pub label: &'a str,
    /// The input backing this field.
    pub input: &'a TextInput,
    /// Whether the field is currently focused.
    pub focused: bool,
    /// Optional validation error displayed below the box.
    pub error: Option<&'a str>,
    /// Placeholder shown while the field is empty.
    pub placeholder: &'a str,
    /// Interior height of the box in rows. 1 for single-line fields.
    pub rows: u16,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a single-line field configuration.
    pub fn new(label: &'a str, input: &'a TextInput) -> Self {
        Self {
            label,
            input,
            focused: false,
            error: None,
            placeholder: "",
            rows: 1,
        }
    }

    /// Set whether the field is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set the validation error to display.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the interior height in rows.
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }
}

/// Rows consumed by a field: label, bordered box, optional error line.
pub fn input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 1 + config.rows + 2;
    if config.error.is_some() {
        height += 1;
    }
    height
}

/// Render an input field and return the rect of its bordered box, which
/// the caller registers as a click target.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    palette: &Palette,
) -> Rect {
    let mut y_offset = 0;

    let label_style = if config.focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let label_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label.to_string(), label_style))),
        label_area,
    );
    y_offset += 1;

    let box_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: config.rows + 2,
    };

    let border_color = if config.error.is_some() {
        palette.error
    } else if config.focused {
        palette.accent
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.input_bg));

    let inner_width = box_area.width.saturating_sub(2).max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();

    if config.input.is_empty() && !config.focused {
        lines.push(Line::from(Span::styled(
            config.placeholder.to_string(),
            Style::default().fg(palette.dim),
        )));
    } else {
        let text_style = Style::default().fg(palette.text);
        if config.rows == 1 {
            let (visible, cursor_col) = config.input.visible_window(inner_width.saturating_sub(1));
            if config.focused {
                let before: String = visible.chars().take(cursor_col).collect();
                let after: String = visible.chars().skip(cursor_col).collect();
                lines.push(Line::from(vec![
                    Span::styled(before, text_style),
                    Span::styled(
                        "\u{2588}".to_string(),
                        Style::default().fg(palette.accent),
                    ),
                    Span::styled(after, text_style),
                ]));
            } else {
                lines.push(Line::from(Span::styled(visible, text_style)));
            }
        } else {
            let content = config.input.content();
            let upto: String = content.chars().take(config.input.cursor()).collect();
            let cursor_row = upto.matches('\n').count();
            let cursor_col = upto.chars().rev().take_while(|c| *c != '\n').count();

            for (i, row) in content.split('\n').enumerate() {
                if config.focused && i == cursor_row {
                    let before: String = row.chars().take(cursor_col).collect();
                    let after: String = row.chars().skip(cursor_col).collect();
                    lines.push(Line::from(vec![
                        Span::styled(before, text_style),
                        Span::styled(
                            "\u{2588}".to_string(),
                            Style::default().fg(palette.accent),
                        ),
                        Span::styled(after, text_style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(row.to_string(), text_style)));
                }
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), box_area);
    y_offset += config.rows + 2;

    if let Some(error) = config.error {
        let error_area = Rect {
            x: area.x,
            y: area.y + y_offset,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("\u{2717} ".to_string(), Style::default().fg(palette.error)),
                Span::styled(error.to_string(), Style::default().fg(palette.error)),
            ])),
            error_area,
        );
    }

    box_area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_height() {
        let input = TextInput::new();
        let config = InputFieldConfig::new("Name", &input);
        assert_eq!(input_field_height(&config), 4);
    }

    #[test]
    fn test_error_adds_a_row() {
        let input = TextInput::new();
        let config = InputFieldConfig::new("Email", &input).error(Some("Email is required"));
        assert_eq!(input_field_height(&config), 5);
    }

    #[test]
    fn test_multiline_rows_expand_height() {
        let input = TextInput::multiline();
        let config = InputFieldConfig::new("Message", &input).rows(4);
        assert_eq!(input_field_height(&config), 7);
    }
}
