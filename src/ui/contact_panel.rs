//! Contact form panel: four labelled fields, a send button, and a
//! confirmation notice after a successful submit.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::contact::{ContactForm, FieldId, FIELD_ORDER};
use crate::theme::Palette;
use crate::ui::components::{input_field_height, render_input_field, InputFieldConfig};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

/// Interior rows given to the message box.
const MESSAGE_ROWS: u16 = 4;

pub fn render_contact_panel(
    frame: &mut Frame,
    area: Rect,
    form: &ContactForm,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    let mut y = area.y;

    for field in FIELD_ORDER {
        let input = form.field(field);
        let mut config = InputFieldConfig::new(field.label(), input)
            .focused(form.focused() == field)
            .placeholder(field.placeholder())
            .error(form.errors().for_field(field));
        if field == FieldId::Message {
            config = config.rows(MESSAGE_ROWS);
        }

        let height = input_field_height(&config);
        if y + height > area.y + area.height {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let box_area = render_input_field(frame, field_area, &config, palette);
        hits.register(
            box_area,
            ClickAction::FocusField(field),
            Some(Style::default().bg(palette.hover_bg)),
        );
        y += height;
    }

    // Send button.
    let label = "[ send message ]";
    let button_width = label.width() as u16;
    if y < area.y + area.height && button_width <= area.width {
        let button_area = Rect {
            x: area.x,
            y,
            width: button_width,
            height: 1,
        };
        let mut style = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        if let Some(hover) = hits.get_hover_style(button_area) {
            style = style.patch(hover);
        }
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label.to_string(), style))),
            button_area,
        );
        hits.register(
            button_area,
            ClickAction::SubmitForm,
            Some(Style::default().bg(palette.hover_bg)),
        );
        y += 2;
    }

    if form.submitted() && y < area.y + area.height {
        let notice_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Thanks for reaching out! Your mail client should be open.".to_string(),
                Style::default().fg(palette.success),
            ))),
            notice_area,
        );
    }
}
