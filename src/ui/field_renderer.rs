//! Field rendering for the dynamic form

use crate::state::FieldInput;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a single form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldInput, is_active: bool) {
    let border_color = if field.error.is_some() {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_empty() && !is_active {
        // Placeholder text while the field is untouched
        let hint = field.placeholder.as_deref().unwrap_or("");
        Paragraph::new(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = field
            .value()
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value().to_string(), value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(title_line(field))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Block title: label, required marker, and any validation error
fn title_line(field: &FieldInput) -> Line<'_> {
    let mut spans = vec![Span::raw(format!(" {}", field.label))];
    if field.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    spans.push(Span::raw(" "));
    if let Some(error) = &field.error {
        spans.push(Span::styled(
            format!("✗ {error} "),
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}
