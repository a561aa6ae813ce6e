//! Live preview pane
//!
//! The layout is derived from the template's field list and its display
//! hints; no other field mapping exists.

use crate::app::App;
use crate::state::{DocumentForm, SessionPhase};
use crate::templates::{DocumentField, DocumentTemplate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Draw the preview panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Live Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let SessionPhase::Generating { started } = app.state.phase {
        draw_generating(frame, inner, started);
        return;
    }

    match (app.state.active_template(), app.state.form.as_ref()) {
        (Some(template), Some(form)) => draw_document(frame, inner, template, form),
        _ => draw_empty(frame, inner),
    }
}

fn draw_generating(frame: &mut Frame, area: Rect, started: Instant) {
    let dots = ".".repeat(((started.elapsed().as_millis() / 300) % 4) as usize);
    let message = Paragraph::new(format!("Generating document{dots}"))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let middle = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    };
    frame.render_widget(message, middle);
}

fn draw_empty(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new("Select a document type to see live preview")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    let middle = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    };
    frame.render_widget(message, middle);
}

fn draw_document(frame: &mut Frame, area: Rect, template: &DocumentTemplate, form: &DocumentForm) {
    // Optional fields stay hidden until they hold a value
    let rows: Vec<Vec<&DocumentField>> = template
        .preview_rows()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .filter(|f| is_visible(f, form))
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    let mut constraints = vec![Constraint::Length(2)]; // heading
    constraints.extend(rows.iter().map(|row| Constraint::Length(row_height(row, form))));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints(constraints)
        .split(area);

    let heading = template.id.replace('-', " ").to_uppercase();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[0],
    );

    for (idx, row) in rows.iter().enumerate() {
        draw_row(frame, chunks[idx + 1], row, form);
    }
}

fn is_visible(field: &DocumentField, form: &DocumentForm) -> bool {
    field.required || form.value_of(field.id).is_some_and(|v| !v.is_empty())
}

fn row_height(row: &[&DocumentField], form: &DocumentForm) -> u16 {
    if let [field] = row {
        if field.kind.is_multiline() {
            let lines = form
                .value_of(field.id)
                .map(|v| v.lines().count().max(1))
                .unwrap_or(1) as u16;
            return lines + 2; // label + value + trailing blank
        }
    }
    3 // label, value, trailing blank
}

fn draw_row(frame: &mut Frame, area: Rect, row: &[&DocumentField], form: &DocumentForm) {
    if let [field] = row {
        draw_cell(frame, area, field, form);
        return;
    }

    let constraints: Vec<Constraint> = row
        .iter()
        .map(|_| Constraint::Ratio(1, row.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, field) in row.iter().enumerate() {
        draw_cell(frame, chunks[idx], field, form);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, field: &DocumentField, form: &DocumentForm) {
    let mut lines = vec![Line::from(Span::styled(
        format!("{}:", field.display_label()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for value_line in cell_value(field, form).lines() {
        lines.push(Line::from(value_line.to_string()));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Value text for a preview cell: blank slot for untouched required
/// fields, otherwise the value wrapped in its display prefix/suffix
fn cell_value(field: &DocumentField, form: &DocumentForm) -> String {
    let value = form.value_of(field.id).unwrap_or("");
    if value.is_empty() {
        return "________".to_string();
    }
    format!(
        "{}{}{}",
        field.preview.prefix.unwrap_or(""),
        value,
        field.preview.suffix.unwrap_or("")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::find_template;
    use pretty_assertions::assert_eq;

    fn poa_form() -> DocumentForm {
        DocumentForm::for_template(find_template("power-of-attorney").unwrap())
    }

    #[test]
    fn test_optional_empty_field_is_hidden() {
        let form = poa_form();
        let template = find_template("power-of-attorney").unwrap();
        let expiration = template
            .fields
            .iter()
            .find(|f| f.id == "expirationDate")
            .unwrap();
        assert!(!is_visible(expiration, &form));
    }

    #[test]
    fn test_optional_field_appears_once_filled() {
        let mut form = poa_form();
        let index = form
            .fields()
            .iter()
            .position(|f| f.id == "expirationDate")
            .unwrap();
        form.field_mut(index).unwrap().set_value("2025-01-01");

        let template = find_template("power-of-attorney").unwrap();
        let expiration = template
            .fields
            .iter()
            .find(|f| f.id == "expirationDate")
            .unwrap();
        assert!(is_visible(expiration, &form));
    }

    #[test]
    fn test_cell_value_shows_blank_slot_when_empty() {
        let form = poa_form();
        let template = find_template("power-of-attorney").unwrap();
        assert_eq!(cell_value(&template.fields[0], &form), "________");
    }

    #[test]
    fn test_cell_value_applies_prefix_and_suffix() {
        let template = find_template("rental-agreement").unwrap();
        let mut form = DocumentForm::for_template(template);
        let rent = form
            .fields()
            .iter()
            .position(|f| f.id == "monthlyRent")
            .unwrap();
        form.field_mut(rent).unwrap().set_value("1500");
        let term = form
            .fields()
            .iter()
            .position(|f| f.id == "leaseTerm")
            .unwrap();
        form.field_mut(term).unwrap().set_value("12");

        let rent_def = template.fields.iter().find(|f| f.id == "monthlyRent").unwrap();
        let term_def = template.fields.iter().find(|f| f.id == "leaseTerm").unwrap();
        assert_eq!(cell_value(rent_def, &form), "$1500");
        assert_eq!(cell_value(term_def, &form), "12 months");
    }

    #[test]
    fn test_multiline_row_height_tracks_value() {
        let template = find_template("complaint-letter").unwrap();
        let mut form = DocumentForm::for_template(template);
        let details = template
            .fields
            .iter()
            .find(|f| f.id == "complaintDetails")
            .unwrap();

        assert_eq!(row_height(&[details], &form), 3);

        let index = form
            .fields()
            .iter()
            .position(|f| f.id == "complaintDetails")
            .unwrap();
        form.field_mut(index).unwrap().set_value("one\ntwo\nthree");
        assert_eq!(row_height(&[details], &form), 5);
    }
}
