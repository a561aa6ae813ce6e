//! Editor view: form on the left, live preview on the right

use super::components::{render_button, BUTTON_HEIGHT};
use super::{field_renderer, preview};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the editor split
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_form(frame, chunks[0], app);
    preview::draw(frame, chunks[1], app);
}

/// Draw the form panel with its action row
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(template) = app.state.active_template() else {
        return;
    };
    let Some(form) = app.state.form.as_ref() else {
        return;
    };

    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} ", template.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(inner);

    draw_fields(frame, chunks[0], app);
    draw_action_row(frame, chunks[1], app);
}

/// Stack the fields, windowed so the focused field stays visible
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.form.as_ref() else {
        return;
    };

    let heights: Vec<u16> = form
        .fields()
        .iter()
        .map(|f| if f.is_multiline() { 4 } else { 3 })
        .collect();
    let focus = form
        .active_index()
        .min(form.field_count().saturating_sub(1));
    let first = first_visible(&heights, focus, area.height);

    let mut y = area.y;
    for (idx, field) in form.fields().iter().enumerate().skip(first) {
        let height = heights[idx];
        if y + height > area.y + area.height {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        field_renderer::draw_field(frame, field_area, field, idx == form.active_index());
        y += height;
    }
}

/// First field index to render so the focused field fits into `avail` rows
fn first_visible(heights: &[u16], focus: usize, avail: u16) -> usize {
    let mut first = 0;
    while first < focus {
        let used: u16 = heights[first..=focus].iter().sum();
        if used <= avail {
            break;
        }
        first += 1;
    }
    first
}

/// Draw the phase-dependent action buttons
fn draw_action_row(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.form.as_ref() else {
        return;
    };

    let labels = app.button_labels();
    let is_focused = form.is_buttons_row_active();
    let enabled = !app.is_generating();

    let constraints: Vec<Constraint> = labels
        .iter()
        .map(|label| Constraint::Length(label.len() as u16 + 4))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, label) in labels.iter().enumerate() {
        render_button(
            frame,
            chunks[idx],
            label,
            is_focused && idx == form.selected_button,
            enabled,
            Some(button_accent(label)),
        );
    }
}

fn button_accent(label: &str) -> Color {
    match label {
        "Generate Document" | "Download DOCX" => Color::Green,
        "Download PDF" => Color::Red,
        "Copy Text" => Color::Blue,
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_visible_when_everything_fits() {
        let heights = vec![3, 3, 3];
        assert_eq!(first_visible(&heights, 2, 20), 0);
    }

    #[test]
    fn test_first_visible_scrolls_to_focused_field() {
        // Seven single-line fields, room for three
        let heights = vec![3; 7];
        assert_eq!(first_visible(&heights, 0, 9), 0);
        assert_eq!(first_visible(&heights, 4, 9), 2);
        assert_eq!(first_visible(&heights, 6, 9), 4);
    }

    #[test]
    fn test_first_visible_with_mixed_heights() {
        let heights = vec![3, 4, 3, 4];
        assert_eq!(first_visible(&heights, 3, 7), 2);
    }
}
