//! Template catalog grid view

use crate::app::App;
use crate::templates::{self, DocumentTemplate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Grid layout configuration
const MIN_CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5; // 1 (top border) + 3 (content) + 1 (bottom border)
const CARD_SPACING_H: u16 = 2;
const HEADER_HEIGHT: u16 = 4;

/// Number of catalog columns that fit into the given width
pub fn grid_columns(area_width: u16) -> usize {
    GridLayout::new(area_width).columns
}

/// Helper for grid layout calculations
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    /// Create a new grid layout based on available width
    fn new(area_width: u16) -> Self {
        // Account for outer block borders (2 chars total)
        let usable_width = area_width.saturating_sub(2);

        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        let columns = columns.max(1);

        // Distribute remaining space evenly across cards
        let total_spacing = (columns.saturating_sub(1) as u16) * CARD_SPACING_H;
        let card_width = (usable_width.saturating_sub(total_spacing)) / columns as u16;

        Self {
            columns,
            card_width: card_width.max(MIN_CARD_WIDTH),
        }
    }

    /// Convert linear index to (row, col)
    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Get card area for a given position within the inner area
    fn card_area(&self, inner: Rect, row: usize, col: usize) -> Rect {
        Rect {
            x: inner.x + (col as u16) * (self.card_width + CARD_SPACING_H),
            y: inner.y + (row as u16) * CARD_HEIGHT,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }
}

/// Draw the template catalog with its header
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    draw_header(frame, chunks[0]);
    draw_grid(frame, chunks[1], app);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "LegalForms Generator",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Create professional legal documents in minutes. No legal knowledge required.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Templates ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    let grid = GridLayout::new(area.width);
    for (idx, template) in templates::templates().iter().enumerate() {
        let (row, col) = grid.index_to_pos(idx);
        let card_area = grid.card_area(inner, row, col);

        // Skip if card is outside visible area
        if card_area.y + card_area.height > area.y + area.height {
            continue;
        }

        let is_selected = idx == app.state.selected_index;
        draw_template_card(frame, card_area, template, is_selected);
    }
}

/// Draw a single template card
fn draw_template_card(
    frame: &mut Frame,
    area: Rect,
    template: &DocumentTemplate,
    is_selected: bool,
) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let title_style = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let content = vec![
        Line::from(vec![
            Span::raw(format!("{} ", template.icon)),
            Span::styled(truncate(template.title, width.saturating_sub(3)), title_style),
        ]),
        Line::from(Span::styled(
            truncate(template.category, width),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            truncate(template.description, width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(content), inner);
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}
