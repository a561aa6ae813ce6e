//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::{NotificationKind, SessionPhase, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Shortcut shown in the editor help text
const GENERATE_SHORTCUT: &str = "Ctrl+G";

/// Content area with the bottom line reserved for the status bar
pub fn content_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    if let Some(note) = &app.state.notification {
        let color = match note.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
            NotificationKind::Info => Color::Blue,
        };
        spans.push(Span::styled(" ● ", Style::default().fg(color)));
        spans.push(Span::styled(
            note.message.clone(),
            Style::default().fg(color),
        ));
    } else {
        spans.push(Span::styled(
            format!(" {}", view_hints(app)),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view and phase
fn view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Catalog => "h/j/k/l:nav  Enter:select  q:quit".to_string(),
        View::Editor => match app.state.phase {
            SessionPhase::Editing => {
                format!("Tab:next field  {GENERATE_SHORTCUT}:generate  Esc:start over")
            }
            SessionPhase::Generating { .. } => "Generating document...".to_string(),
            SessionPhase::Generated => {
                "Tab:edit fields  ←/→:actions  Enter:run action  Esc:start over".to_string()
            }
        },
    }
}
