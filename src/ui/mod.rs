//! UI module for rendering the TUI

mod catalog;
mod components;
mod editor;
mod field_renderer;
mod layout;
mod preview;

pub use catalog::grid_columns;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let content = layout::content_area(area);

    match app.state.current_view {
        View::Catalog => catalog::draw(frame, content, app),
        View::Editor => editor::draw(frame, content, app),
    }

    layout::draw_status_bar(frame, app);
}
