pub mod clock_row;
pub mod help_overlay;
pub mod status_row;
pub mod task_view;
pub mod tip_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: clock row (2) | task list | tip bar (2) | status row (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // clock + separator
            Constraint::Min(1),    // task list
            Constraint::Length(2), // separator + tip line
            Constraint::Length(1), // status row
        ])
        .split(area);

    clock_row::render_clock_row(frame, app, chunks[0]);
    task_view::render_task_view(frame, app, chunks[1]);
    tip_bar::render_tip_bar(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}
