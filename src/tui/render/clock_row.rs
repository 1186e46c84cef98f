use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

/// Format a timestamp for the clock row: local hour:minute:second.
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Render the clock row (top of screen): planner name on the left, the
/// current time on the right, a separator rule underneath.
pub fn render_clock_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let title = " dayplan";
    let clock = format_clock(Local::now());

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = title.width() + clock.width() + 1;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    spans.push(Span::styled(
        clock,
        Style::default().fg(app.theme.yellow).bg(bg),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let rule = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), rule]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
