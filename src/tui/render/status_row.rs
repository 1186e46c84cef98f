use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(err) = &app.save_error {
                // A failed save outranks the key hints
                let mut spans = vec![Span::styled(
                    format!(" save failed: {}", err),
                    Style::default().fg(app.theme.red).bg(bg),
                )];
                pad_with_hint(&mut spans, "q quit", width, app);
                Line::from(spans)
            } else {
                let done = app.tasks.iter().filter(|t| t.completed).count();
                let summary = format!(" {} tasks - {} done", app.tasks.len(), done);
                let mut spans = vec![Span::styled(
                    summary,
                    Style::default().fg(app.theme.dim).bg(bg),
                )];
                pad_with_hint(&mut spans, "a add  space toggle  d delete  t tip  ? help", width, app);
                Line::from(spans)
            }
        }
        Mode::Insert => {
            let mut spans = vec![Span::styled(
                " adding a task",
                Style::default().fg(app.theme.highlight).bg(bg),
            )];
            pad_with_hint(&mut spans, "Enter add  Esc cancel", width, app);
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Right-align `hint` after the spans already present.
fn pad_with_hint(spans: &mut Vec<Span<'_>>, hint: &'static str, width: usize, app: &App) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let hint_width = hint.width();
    if content_width + hint_width + 1 < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - hint_width - 1),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
}
