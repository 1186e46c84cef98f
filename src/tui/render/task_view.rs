use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode};

/// Render the task list: one row per task with a checkbox, the text, and
/// the state-dependent action hint. In insert mode an input line follows
/// the list.
pub fn render_task_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg_default = app.theme.background;
    let width = area.width as usize;
    let visible_height = area.height as usize;

    let mut lines: Vec<Line> = Vec::new();

    if app.tasks.is_empty() && app.mode != Mode::Insert {
        let empty = Paragraph::new(" No tasks yet - press a to add one")
            .style(Style::default().fg(app.theme.dim).bg(bg_default));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor on screen; the input line costs one row
    let reserved = if app.mode == Mode::Insert { 1 } else { 0 };
    let list_height = visible_height.saturating_sub(reserved).max(1);
    let scroll = app
        .cursor
        .saturating_sub(list_height.saturating_sub(1));

    for (i, task) in app
        .tasks
        .iter()
        .enumerate()
        .skip(scroll)
        .take(list_height)
    {
        let is_cursor = i == app.cursor && app.mode == Mode::Navigate;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            bg_default
        };

        let mark_style = if task.completed {
            Style::default().fg(app.theme.green).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        let text_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };

        let mut spans = vec![
            Span::styled(format!(" [{}] ", task.checkbox_char()), mark_style),
            Span::styled(task.text.clone(), text_style),
        ];

        // Right-aligned action hint for the row under the cursor
        if is_cursor {
            let hint = format!("space {}  d delete", task.toggle_label());
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
            }
        } else {
            let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    if app.mode == Mode::Insert {
        let prompt_style = Style::default().fg(app.theme.highlight).bg(bg_default);
        let spans = vec![
            Span::styled(" > ", prompt_style),
            Span::styled(
                app.input_buffer.clone(),
                Style::default().fg(app.theme.text_bright).bg(bg_default),
            ),
            // ▌ cursor
            Span::styled("\u{258C}", prompt_style),
        ];
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg_default));
    frame.render_widget(paragraph, area);
}
