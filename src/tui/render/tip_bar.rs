use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

/// Render the tip bar: a separator rule, then the current tip line with
/// the tip-action hint on the right. While the cooldown runs the action
/// is inert and the hint says so.
pub fn render_tip_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let rule = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let tip = format!(" {}", app.tip_line);
    let hint = if app.tip_on_cooldown() {
        "here comes another idea"
    } else {
        "t show me an idea"
    };

    let mut spans = vec![Span::styled(
        tip.clone(),
        Style::default().fg(app.theme.yellow).bg(bg),
    )];
    let used = tip.width() + hint.width() + 1;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
    spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let paragraph = Paragraph::new(vec![rule, Line::from(spans)]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
