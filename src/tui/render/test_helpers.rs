use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store::Store;
use crate::model::Task;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over a throwaway store with the given tasks already in
/// memory. The backing TempDir is leaked so that saves triggered during a
/// test keep working for the process lifetime.
pub fn app_with_tasks(tasks: Vec<Task>) -> App {
    let dir = Box::leak(Box::new(TempDir::new().unwrap()));
    let mut app = App::new(Store::new(dir.path()), Theme::default());
    app.tasks = tasks;
    app
}

/// A short mixed list: two open tasks around a completed one.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("Write the report"),
        Task {
            text: "Send invoices".into(),
            completed: true,
        },
        Task::new("Plan tomorrow"),
    ]
}
