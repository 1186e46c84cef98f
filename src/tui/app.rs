use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::store::{Store, resolve_data_dir};
use crate::model::Task;
use crate::ops::task_ops;
use crate::tips;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Insert,
}

/// Main application state. The task list here is authoritative; the
/// renderer is a pure projection of it, and every mutation is written
/// through to the store before the next draw.
pub struct App {
    pub store: Store,
    pub tasks: Vec<Task>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into `tasks`
    pub cursor: usize,
    /// Insert mode: text being typed
    pub input_buffer: String,
    /// Insert mode: byte offset of the cursor in `input_buffer`
    pub input_cursor: usize,
    /// Current tip bar line
    pub tip_line: &'static str,
    /// Deadline after which the tip action becomes available again
    pub tip_cooldown_until: Option<Instant>,
    /// Help overlay visible
    pub show_help: bool,
    /// Last save failure, shown in the status row until a save succeeds
    pub save_error: Option<String>,
}

impl App {
    /// Load the saved list and set up the initial state. When saved tasks
    /// exist the tip bar greets instead of showing a tip.
    pub fn new(store: Store, theme: Theme) -> Self {
        let tasks = store.load();
        let tip_line = if tasks.is_empty() {
            tips::random_tip()
        } else {
            tips::GREETING
        };

        App {
            store,
            tasks,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            input_buffer: String::new(),
            input_cursor: 0,
            tip_line,
            tip_cooldown_until: None,
            show_help: false,
            save_error: None,
        }
    }

    /// Advance time-driven state: clear an expired tip cooldown.
    pub fn tick(&mut self, now: Instant) {
        if self.tip_cooldown_until.is_some_and(|until| now >= until) {
            self.tip_cooldown_until = None;
        }
    }

    pub fn tip_on_cooldown(&self) -> bool {
        self.tip_cooldown_until.is_some()
    }

    /// Show a new random tip and arm the cooldown. Inert while the
    /// cooldown from the previous request is still running.
    pub fn request_tip(&mut self, now: Instant) {
        if self.tip_on_cooldown() {
            return;
        }
        self.tip_line = tips::random_tip();
        self.tip_cooldown_until = Some(now + tips::TIP_COOLDOWN);
    }

    /// Submit the insert-mode buffer as a new task. Whitespace-only input
    /// creates nothing. Either way the buffer is cleared and the app
    /// returns to navigate mode.
    pub fn submit_task(&mut self) {
        if task_ops::add_task(&mut self.tasks, &self.input_buffer).is_ok() {
            self.cursor = self.tasks.len() - 1;
            self.persist();
        }
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.mode = Mode::Navigate;
    }

    /// Toggle the task under the cursor. No-op when the cursor is not on a
    /// task.
    pub fn toggle_at_cursor(&mut self) {
        if task_ops::toggle_task(&mut self.tasks, self.cursor).is_ok() {
            self.persist();
        }
    }

    /// Delete the task under the cursor. No-op when the cursor is not on a
    /// task.
    pub fn delete_at_cursor(&mut self) {
        if task_ops::remove_task(&mut self.tasks, self.cursor).is_ok() {
            if self.cursor >= self.tasks.len() && self.cursor > 0 {
                self.cursor -= 1;
            }
            self.persist();
        }
    }

    /// Write the whole list through to the store. A failure is kept for
    /// the status row; the session keeps running on the in-memory state.
    pub fn persist(&mut self) {
        match self.store.save(&self.tasks) {
            Ok(()) => self.save_error = None,
            Err(e) => self.save_error = Some(e.to_string()),
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(data_dir);
    let config = read_config(&data_dir);
    let theme = Theme::from_config(&config.ui);
    let store = Store::new(data_dir);
    let mut app = App::new(store, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        // The poll timeout doubles as the clock tick: redrawing on every
        // pass keeps the displayed time within a quarter second of wall
        // time, and lets an expired tip cooldown re-enable its key hint.
        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
