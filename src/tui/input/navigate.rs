use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if !app.tasks.is_empty() {
                app.cursor = (app.cursor + 1).min(app.tasks.len() - 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.cursor = app.tasks.len().saturating_sub(1);
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.input_buffer.clear();
            app.input_cursor = 0;
            app.mode = Mode::Insert;
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_at_cursor();
        }
        KeyCode::Char('d') | KeyCode::Char('x') => {
            app.delete_at_cursor();
        }
        KeyCode::Char('t') => {
            app.request_tip(Instant::now());
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::tui::render::test_helpers::app_with_tasks;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_app() -> App {
        app_with_tasks(vec![
            Task::new("First"),
            Task::new("Second"),
            Task::new("Third"),
        ])
    }

    #[test]
    fn j_and_k_move_the_cursor_within_bounds() {
        let mut app = sample_app();

        handle_navigate(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 1);

        // Clamp at the bottom
        for _ in 0..10 {
            handle_navigate(&mut app, key(KeyCode::Char('j')));
        }
        assert_eq!(app.cursor, 2);

        handle_navigate(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 1);

        // Clamp at the top
        for _ in 0..10 {
            handle_navigate(&mut app, key(KeyCode::Char('k')));
        }
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn g_and_shift_g_jump_to_ends() {
        let mut app = sample_app();
        handle_navigate(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.cursor, 2);
        handle_navigate(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn a_enters_insert_mode_with_a_fresh_buffer() {
        let mut app = sample_app();
        app.input_buffer = "stale".into();
        app.input_cursor = 5;

        handle_navigate(&mut app, key(KeyCode::Char('a')));

        assert_eq!(app.mode, Mode::Insert);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn space_toggles_under_cursor() {
        let mut app = sample_app();
        app.cursor = 1;
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert!(app.tasks[1].completed);
        assert!(!app.tasks[0].completed);
    }

    #[test]
    fn d_deletes_under_cursor() {
        let mut app = sample_app();
        app.cursor = 0;
        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.tasks[0].text, "Second");
    }

    #[test]
    fn toggle_and_delete_on_empty_list_are_noops() {
        let mut app = app_with_tasks(Vec::new());
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert!(app.tasks.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn t_respects_the_cooldown() {
        let mut app = sample_app();
        handle_navigate(&mut app, key(KeyCode::Char('t')));
        assert!(app.tip_on_cooldown());
        let shown = app.tip_line;

        handle_navigate(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.tip_line, shown);
    }

    #[test]
    fn question_mark_toggles_help() {
        let mut app = sample_app();
        handle_navigate(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);

        // While help is open, other keys are swallowed
        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.tasks.len(), 3);

        handle_navigate(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn q_quits() {
        let mut app = sample_app();
        handle_navigate(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
