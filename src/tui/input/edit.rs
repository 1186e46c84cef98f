use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Mode};

/// Insert mode: a single-line editor for the new task's text.
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_buffer.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.submit_task();
        }
        KeyCode::Backspace => {
            if let Some(start) = prev_grapheme_start(&app.input_buffer, app.input_cursor) {
                app.input_buffer.replace_range(start..app.input_cursor, "");
                app.input_cursor = start;
            }
        }
        KeyCode::Left => {
            if let Some(start) = prev_grapheme_start(&app.input_buffer, app.input_cursor) {
                app.input_cursor = start;
            }
        }
        KeyCode::Right => {
            if let Some(end) = next_grapheme_end(&app.input_buffer, app.input_cursor) {
                app.input_cursor = end;
            }
        }
        KeyCode::Home => {
            app.input_cursor = 0;
        }
        KeyCode::End => {
            app.input_cursor = app.input_buffer.len();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.input_buffer.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Byte offset where the grapheme cluster ending at `cursor` starts.
fn prev_grapheme_start(s: &str, cursor: usize) -> Option<usize> {
    s[..cursor].grapheme_indices(true).last().map(|(i, _)| i)
}

/// Byte offset just past the grapheme cluster starting at `cursor`.
fn next_grapheme_end(s: &str, cursor: usize) -> Option<usize> {
    s[cursor..].graphemes(true).next().map(|g| cursor + g.len())
}
