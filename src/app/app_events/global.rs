use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;
use crate::navigation::AppTab;
use crate::notification::Severity;

/// Keys that work regardless of focus. Returns true when the key was consumed.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_control_keys(app, key);
    }

    if key.code == KeyCode::Esc {
        if !app.cancel_loading() {
            app.dismiss_latest_notification();
        }
        return true;
    }

    // Everything else is blocked by the overlay
    if app.progress.is_active() {
        return false;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            true
        }
        KeyCode::BackTab => {
            app.focus_previous();
            true
        }
        KeyCode::Char('q') if !app.focus.is_text_entry() => {
            app.should_quit = true;
            true
        }
        KeyCode::Char(c) if !app.focus.is_text_entry() => match AppTab::from_digit(c) {
            Some(tab) => {
                app.select_tab(tab);
                true
            }
            None => false,
        },
        _ => false,
    }
}

fn handle_control_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('x') => {
            app.dismiss_latest_notification();
            true
        }
        _ if app.progress.is_active() => false,
        KeyCode::Char('g') => {
            app.generate_app();
            true
        }
        KeyCode::Char('d') => {
            app.toggle_dark_mode();
            true
        }
        KeyCode::Char('l') => {
            app.clear_form();
            true
        }
        KeyCode::Char('t') => {
            app.show_notification("Test notification sent!", Severity::Success);
            true
        }
        _ => false,
    }
}
