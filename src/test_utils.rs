//! Shared test utilities for appforge
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::clock::ManualClock;
    use crate::config::Config;
    use crate::random::ScriptedRandom;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// App on a manual clock with default config. Random draws return the
    /// low end of every range unless scripted.
    pub fn test_app() -> (App, ManualClock) {
        test_app_with(Config::default(), ScriptedRandom::new())
    }

    pub fn test_app_with(config: Config, rng: ScriptedRandom) -> (App, ManualClock) {
        let clock = ManualClock::new();
        let app = App::with_sources(config, Box::new(clock.clone()), Box::new(rng));
        (app, clock)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        key_with_mods(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Render the whole app and return the buffer as text
    pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }
}
