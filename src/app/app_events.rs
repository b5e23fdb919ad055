use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::navigation::Focus;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Wait briefly for terminal input, then run whatever timers came due
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout())? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }

        if self.run_due_tasks() > 0 {
            self.mark_dirty();
        }
        Ok(())
    }

    /// Poll no longer than the time left until the next timer is due
    fn poll_timeout(&self) -> Duration {
        let now = self.clock.now();
        self.scheduler.next_due().map_or(EVENT_POLL_TIMEOUT, |due| {
            due.saturating_duration_since(now).min(EVENT_POLL_TIMEOUT)
        })
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        // The overlay is modal; only the global keys reach through it
        if self.progress.is_active() {
            return;
        }

        self.mark_dirty();
        match self.focus {
            Focus::AppTabs => self.handle_app_tabs_key(key),
            Focus::NameField => self.handle_name_field_key(key),
            Focus::CategoryPicker => self.handle_category_key(key),
            Focus::Actions => self.handle_actions_key(key),
            Focus::Templates => self.handle_templates_key(key),
            Focus::MobileTabs => self.handle_mobile_tabs_key(key),
            Focus::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_app_tabs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.select_tab(self.selected_tab.previous()),
            KeyCode::Right => self.select_tab(self.selected_tab.next()),
            _ => {}
        }
    }

    fn handle_name_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.validate_and_continue(),
            _ => {
                self.form.input(key);
            }
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                self.form.next_category();
            }
            KeyCode::Up | KeyCode::Left => self.form.previous_category(),
            KeyCode::Backspace | KeyCode::Delete => self.form.select_category(None),
            _ => {}
        }
    }

    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.selected_action = self.selected_action.previous(),
            KeyCode::Right => self.selected_action = self.selected_action.next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_action(self.selected_action),
            _ => {}
        }
    }

    fn handle_templates_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.sidebar.select_previous(),
            KeyCode::Down => self.sidebar.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_template(self.sidebar.selected()),
            _ => {}
        }
    }

    fn handle_mobile_tabs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.select_mobile_tab(self.mobile_tab.previous()),
            KeyCode::Right => self.select_mobile_tab(self.mobile_tab.next()),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.settings.select_previous(),
            KeyCode::Down => self.settings.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_setting(self.settings.selected()),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
