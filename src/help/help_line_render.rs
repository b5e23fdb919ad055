use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::navigation::Focus;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

pub(crate) fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.progress.is_active() {
        return hints!["Esc" => "Cancel", "Ctrl+X" => "Dismiss", "Ctrl+C" => "Quit"];
    }

    match app.focus {
        Focus::NameField => {
            hints!["Tab" => "Next", "Enter" => "Validate", "Ctrl+G" => "Generate", "Ctrl+D" => "Theme", "Ctrl+L" => "Clear", "Ctrl+C" => "Quit"]
        }
        Focus::CategoryPicker => {
            hints!["↑/↓" => "Category", "Del" => "Unset", "Tab" => "Next", "1-5" => "Tab", "q" => "Quit"]
        }
        Focus::AppTabs | Focus::MobileTabs => {
            hints!["←/→" => "Switch", "1-5" => "Tab", "Tab" => "Next", "Esc" => "Dismiss", "q" => "Quit"]
        }
        Focus::Actions => {
            hints!["←/→" => "Choose", "Enter" => "Activate", "Tab" => "Next", "Ctrl+T" => "Test", "q" => "Quit"]
        }
        Focus::Templates | Focus::Settings => {
            hints!["↑/↓" => "Select", "Enter" => "Open", "Tab" => "Next", "q" => "Quit"]
        }
    }
}

fn build_styled_spans(
    hints: &[(&'static str, &'static str)],
    desc_style: Style,
) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let surface = theme::surface(app.dark_mode);
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints, Style::default().fg(surface.text_muted));
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
