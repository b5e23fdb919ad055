//! Loading overlay rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use super::progress_state::ProgressState;
use crate::theme::{self, Surface};
use crate::widgets::popup;

const OVERLAY_WIDTH: u16 = 46;
const OVERLAY_HEIGHT: u16 = 9;
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub const OVERLAY_TITLE: &str = "Opening External Site";

/// Render the centered loading overlay when a simulation is running.
///
/// `frame_count` animates the spinner. Returns the overlay area.
pub fn render_overlay(
    frame: &mut Frame,
    state: &ProgressState,
    surface: Surface,
    frame_count: u64,
) -> Option<Rect> {
    if !state.is_active() {
        return None;
    }

    let area = popup::centered_popup(frame.area(), OVERLAY_WIDTH, OVERLAY_HEIGHT);
    if area.width < 12 || area.height < 5 {
        return None;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::progress::BORDER))
        .style(Style::default().bg(surface.panel).fg(surface.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1), // spinner + title
        Constraint::Length(1),
        Constraint::Length(1), // message
        Constraint::Length(1),
        Constraint::Length(1), // gauge
        Constraint::Min(0),
    ])
    .split(popup::inset_rect(inner, 2, 0));

    let spinner = SPINNER[(frame_count % SPINNER.len() as u64) as usize];
    let title = Line::from(vec![
        Span::styled(spinner, Style::default().fg(theme::progress::SPINNER)),
        Span::raw(" "),
        Span::styled(OVERLAY_TITLE, theme::progress::TITLE),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), rows[0]);

    let message = Paragraph::new(Span::styled(
        state.message().to_string(),
        Style::default().fg(surface.text_muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message, rows[2]);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme::progress::GAUGE_FILLED)
                .bg(theme::progress::GAUGE_EMPTY),
        )
        .ratio(state.progress().clamp(0.0, 1.0))
        .label(format!("{}%", state.percent()));
    frame.render_widget(gauge, rows[4]);

    Some(area)
}

#[cfg(test)]
#[path = "progress_render_tests.rs"]
mod progress_render_tests;
