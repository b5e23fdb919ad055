//! Notification rendering
//!
//! Draws the toast stack in the top-right corner, oldest on top.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::{NotificationId, NotificationQueue};
use crate::theme;
use crate::widgets::popup;

const MARGIN: u16 = 1;
const TOAST_HEIGHT: u16 = 3;
const MAX_TOAST_WIDTH: u16 = 60;
// icon + spaces + dismiss marker + borders
const TOAST_CHROME: u16 = 8;
const MIN_TOAST_WIDTH: u16 = 12;

/// Render every toast and return where each one landed.
///
/// Should be called after the main UI so toasts appear on top. Toasts that
/// do not fit vertically are skipped.
pub fn render_notifications(
    frame: &mut Frame,
    queue: &NotificationQueue,
) -> Vec<(NotificationId, Rect)> {
    let frame_area = frame.area();
    let mut placed = Vec::with_capacity(queue.len());

    let available_width = frame_area.width.saturating_sub(MARGIN * 2);
    if available_width < MIN_TOAST_WIDTH {
        return placed;
    }

    let mut y = frame_area.y + MARGIN;
    for notification in queue.items() {
        if y + TOAST_HEIGHT > frame_area.y + frame_area.height {
            break;
        }

        let message_width = notification.message.chars().count() as u16;
        let width = (message_width + TOAST_CHROME)
            .clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH)
            .min(available_width);
        let area = Rect {
            x: frame_area.x + frame_area.width - MARGIN - width,
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let colors = notification.severity.colors();
        let text_width = width.saturating_sub(TOAST_CHROME) as usize;
        let message = truncate(&notification.message, text_width);

        popup::clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border).bg(colors.bg))
            .style(Style::default().bg(colors.bg));

        let base = Style::default().fg(colors.fg).bg(colors.bg);
        let pad = text_width.saturating_sub(message.chars().count());
        let line = Line::from(vec![
            Span::styled(format!(" {} ", notification.severity.icon()), base),
            Span::styled(message, base),
            Span::styled(" ".repeat(pad), base),
            Span::styled(" ×", base.patch(theme::notification::DISMISS)),
        ]);

        frame.render_widget(Paragraph::new(line).block(block), area);
        placed.push((notification.id, area));
        y += TOAST_HEIGHT;
    }

    placed
}

fn truncate(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        return message.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut truncated: String = message.chars().take(keep).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
