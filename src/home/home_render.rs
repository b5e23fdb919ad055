use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::home_state::QuickStartCard;
use crate::theme::{self, Surface};
use crate::widgets::popup;

/// Launch badge plus the two welcome lines
pub const WELCOME_HEIGHT: u16 = 3;

const LAUNCH_LABEL: &str = " ▲ Launch ";

/// Centered launch badge over the welcome title and tagline.
///
/// Returns the badge rect when there was room to draw it.
pub fn render_welcome(frame: &mut Frame, area: Rect, surface: Surface) -> Option<Rect> {
    let [badge_area, text_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to AppForge",
            Style::default()
                .fg(surface.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "The most advanced application generator for modern web development",
            Style::default().fg(surface.text_muted),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(welcome, text_area);

    let width = Line::raw(LAUNCH_LABEL).width() as u16;
    if badge_area.height == 0 || badge_area.width < width {
        return None;
    }
    let badge = popup::centered_popup(badge_area, width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(LAUNCH_LABEL, theme::header::LOGO)),
        badge,
    );
    Some(badge)
}

/// Three cards side by side, leaving the last row of `area` blank
pub fn render_quick_start_cards(
    frame: &mut Frame,
    area: Rect,
    surface: Surface,
) -> Vec<(QuickStartCard, Rect)> {
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(Rect {
        height: area.height.saturating_sub(1),
        ..area
    });

    QuickStartCard::ALL
        .iter()
        .zip(columns.iter())
        .map(|(card, column)| {
            let widget = Paragraph::new(vec![
                Line::from(Span::styled(
                    card.title(),
                    Style::default()
                        .fg(surface.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    card.description(),
                    Style::default().fg(surface.text_muted),
                )),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::palette::ACCENT)),
            );
            frame.render_widget(widget, *column);
            (*card, *column)
        })
        .collect()
}
