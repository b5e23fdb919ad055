use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::navigation_state::{ActionButton, AppTab, MobileTab};
use crate::theme::{self, Surface};
use crate::widgets::popup;

const TAB_GAP: u16 = 1;
const BUTTON_GAP: u16 = 2;

fn padded(text: &str) -> String {
    format!(" {text} ")
}

fn slot_widths(labels: &[String]) -> Vec<u16> {
    labels
        .iter()
        .map(|label| Line::raw(label.as_str()).width() as u16)
        .collect()
}

/// Content tabs; the selected tab is underlined, the cursor is filled when focused
pub fn render_app_tabs(
    frame: &mut Frame,
    area: Rect,
    selected: AppTab,
    focused: bool,
    surface: Surface,
) -> Vec<(AppTab, Rect)> {
    let labels: Vec<String> = AppTab::ALL
        .iter()
        .map(|tab| padded(&format!("{} {}", tab.icon(), tab.label())))
        .collect();
    let slots = popup::row_slots(area, &slot_widths(&labels), TAB_GAP);

    AppTab::ALL
        .iter()
        .zip(labels)
        .zip(slots)
        .map(|((tab, label), slot)| {
            let style = if *tab == selected && focused {
                theme::navigation::TAB_FOCUSED
            } else if *tab == selected {
                theme::navigation::TAB_ACTIVE
            } else {
                Style::default().fg(surface.text_muted)
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), slot);
            (*tab, slot)
        })
        .collect()
}

/// Buttons under the form. Buttons that do not fit are left out.
pub fn render_action_bar(
    frame: &mut Frame,
    area: Rect,
    selected: ActionButton,
    focused: bool,
) -> Vec<(ActionButton, Rect)> {
    let labels: Vec<String> = ActionButton::ALL
        .iter()
        .map(|button| padded(button.label()))
        .collect();
    let slots = popup::row_slots(area, &slot_widths(&labels), BUTTON_GAP);

    ActionButton::ALL
        .iter()
        .zip(labels)
        .zip(slots)
        .map(|((button, label), slot)| {
            let style = if focused && *button == selected {
                theme::navigation::BUTTON_FOCUSED
            } else if button.is_primary() {
                theme::navigation::BUTTON_PRIMARY
            } else {
                theme::navigation::BUTTON_SECONDARY
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), slot);
            (*button, slot)
        })
        .collect()
}

/// Bottom tab bar of the narrow layout, three equal cells under a rule
pub fn render_mobile_tabs(
    frame: &mut Frame,
    area: Rect,
    selected: MobileTab,
    focused: bool,
    surface: Surface,
) -> Vec<(MobileTab, Rect)> {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(surface.border))
        .style(Style::default().bg(surface.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(inner);

    MobileTab::ALL
        .iter()
        .zip(cells.iter())
        .map(|(tab, cell)| {
            let style = if *tab == selected && focused {
                theme::navigation::TAB_FOCUSED
            } else if *tab == selected {
                theme::navigation::TAB_ACTIVE
            } else {
                Style::default().fg(surface.text_muted)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(tab.label(), style)).alignment(Alignment::Center),
                *cell,
            );
            (*tab, *cell)
        })
        .collect()
}

#[cfg(test)]
#[path = "navigation_render_tests.rs"]
mod navigation_render_tests;
