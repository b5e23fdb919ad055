use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::settings_state::{SettingsItem, SettingsState};
use crate::stats::StatsState;
use crate::theme::{self, Surface};

/// Section the statistics rows follow
const STATISTICS_AFTER: &str = "Appearance";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsRegions {
    pub items: Vec<(SettingsItem, Rect)>,
    /// Both statistics rows
    pub stats: Option<Rect>,
}

enum Row {
    Heading(&'static str),
    Item(SettingsItem),
    Stat(Line<'static>),
}

fn item_line(item: SettingsItem, dark_mode: bool) -> String {
    match item {
        SettingsItem::DarkMode => {
            let toggle = if dark_mode { "[●] on" } else { "[ ] off" };
            format!("Dark Mode  {toggle}")
        }
        SettingsItem::TestNotifications => "Test Notifications".to_string(),
        SettingsItem::ClearAllData => "Clear All Data".to_string(),
        SettingsItem::About => "About AppForge".to_string(),
    }
}

fn stat_rows(stats: &StatsState, surface: Surface) -> [Row; 3] {
    [
        Row::Heading("Statistics"),
        Row::Stat(Line::from(vec![
            Span::styled("  Apps Generated Today  ", Style::default().fg(surface.text)),
            Span::styled(
                stats.apps_generated_today.to_string(),
                Style::default()
                    .fg(theme::palette::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        Row::Stat(Line::from(vec![
            Span::styled("  Growth  ", Style::default().fg(surface.text_muted)),
            Span::styled(
                format!("+{}%", stats.growth_percentage),
                Style::default().fg(theme::sidebar::GROWTH),
            ),
        ])),
    ]
}

/// Headings and items top to bottom, statistics after the appearance section
fn plan_rows(stats: &StatsState, surface: Surface) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut section = "";
    for item in SettingsItem::ALL {
        if item.section() != section {
            if section == STATISTICS_AFTER {
                rows.extend(stat_rows(stats, surface));
            }
            section = item.section();
            rows.push(Row::Heading(section));
        }
        rows.push(Row::Item(item));
    }
    rows
}

/// Render the settings list, one row per item under its section heading
pub fn render_settings(
    frame: &mut Frame,
    area: Rect,
    settings: &SettingsState,
    stats: &StatsState,
    dark_mode: bool,
    focused: bool,
    surface: Surface,
) -> SettingsRegions {
    let border = if focused {
        theme::navigation::FOCUS_BORDER
    } else {
        surface.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Settings ")
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(surface.background).fg(surface.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut regions = SettingsRegions::default();
    let bottom = inner.y + inner.height;

    for (row, y) in plan_rows(stats, surface).into_iter().zip(inner.y..bottom) {
        let rect = Rect { y, height: 1, ..inner };
        match row {
            Row::Heading(title) => {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        title,
                        Style::default()
                            .fg(surface.text_muted)
                            .add_modifier(Modifier::BOLD),
                    )),
                    rect,
                );
            }
            Row::Stat(line) => {
                frame.render_widget(Paragraph::new(line), rect);
                regions.stats = Some(match regions.stats {
                    Some(first) => first.union(rect),
                    None => rect,
                });
            }
            Row::Item(item) => {
                let style = if focused && settings.selected() == item {
                    theme::sidebar::SELECTED
                } else {
                    Style::default().fg(surface.text)
                };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        format!("  {}", item_line(item, dark_mode)),
                        style,
                    )))
                    .style(style),
                    rect,
                );
                regions.items.push((item, rect));
            }
        }
    }

    regions
}
