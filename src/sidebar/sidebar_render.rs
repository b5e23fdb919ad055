use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::sidebar_state::{SidebarState, TEMPLATE_GROUPS};
use crate::stats::StatsState;
use crate::theme::{self, Surface};

const STATS_CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarRegions {
    pub templates: Vec<(usize, Rect)>,
    pub stats_card: Option<Rect>,
}

/// Render the template list with the stats card pinned to the bottom
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    sidebar: &SidebarState,
    stats: &StatsState,
    focused: bool,
    surface: Surface,
) -> SidebarRegions {
    let mut regions = SidebarRegions::default();

    let border = if focused {
        theme::navigation::FOCUS_BORDER
    } else {
        surface.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Quick Start ")
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(surface.background).fg(surface.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [list_area, stats_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(STATS_CARD_HEIGHT),
    ])
    .areas(inner);

    let mut y = list_area.y;
    let bottom = list_area.y + list_area.height;
    let mut index = 0;
    for group in TEMPLATE_GROUPS {
        if y >= bottom {
            break;
        }
        let title_area = Rect {
            y,
            height: 1,
            ..list_area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                group.title,
                theme::sidebar::GROUP_TITLE.fg(surface.text_muted),
            )),
            title_area,
        );
        y += 1;

        for template in group.templates {
            if y >= bottom {
                break;
            }
            let row = Rect {
                y,
                height: 1,
                ..list_area
            };
            let selected = index == sidebar.selected();
            let style = if selected && focused {
                theme::sidebar::SELECTED
            } else {
                Style::default().fg(surface.text)
            };
            let marker = if selected { "› " } else { "  " };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(*template, style),
                ]))
                .style(style),
                row,
            );
            regions.templates.push((index, row));
            y += 1;
            index += 1;
        }
        y += 1;
    }

    if stats_area.height == STATS_CARD_HEIGHT {
        render_stats_card(frame, stats_area, stats);
        regions.stats_card = Some(stats_area);
    }

    regions
}

fn render_stats_card(frame: &mut Frame, area: Rect, stats: &StatsState) {
    let base = Style::default()
        .fg(theme::sidebar::STATS_FG)
        .bg(theme::sidebar::STATS_BG);
    let lines = vec![
        Line::from(Span::styled(
            " Apps Generated Today",
            base.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", stats.apps_generated_today),
            base.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", stats.growth_label()),
            base.fg(theme::sidebar::GROWTH),
        )),
    ];
    let card = Paragraph::new(lines).style(base).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(base),
    );
    frame.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(width: u16, height: u16, focused: bool) -> (String, SidebarRegions) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let sidebar = SidebarState::new();
        let stats = StatsState::default();
        let mut regions = SidebarRegions::default();
        terminal
            .draw(|f| {
                let area = f.area();
                regions = render_sidebar(f, area, &sidebar, &stats, focused, theme::LIGHT);
            })
            .unwrap();
        (terminal.backend().to_string(), regions)
    }

    #[test]
    fn test_tall_sidebar_lists_every_template_and_stats() {
        let (output, regions) = render(32, 30, true);

        assert_eq!(regions.templates.len(), SidebarState::total());
        assert!(regions.stats_card.is_some());
        assert!(output.contains("Popular Templates"));
        assert!(output.contains("Music Player"));
        assert!(output.contains("1247"));
        assert!(output.contains("+12% from yesterday"));
    }

    #[test]
    fn test_short_sidebar_truncates_list() {
        let (_, regions) = render(32, 12, false);

        assert!(regions.templates.len() < SidebarState::total());
        assert_eq!(regions.templates[0].0, 0);
    }

    #[test]
    fn test_selected_template_has_marker() {
        let (output, _) = render(32, 30, true);
        assert!(output.contains("› Todo App"));
    }
}
