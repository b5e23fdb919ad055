use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::footer_state::{FooterItem, RESOURCE_LINKS, SUPPORT_LINKS, SocialLink};
use crate::theme::{self, Surface, palette};
use crate::widgets::popup;

/// Top rule, column titles, four link rows and the copyright line
pub const FOOTER_HEIGHT: u16 = 7;

const LINK_COLUMN_WIDTH: u16 = 16;
const SOCIAL_GAP: u16 = 1;
const TAGLINE: &str = "Create stunning applications in minutes, not hours.";
const COPYRIGHT: &str = "© 2024 AppForge. All rights reserved. Built with ♥ for developers.";

pub fn render_footer(frame: &mut Frame, area: Rect, surface: Surface) -> Vec<(FooterItem, Rect)> {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(surface.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [columns_area, copyright_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    let [company_area, resources_area, support_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(LINK_COLUMN_WIDTH),
        Constraint::Length(LINK_COLUMN_WIDTH),
    ])
    .areas(columns_area);

    let mut regions = render_company(frame, company_area, surface);
    regions.extend(render_link_column(
        frame,
        resources_area,
        "Resources",
        &RESOURCE_LINKS,
        surface,
    ));
    regions.extend(render_link_column(
        frame,
        support_area,
        "Support",
        &SUPPORT_LINKS,
        surface,
    ));

    if copyright_area.height > 0 {
        let width = Line::raw(COPYRIGHT).width() as u16;
        let rect = popup::centered_popup(copyright_area, width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                COPYRIGHT,
                Style::default().fg(surface.text_muted),
            )),
            rect,
        );
        regions.push((FooterItem::Copyright, rect));
    }

    regions
}

/// Brand, tagline and the social buttons
fn render_company(frame: &mut Frame, area: Rect, surface: Surface) -> Vec<(FooterItem, Rect)> {
    let [brand_area, tagline_area, _, social_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ⚒ ", theme::header::LOGO),
            Span::raw(" "),
            Span::styled(
                "AppForge",
                Style::default()
                    .fg(surface.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        brand_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            TAGLINE,
            Style::default().fg(surface.text_muted),
        )),
        tagline_area,
    );

    let labels: Vec<String> = SocialLink::ALL
        .iter()
        .map(|link| format!(" {} ", link.label()))
        .collect();
    let widths: Vec<u16> = labels
        .iter()
        .map(|label| Line::raw(label.as_str()).width() as u16)
        .collect();
    let slots = popup::row_slots(social_area, &widths, SOCIAL_GAP);

    SocialLink::ALL
        .iter()
        .zip(labels)
        .zip(slots)
        .map(|((link, label), slot)| {
            frame.render_widget(
                Paragraph::new(Span::styled(label, theme::navigation::BUTTON_SECONDARY)),
                slot,
            );
            (FooterItem::Social(*link), slot)
        })
        .collect()
}

/// Bold title, then one row per link until the column runs out
fn render_link_column(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    links: &[&'static str],
    surface: Surface,
) -> Vec<(FooterItem, Rect)> {
    if area.height == 0 {
        return Vec::new();
    }
    frame.render_widget(
        Paragraph::new(Span::styled(
            title,
            Style::default()
                .fg(palette::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Rect { height: 1, ..area },
    );

    let bottom = area.y + area.height;
    links
        .iter()
        .zip(area.y + 1..bottom)
        .map(|(link, y)| {
            let row = Rect { y, height: 1, ..area };
            frame.render_widget(
                Paragraph::new(Span::styled(*link, Style::default().fg(surface.text))),
                row,
            );
            (FooterItem::Link(*link), row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(width: u16, height: u16) -> (String, Vec<(FooterItem, Rect)>) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut items = Vec::new();
        terminal
            .draw(|f| {
                let area = f.area();
                items = render_footer(f, area, theme::LIGHT);
            })
            .unwrap();
        (terminal.backend().to_string(), items)
    }

    fn count(items: &[(FooterItem, Rect)], matches: impl Fn(&FooterItem) -> bool) -> usize {
        items.iter().filter(|(item, _)| matches(item)).count()
    }

    #[test]
    fn test_full_footer_has_every_item() {
        let (output, items) = render(90, FOOTER_HEIGHT);

        assert_eq!(count(&items, |i| matches!(i, FooterItem::Social(_))), 4);
        assert_eq!(count(&items, |i| matches!(i, FooterItem::Link(_))), 8);
        assert_eq!(count(&items, |i| *i == FooterItem::Copyright), 1);
        assert!(output.contains("Resources"));
        assert!(output.contains("API Reference"));
        assert!(output.contains("Bug Reports"));
        assert!(output.contains("LinkedIn"));
        assert!(output.contains("All rights reserved"));
    }

    #[test]
    fn test_copyright_sits_on_last_row() {
        let (_, items) = render(90, FOOTER_HEIGHT);
        let (_, rect) = items
            .iter()
            .find(|(item, _)| *item == FooterItem::Copyright)
            .unwrap();

        assert_eq!(rect.y, FOOTER_HEIGHT - 1);
    }

    #[test]
    fn test_short_footer_truncates_link_columns() {
        let (_, items) = render(90, 4);

        let links = count(&items, |i| matches!(i, FooterItem::Link(_)));
        assert!(links < 8);
        assert!(items.contains(&(
            FooterItem::Link("Documentation"),
            Rect {
                x: 90 - 2 * LINK_COLUMN_WIDTH,
                y: 2,
                width: LINK_COLUMN_WIDTH,
                height: 1,
            }
        )));
    }
}
