use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::header_state::HeaderItem;
use crate::theme::{self, Surface, palette};
use crate::widgets::popup;

const BRAND_GAP: u16 = 1;
const CONTROL_GAP: u16 = 2;

fn item_style(item: HeaderItem, surface: Surface) -> Style {
    match item {
        HeaderItem::Logo => theme::header::LOGO,
        HeaderItem::Title => Style::default()
            .fg(palette::PRIMARY)
            .add_modifier(Modifier::BOLD),
        HeaderItem::ProBadge => theme::header::BADGE,
        HeaderItem::Profile => theme::navigation::BUTTON_PRIMARY,
        _ => Style::default().fg(surface.text_muted),
    }
}

fn widths(items: &[HeaderItem], dark_mode: bool) -> Vec<u16> {
    items
        .iter()
        .map(|item| Line::raw(item.label(dark_mode)).width() as u16)
        .collect()
}

/// Total width of the slots plus the gaps between them
fn row_width(widths: &[u16], gap: u16) -> u16 {
    let gaps = gap * widths.len().saturating_sub(1) as u16;
    widths.iter().sum::<u16>() + gaps
}

/// Brand on the left, controls on the right of the first inner row.
///
/// Returns the rect of every item drawn.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    dark_mode: bool,
    surface: Surface,
) -> Vec<(HeaderItem, Rect)> {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(surface.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand_widths = widths(&HeaderItem::BRAND, dark_mode);
    let brand_width = row_width(&brand_widths, BRAND_GAP);

    let controls = HeaderItem::CONTROLS;
    let controls: &[HeaderItem] = [&controls[..], &controls[4..], &controls[4..5]]
        .into_iter()
        .find(|items| {
            brand_width + CONTROL_GAP + row_width(&widths(items, dark_mode), CONTROL_GAP)
                <= inner.width
        })
        .unwrap_or(&[]);
    let control_widths = widths(controls, dark_mode);
    let control_width = row_width(&control_widths, CONTROL_GAP).min(inner.width);
    let controls_area = Rect {
        x: inner.x + inner.width - control_width,
        width: control_width,
        ..inner
    };

    let brand_slots = popup::row_slots(inner, &brand_widths, BRAND_GAP);
    let control_slots = popup::row_slots(controls_area, &control_widths, CONTROL_GAP);

    HeaderItem::BRAND
        .iter()
        .zip(brand_slots)
        .chain(controls.iter().zip(control_slots))
        .map(|(item, slot)| {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    item.label(dark_mode),
                    item_style(*item, surface),
                )),
                slot,
            );
            (*item, slot)
        })
        .collect()
}
