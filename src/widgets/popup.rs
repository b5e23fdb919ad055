use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of at most `width` x `height` centered inside `area`
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin.min(area.width),
        y: area.y + vertical_margin.min(area.height),
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

/// Lay out fixed-width slots left to right on the first row of `area`.
///
/// Slots that would overflow the right edge are dropped, so the result may
/// be shorter than `widths`.
pub fn row_slots(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
    let mut slots = Vec::with_capacity(widths.len());
    let right = area.x + area.width;
    let mut x = area.x;

    for &width in widths {
        if area.height == 0 || x + width > right {
            break;
        }
        slots.push(Rect {
            x,
            y: area.y,
            width,
            height: 1,
        });
        x += width + gap;
    }

    slots
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
