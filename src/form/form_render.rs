use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::form_state::FormState;
use crate::theme::{self, Surface};

/// Where the form's inputs landed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormRegions {
    pub name_field: Option<Rect>,
    pub category: Option<Rect>,
}

/// Render the "Quick Demo Form" section: title row, then name and category
/// side by side. Needs 4 rows.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &mut FormState,
    name_focused: bool,
    category_focused: bool,
    surface: Surface,
) -> FormRegions {
    if area.height < 4 || area.width < 20 {
        return FormRegions::default();
    }

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).split(area);
    let title = Paragraph::new(Line::from(Span::styled(
        "Quick Demo Form",
        Style::default()
            .fg(surface.text)
            .add_modifier(ratatui::style::Modifier::BOLD),
    )));
    frame.render_widget(title, rows[0]);

    let fields =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(rows[1]);

    let border_color = |focused: bool| {
        if focused {
            theme::navigation::FOCUS_BORDER
        } else {
            surface.border
        }
    };

    form.name.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" App Name ")
            .border_style(Style::default().fg(border_color(name_focused))),
    );
    if name_focused {
        form.name.set_cursor_style(theme::form::CURSOR);
    } else {
        form.name.set_cursor_style(Style::default());
    }
    frame.render_widget(&form.name, fields[0]);

    let category_style = if form.category.is_some() {
        Style::default().fg(surface.text)
    } else {
        theme::form::PLACEHOLDER.fg(surface.text_muted)
    };
    let picker = Paragraph::new(Line::from(vec![
        Span::styled(form.category_label(), category_style),
        Span::styled(" ▾", Style::default().fg(surface.text_muted)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Category ")
            .border_style(Style::default().fg(border_color(category_focused))),
    );
    frame.render_widget(picker, fields[1]);

    FormRegions {
        name_field: Some(fields[0]),
        category: Some(fields[1]),
    }
}
