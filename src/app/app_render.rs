use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
};

use super::app_state::App;
use crate::footer::{FOOTER_HEIGHT, render_footer};
use crate::form::render_form;
use crate::header::render_header;
use crate::home::{WELCOME_HEIGHT, render_quick_start_cards, render_welcome};
use crate::layout::LayoutMode;
use crate::navigation::{Focus, MobileTab, render_action_bar, render_app_tabs, render_mobile_tabs};
use crate::notification::render_notifications;
use crate::progress::render_overlay;
use crate::settings::render_settings;
use crate::sidebar::render_sidebar;
use crate::theme::{self, Surface};

const SIDEBAR_WIDTH: u16 = 32;
const MOBILE_TAB_BAR_HEIGHT: u16 = 2;
const CARDS_MIN_HEIGHT: u16 = 24;
/// Main content rows with the cards shown, plus the footer
const FOOTER_MIN_HEIGHT: u16 = 27;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.layout_regions.clear();

        let area = frame.area();
        self.set_layout_mode(LayoutMode::for_width(
            area.width,
            self.config.appearance.wide_layout_min_width,
        ));
        let surface = theme::surface(self.dark_mode);
        frame.render_widget(
            Block::default().style(Style::default().bg(surface.background).fg(surface.text)),
            area,
        );

        let [body_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        match self.layout_mode {
            LayoutMode::Wide => self.render_wide(frame, body_area, surface),
            LayoutMode::Narrow => self.render_narrow(frame, body_area, surface),
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        self.layout_regions.loading_overlay =
            render_overlay(frame, &self.progress, surface, self.frame_count);
        self.layout_regions.notifications = render_notifications(frame, &self.notifications);
    }

    fn render_wide(&mut self, frame: &mut Frame, area: Rect, surface: Surface) {
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(area);

        self.render_templates(frame, sidebar_area, surface);
        self.render_main(frame, main_area, surface);
    }

    fn render_narrow(&mut self, frame: &mut Frame, area: Rect, surface: Surface) {
        let [content_area, tabs_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(MOBILE_TAB_BAR_HEIGHT),
        ])
        .areas(area);

        match self.mobile_tab {
            MobileTab::Home => self.render_main(frame, content_area, surface),
            MobileTab::Templates => self.render_templates(frame, content_area, surface),
            MobileTab::Settings => {
                let regions = render_settings(
                    frame,
                    content_area,
                    &self.settings,
                    &self.stats,
                    self.dark_mode,
                    self.focus == Focus::Settings,
                    surface,
                );
                self.layout_regions.settings = regions.items;
                self.layout_regions.stats_card = regions.stats;
            }
        }

        self.layout_regions.mobile_tabs = render_mobile_tabs(
            frame,
            tabs_area,
            self.mobile_tab,
            self.focus == Focus::MobileTabs,
            surface,
        );
    }

    fn render_templates(&mut self, frame: &mut Frame, area: Rect, surface: Surface) {
        let regions = render_sidebar(
            frame,
            area,
            &self.sidebar,
            &self.stats,
            self.focus == Focus::Templates,
            surface,
        );
        self.layout_regions.templates = regions.templates;
        self.layout_regions.stats_card = regions.stats_card;
    }

    /// Header, tabs, welcome, quick start cards, demo form, action bar and,
    /// in the wide layout, the footer
    fn render_main(&mut self, frame: &mut Frame, area: Rect, surface: Surface) {
        let area = crate::widgets::popup::inset_rect(area, 1, 0);
        let cards_height = if area.height >= CARDS_MIN_HEIGHT { 5 } else { 0 };
        let show_footer = self.layout_mode == LayoutMode::Wide && area.height >= FOOTER_MIN_HEIGHT;
        let footer_height = if show_footer { FOOTER_HEIGHT } else { 0 };

        let [
            header_area,
            tabs_area,
            _,
            welcome_area,
            _,
            cards_area,
            form_area,
            _,
            actions_area,
            _,
            footer_area,
        ] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(WELCOME_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(cards_height),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .areas(area);

        self.layout_regions.header = render_header(frame, header_area, self.dark_mode, surface);

        self.layout_regions.app_tabs = render_app_tabs(
            frame,
            tabs_area,
            self.selected_tab,
            self.focus == Focus::AppTabs,
            surface,
        );

        self.layout_regions.launch = render_welcome(frame, welcome_area, surface);

        if cards_height > 0 {
            self.layout_regions.quick_start = render_quick_start_cards(frame, cards_area, surface);
        }

        let form_regions = render_form(
            frame,
            form_area,
            &mut self.form,
            self.focus == Focus::NameField,
            self.focus == Focus::CategoryPicker,
            surface,
        );
        self.layout_regions.name_field = form_regions.name_field;
        self.layout_regions.category_picker = form_regions.category;

        self.layout_regions.actions = render_action_bar(
            frame,
            actions_area,
            self.selected_action,
            self.focus == Focus::Actions,
        );

        if footer_height > 0 {
            self.layout_regions.footer = render_footer(frame, footer_area, surface);
        }
    }
}
