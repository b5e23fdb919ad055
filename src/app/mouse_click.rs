//! Mouse click handling
//!
//! A click focuses the element under the pointer and activates it.

use super::app_state::App;
use crate::layout::Region;
use crate::navigation::Focus;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    let Some(region) = region else {
        return;
    };

    match region {
        Region::Notification(id) => {
            app.dismiss_notification(id);
        }
        Region::LoadingOverlay => {}
        Region::Header(item) => app.activate_header_item(item),
        Region::Launch => app.launch(),
        Region::QuickStart(card) => app.activate_quick_start(card),
        Region::AppTab(tab) => {
            app.focus = Focus::AppTabs;
            app.select_tab(tab);
        }
        Region::MobileTab(tab) => {
            app.focus = Focus::MobileTabs;
            app.select_mobile_tab(tab);
        }
        Region::NameField => app.focus = Focus::NameField,
        Region::CategoryPicker => {
            app.focus = Focus::CategoryPicker;
            app.form.next_category();
        }
        Region::Action(action) => {
            app.focus = Focus::Actions;
            app.activate_action(action);
        }
        Region::Template(index) => {
            app.focus = Focus::Templates;
            app.activate_template(index);
        }
        Region::StatsCard => app.show_stats_details(),
        Region::Setting(item) => {
            app.focus = Focus::Settings;
            app.activate_setting(item);
        }
        Region::Footer(item) => app.activate_footer_item(item),
    }
    app.mark_dirty();
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
