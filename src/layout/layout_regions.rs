//! Layout regions tracking for clickable components

use ratatui::layout::Rect;

use crate::footer::FooterItem;
use crate::header::HeaderItem;
use crate::home::QuickStartCard;
use crate::navigation::{ActionButton, AppTab, MobileTab};
use crate::notification::NotificationId;
use crate::settings::SettingsItem;

/// Identifies a clickable UI element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Notification(NotificationId),
    LoadingOverlay,
    Header(HeaderItem),
    Launch,
    QuickStart(QuickStartCard),
    AppTab(AppTab),
    MobileTab(MobileTab),
    NameField,
    CategoryPicker,
    Action(ActionButton),
    /// Index into the flattened template list
    Template(usize),
    StatsCard,
    Setting(SettingsItem),
    Footer(FooterItem),
}

/// Tracks rendered areas of clickable components
///
/// Rebuilt on each render pass. Entries are absent when the component is not
/// visible.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub notifications: Vec<(NotificationId, Rect)>,
    pub loading_overlay: Option<Rect>,
    pub header: Vec<(HeaderItem, Rect)>,
    pub launch: Option<Rect>,
    pub quick_start: Vec<(QuickStartCard, Rect)>,
    pub app_tabs: Vec<(AppTab, Rect)>,
    pub mobile_tabs: Vec<(MobileTab, Rect)>,
    pub name_field: Option<Rect>,
    pub category_picker: Option<Rect>,
    pub actions: Vec<(ActionButton, Rect)>,
    pub templates: Vec<(usize, Rect)>,
    pub stats_card: Option<Rect>,
    pub settings: Vec<(SettingsItem, Rect)>,
    pub footer: Vec<(FooterItem, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
