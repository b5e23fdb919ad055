#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    DarkMode,
    TestNotifications,
    ClearAllData,
    About,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 4] = [
        SettingsItem::DarkMode,
        SettingsItem::TestNotifications,
        SettingsItem::ClearAllData,
        SettingsItem::About,
    ];

    pub fn section(self) -> &'static str {
        match self {
            SettingsItem::DarkMode => "Appearance",
            SettingsItem::TestNotifications | SettingsItem::ClearAllData => "Actions",
            SettingsItem::About => "About",
        }
    }
}

/// Cursor over the settings list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SettingsState {
    selected: usize,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> SettingsItem {
        SettingsItem::ALL[self.selected]
    }

    pub fn select(&mut self, item: SettingsItem) {
        if let Some(index) = SettingsItem::ALL.iter().position(|i| *i == item) {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SettingsItem::ALL.len();
    }

    pub fn select_previous(&mut self) {
        let len = SettingsItem::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }
}
