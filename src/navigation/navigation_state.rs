use crate::layout::LayoutMode;

/// Steps through a fixed list, wrapping at both ends
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let index = all.iter().position(|item| *item == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    all[next]
}

/// Content tabs above the main content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Basic,
    Design,
    Features,
    Advanced,
    Preview,
}

impl AppTab {
    pub const ALL: [AppTab; 5] = [
        AppTab::Basic,
        AppTab::Design,
        AppTab::Features,
        AppTab::Advanced,
        AppTab::Preview,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AppTab::Basic => "Basic Info",
            AppTab::Design => "Design",
            AppTab::Features => "Features",
            AppTab::Advanced => "Advanced",
            AppTab::Preview => "Preview",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AppTab::Basic => "ⓘ",
            AppTab::Design => "✎",
            AppTab::Features => "⚙",
            AppTab::Advanced => "☰",
            AppTab::Preview => "◉",
        }
    }

    /// Tab for the digit keys `1`..`5`
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| AppTab::ALL.get(i).copied())
    }

    pub fn next(self) -> Self {
        cycle(&AppTab::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&AppTab::ALL, self, false)
    }
}

/// Bottom tab bar in the narrow layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileTab {
    #[default]
    Home,
    Templates,
    Settings,
}

impl MobileTab {
    pub const ALL: [MobileTab; 3] = [MobileTab::Home, MobileTab::Templates, MobileTab::Settings];

    pub fn label(self) -> &'static str {
        match self {
            MobileTab::Home => "⌂ Home",
            MobileTab::Templates => "▦ Templates",
            MobileTab::Settings => "⚙ Settings",
        }
    }

    pub fn next(self) -> Self {
        cycle(&MobileTab::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&MobileTab::ALL, self, false)
    }
}

/// Buttons in the action bar under the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionButton {
    #[default]
    ValidateAndContinue,
    ClearForm,
    SaveConfiguration,
    LoadConfiguration,
    PreviewApp,
    GenerateApp,
}

impl ActionButton {
    pub const ALL: [ActionButton; 6] = [
        ActionButton::ValidateAndContinue,
        ActionButton::ClearForm,
        ActionButton::SaveConfiguration,
        ActionButton::LoadConfiguration,
        ActionButton::PreviewApp,
        ActionButton::GenerateApp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActionButton::ValidateAndContinue => "✓ Validate & Continue",
            ActionButton::ClearForm => "Clear Form",
            ActionButton::SaveConfiguration => "Save Configuration",
            ActionButton::LoadConfiguration => "Load Configuration",
            ActionButton::PreviewApp => "◉ Preview App",
            ActionButton::GenerateApp => "▲ Generate App",
        }
    }

    /// Filled with the brand color
    pub fn is_primary(self) -> bool {
        matches!(
            self,
            ActionButton::ValidateAndContinue | ActionButton::PreviewApp | ActionButton::GenerateApp
        )
    }

    pub fn next(self) -> Self {
        cycle(&ActionButton::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&ActionButton::ALL, self, false)
    }
}

/// Which element receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    AppTabs,
    #[default]
    NameField,
    CategoryPicker,
    Actions,
    Templates,
    MobileTabs,
    Settings,
}

impl Focus {
    /// Whether plain character keys are text input here
    pub fn is_text_entry(self) -> bool {
        self == Focus::NameField
    }
}

const WIDE_RING: &[Focus] = &[
    Focus::AppTabs,
    Focus::NameField,
    Focus::CategoryPicker,
    Focus::Actions,
    Focus::Templates,
];
const NARROW_HOME_RING: &[Focus] = &[
    Focus::MobileTabs,
    Focus::AppTabs,
    Focus::NameField,
    Focus::CategoryPicker,
    Focus::Actions,
];
const NARROW_TEMPLATES_RING: &[Focus] = &[Focus::MobileTabs, Focus::Templates];
const NARROW_SETTINGS_RING: &[Focus] = &[Focus::MobileTabs, Focus::Settings];

/// Focus order for Tab / Shift+Tab given what is on screen
pub fn focus_ring(mode: LayoutMode, mobile_tab: MobileTab) -> &'static [Focus] {
    match (mode, mobile_tab) {
        (LayoutMode::Wide, _) => WIDE_RING,
        (LayoutMode::Narrow, MobileTab::Home) => NARROW_HOME_RING,
        (LayoutMode::Narrow, MobileTab::Templates) => NARROW_TEMPLATES_RING,
        (LayoutMode::Narrow, MobileTab::Settings) => NARROW_SETTINGS_RING,
    }
}

#[cfg(test)]
#[path = "navigation_state_tests.rs"]
mod navigation_state_tests;
