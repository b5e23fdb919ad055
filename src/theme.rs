//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: AppForge - indigo/coral brand colors, with a light and a dark surface set

use ratatui::style::{Color, Modifier, Style};

/// Brand palette
pub mod palette {
    use super::*;

    pub const PRIMARY: Color = Color::Rgb(93, 92, 222); // #5D5CDE
    pub const SECONDARY: Color = Color::Rgb(255, 107, 107); // #FF6B6B
    pub const ACCENT: Color = Color::Rgb(78, 205, 196); // #4ECDC4
    pub const WARNING: Color = Color::Rgb(255, 217, 61); // #FFD93D
    pub const SUCCESS: Color = Color::Rgb(107, 207, 127); // #6BCF7F
    pub const ERROR: Color = Color::Rgb(229, 57, 53);
    pub const INFO: Color = Color::Rgb(30, 136, 229);

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY_200: Color = Color::Rgb(229, 229, 229);
    pub const GRAY_400: Color = Color::Rgb(161, 161, 161);
    pub const GRAY_500: Color = Color::Rgb(122, 122, 122);
    pub const GRAY_800: Color = Color::Rgb(39, 43, 55);
    pub const BACKGROUND_DARK: Color = Color::Rgb(24, 24, 24); // #181818
}

/// Surface colors that change with dark mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
}

pub const LIGHT: Surface = Surface {
    background: palette::WHITE,
    panel: Color::Rgb(250, 250, 250),
    text: Color::Rgb(17, 19, 24),
    text_muted: palette::GRAY_500,
    border: palette::GRAY_200,
};

pub const DARK: Surface = Surface {
    background: palette::BACKGROUND_DARK,
    panel: palette::GRAY_800,
    text: Color::Rgb(236, 236, 244),
    text_muted: palette::GRAY_400,
    border: Color::Rgb(70, 70, 70),
};

pub fn surface(dark_mode: bool) -> Surface {
    if dark_mode { DARK } else { LIGHT }
}

/// Toast colors per severity
pub mod notification {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: NotificationColors = NotificationColors {
        fg: palette::WHITE,
        bg: palette::SUCCESS,
        border: Color::Rgb(150, 230, 165),
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::WHITE,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::WHITE,
        bg: palette::INFO,
        border: Color::Rgb(100, 181, 246),
    };

    pub const DISMISS: Style = Style::new().add_modifier(Modifier::DIM);
}

/// Loading overlay styles
pub mod progress {
    use super::*;

    pub const BORDER: Color = palette::PRIMARY;
    pub const TITLE: Style = Style::new()
        .fg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD);
    pub const GAUGE_FILLED: Color = palette::PRIMARY;
    pub const GAUGE_EMPTY: Color = palette::GRAY_200;
    pub const SPINNER: Color = palette::SECONDARY;
}

/// Content tabs, mobile tab bar and action buttons
pub mod navigation {
    use super::*;

    pub const TAB_ACTIVE: Style = Style::new()
        .fg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED));
    pub const TAB_FOCUSED: Style = Style::new()
        .fg(palette::WHITE)
        .bg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD);
    pub const BUTTON_PRIMARY: Style = Style::new().fg(palette::WHITE).bg(palette::PRIMARY);
    pub const BUTTON_SECONDARY: Style = Style::new().fg(palette::GRAY_800).bg(palette::GRAY_200);
    pub const BUTTON_FOCUSED: Style = Style::new()
        .fg(palette::WHITE)
        .bg(palette::SECONDARY)
        .add_modifier(Modifier::BOLD);
    pub const FOCUS_BORDER: Color = palette::PRIMARY;
}

/// Demo form styles
pub mod form {
    use super::*;

    pub const PLACEHOLDER: Style = Style::new().add_modifier(Modifier::DIM);
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Sidebar template list and stats card
pub mod sidebar {
    use super::*;

    pub const GROUP_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const SELECTED: Style = Style::new()
        .fg(palette::WHITE)
        .bg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD);
    pub const STATS_FG: Color = palette::WHITE;
    pub const STATS_BG: Color = palette::PRIMARY;
    pub const GROWTH: Color = palette::SUCCESS;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::PRIMARY;
    pub const SEPARATOR: Color = palette::GRAY_400;
}

/// Header logo and badge
pub mod header {
    use super::*;

    pub const LOGO: Style = Style::new()
        .fg(palette::WHITE)
        .bg(palette::PRIMARY)
        .add_modifier(Modifier::BOLD);
    pub const BADGE: Style = Style::new().fg(palette::WHITE).bg(palette::SECONDARY);
}
