//! Settings screen of the narrow layout

mod settings_render;
mod settings_state;

pub use settings_render::{SettingsRegions, render_settings};
pub use settings_state::{SettingsItem, SettingsState};
