//! Tabs, buttons and keyboard focus

mod navigation_render;
mod navigation_state;

pub use navigation_render::{render_action_bar, render_app_tabs, render_mobile_tabs};
pub use navigation_state::{ActionButton, AppTab, Focus, MobileTab, focus_ring};
