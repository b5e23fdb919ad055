//! Welcome block and quick start cards at the top of the main content

mod home_render;
mod home_state;

pub use home_render::{WELCOME_HEIGHT, render_quick_start_cards, render_welcome};
pub use home_state::QuickStartCard;
