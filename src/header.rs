//! Top bar of the main content: brand, link row, theme toggle and profile

mod header_render;
mod header_state;

pub use header_render::render_header;
pub use header_state::HeaderItem;
