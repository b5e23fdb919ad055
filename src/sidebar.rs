//! Quick Start sidebar: template catalog and the stats card

mod sidebar_render;
mod sidebar_state;

pub use sidebar_render::{render_sidebar, SidebarRegions};
pub use sidebar_state::{SidebarState, TEMPLATE_GROUPS, TemplateGroup};
