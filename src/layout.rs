//! Layout module for the responsive shell
//!
//! `LayoutMode` picks the wide (sidebar) or narrow (tab bar) arrangement.
//! `LayoutRegions` records where clickable things were drawn during the last
//! render pass, and `region_at()` maps a mouse position back to one of them.

mod layout_mode;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_mode::LayoutMode;
pub use layout_regions::{LayoutRegions, Region};
