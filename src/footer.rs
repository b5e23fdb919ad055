//! Footer of the wide layout: company blurb, social buttons, link columns
//! and the copyright line

mod footer_render;
mod footer_state;

pub use footer_render::{FOOTER_HEIGHT, render_footer};
pub use footer_state::{FooterItem, RESOURCE_LINKS, SUPPORT_LINKS, SocialLink};
