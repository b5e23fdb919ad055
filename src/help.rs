//! Context-sensitive key hints for the bottom line

pub mod help_line_render;
