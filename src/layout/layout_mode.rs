#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Sidebar next to the main content
    #[default]
    Wide,
    /// One screen at a time with a bottom tab bar
    Narrow,
}

impl LayoutMode {
    /// Wide only when the terminal is strictly wider than `threshold`
    pub fn for_width(width: u16, threshold: u16) -> Self {
        if width > threshold {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }
}
