/// Clickable items in the header bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderItem {
    Logo,
    Title,
    ProBadge,
    Templates,
    Examples,
    Documentation,
    Support,
    ThemeToggle,
    Profile,
}

impl HeaderItem {
    /// Left-aligned group
    pub const BRAND: [HeaderItem; 3] = [HeaderItem::Logo, HeaderItem::Title, HeaderItem::ProBadge];

    /// Right-aligned group. The link row is dropped first when space runs out,
    /// then the profile button.
    pub const CONTROLS: [HeaderItem; 6] = [
        HeaderItem::Templates,
        HeaderItem::Examples,
        HeaderItem::Documentation,
        HeaderItem::Support,
        HeaderItem::ThemeToggle,
        HeaderItem::Profile,
    ];

    /// The toggle shows the current theme
    pub fn label(self, dark_mode: bool) -> &'static str {
        match self {
            HeaderItem::Logo => " ⚒ ",
            HeaderItem::Title => "AppForge",
            HeaderItem::ProBadge => " Pro ",
            HeaderItem::Templates => "Templates",
            HeaderItem::Examples => "Examples",
            HeaderItem::Documentation => "Documentation",
            HeaderItem::Support => "Support",
            HeaderItem::ThemeToggle if dark_mode => "☾ Dark",
            HeaderItem::ThemeToggle => "☀ Light",
            HeaderItem::Profile => " Profile ",
        }
    }
}
