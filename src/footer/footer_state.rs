pub const RESOURCE_LINKS: [&str; 4] = ["Documentation", "Tutorials", "Examples", "API Reference"];
pub const SUPPORT_LINKS: [&str; 4] = ["Help Center", "Community", "Contact Us", "Bug Reports"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    Twitter,
    GitHub,
    Discord,
    LinkedIn,
}

impl SocialLink {
    pub const ALL: [SocialLink; 4] = [
        SocialLink::Twitter,
        SocialLink::GitHub,
        SocialLink::Discord,
        SocialLink::LinkedIn,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SocialLink::Twitter => "Twitter",
            SocialLink::GitHub => "GitHub",
            SocialLink::Discord => "Discord",
            SocialLink::LinkedIn => "LinkedIn",
        }
    }
}

/// Clickable footer entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterItem {
    Social(SocialLink),
    /// Entry of the Resources or Support column
    Link(&'static str),
    Copyright,
}
