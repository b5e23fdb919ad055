#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickStartCard {
    GettingStarted,
    Features,
    Community,
}

impl QuickStartCard {
    pub const ALL: [QuickStartCard; 3] = [
        QuickStartCard::GettingStarted,
        QuickStartCard::Features,
        QuickStartCard::Community,
    ];

    pub fn title(self) -> &'static str {
        match self {
            QuickStartCard::GettingStarted => "▶ Getting Started",
            QuickStartCard::Features => "★ Features",
            QuickStartCard::Community => "☺ Community",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            QuickStartCard::GettingStarted => "Quick tutorial to begin",
            QuickStartCard::Features => "Powerful capabilities",
            QuickStartCard::Community => "Connect with others",
        }
    }
}
