/// A titled group of templates
#[derive(Debug, Clone, Copy)]
pub struct TemplateGroup {
    pub title: &'static str,
    pub templates: &'static [&'static str],
}

pub const TEMPLATE_GROUPS: &[TemplateGroup] = &[
    TemplateGroup {
        title: "Popular Templates",
        templates: &["Todo App", "Chat App", "E-commerce", "Blog Platform"],
    },
    TemplateGroup {
        title: "Business Apps",
        templates: &["CRM System", "Inventory Manager", "Analytics Dashboard"],
    },
    TemplateGroup {
        title: "Creative Apps",
        templates: &["Portfolio Site", "Photo Gallery", "Music Player"],
    },
];

/// Cursor over the flattened template list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    selected: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total() -> usize {
        TEMPLATE_GROUPS.iter().map(|g| g.templates.len()).sum()
    }

    /// Template title at a flattened index
    pub fn template_at(index: usize) -> Option<&'static str> {
        TEMPLATE_GROUPS
            .iter()
            .flat_map(|g| g.templates.iter().copied())
            .nth(index)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_template(&self) -> Option<&'static str> {
        Self::template_at(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if index < Self::total() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Self::total();
    }

    pub fn select_previous(&mut self) {
        let total = Self::total();
        self.selected = (self.selected + total - 1) % total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_templates() {
        assert_eq!(SidebarState::total(), 10);
        assert_eq!(SidebarState::template_at(0), Some("Todo App"));
        assert_eq!(SidebarState::template_at(4), Some("CRM System"));
        assert_eq!(SidebarState::template_at(9), Some("Music Player"));
        assert_eq!(SidebarState::template_at(10), None);
    }

    #[test]
    fn test_selection_wraps() {
        let mut sidebar = SidebarState::new();
        sidebar.select_previous();
        assert_eq!(sidebar.selected_template(), Some("Music Player"));
        sidebar.select_next();
        assert_eq!(sidebar.selected_template(), Some("Todo App"));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut sidebar = SidebarState::new();
        sidebar.select(3);
        sidebar.select(42);
        assert_eq!(sidebar.selected(), 3);
    }
}
