use ratatui::style::Style;
use thiserror::Error;
use tui_textarea::{Input, Key, TextArea};

use crate::notification::Severity;
use crate::theme;

/// App category offered by the category picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Web,
    Mobile,
    Desktop,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Web, Category::Mobile, Category::Desktop];

    /// Menu entry text
    pub fn menu_label(self) -> &'static str {
        match self {
            Category::Web => "Web App",
            Category::Mobile => "Mobile App",
            Category::Desktop => "Desktop App",
        }
    }

    /// Text shown in the picker once selected
    pub fn display(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Desktop => "Desktop",
        }
    }

    fn index(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter an app name!")]
    MissingName,

    #[error("Please select a category!")]
    MissingCategory,
}

impl ValidationError {
    pub fn severity(self) -> Severity {
        match self {
            ValidationError::MissingName => Severity::Error,
            ValidationError::MissingCategory => Severity::Warning,
        }
    }
}

/// Form contents that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub name: String,
    pub category: Category,
}

pub struct FormState {
    pub name: TextArea<'static>,
    pub category: Option<Category>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: Self::empty_name_field(),
            category: None,
        }
    }

    fn empty_name_field() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::form::CURSOR);
        textarea.set_placeholder_text("App Name");
        textarea.set_placeholder_style(theme::form::PLACEHOLDER);
        textarea
    }

    pub fn name(&self) -> &str {
        self.name.lines()[0].as_ref()
    }

    /// Replace the name field contents. Line breaks are dropped.
    pub fn set_name(&mut self, name: &str) {
        self.name = Self::empty_name_field();
        self.name.insert_str(name.replace(['\r', '\n'], ""));
    }

    /// Feed one key to the name field, keeping it to a single line.
    ///
    /// Returns true if the text changed.
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        let input = input.into();
        if is_line_break(&input) {
            return false;
        }
        self.name.input(input)
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Step forward through the categories, wrapping; unset starts at the first
    pub fn next_category(&mut self) {
        self.category = Some(match self.category {
            None => Category::ALL[0],
            Some(c) => Category::ALL[(c.index() + 1) % Category::ALL.len()],
        });
    }

    /// Step backward through the categories, wrapping; unset starts at the last
    pub fn previous_category(&mut self) {
        let len = Category::ALL.len();
        self.category = Some(match self.category {
            None => Category::ALL[len - 1],
            Some(c) => Category::ALL[(c.index() + len - 1) % len],
        });
    }

    pub fn category_label(&self) -> &'static str {
        self.category.map_or("Select Category", Category::display)
    }

    pub fn clear(&mut self) {
        self.name = Self::empty_name_field();
        self.category = None;
    }

    /// Name must have a non-whitespace character, then a category must be set.
    pub fn validate(&self) -> Result<ValidatedForm, ValidationError> {
        let name = self.name().trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let category = self.category.ok_or(ValidationError::MissingCategory)?;

        Ok(ValidatedForm {
            name: name.to_string(),
            category,
        })
    }
}

/// Inputs the text area would turn into a new line
fn is_line_break(input: &Input) -> bool {
    matches!(
        input,
        Input { key: Key::Enter, .. }
            | Input {
                key: Key::Char('\n' | '\r'),
                ..
            }
            | Input {
                key: Key::Char('m'),
                ctrl: true,
                ..
            }
    )
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
