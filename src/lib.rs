//! appforge library - AppForge terminal mockup
//!
//! This library exposes the core functionality of appforge for testing purposes.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod footer;
pub mod form;
pub mod header;
pub mod help;
pub mod home;
pub mod layout;
pub mod navigation;
pub mod notification;
pub mod progress;
pub mod random;
pub mod scheduler;
pub mod settings;
pub mod sidebar;
pub mod stats;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, AppTask};
pub use config::Config;
