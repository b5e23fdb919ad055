// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

/// What to do when a build simulation is started while one is already running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RestartPolicy {
    /// Cancel the running simulation and start over from zero
    #[default]
    Restart,
    /// Keep the running simulation and drop the new request
    Ignore,
}

/// Appearance configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub dark_mode: bool,
    /// Terminals wider than this get the sidebar layout
    #[serde(default = "default_wide_layout_min_width")]
    pub wide_layout_min_width: u16,
}

fn default_wide_layout_min_width() -> u16 {
    100
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            dark_mode: false,
            wide_layout_min_width: default_wide_layout_min_width(),
        }
    }
}

/// Notification configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Oldest toasts are evicted past this count, 0 disables the limit
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_max_visible() -> usize {
    5
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: default_duration_ms(),
            max_visible: default_max_visible(),
        }
    }
}

/// Build simulation configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_min_increment")]
    pub min_increment: f64,
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,
    #[serde(default = "default_completion_hold_ms")]
    pub completion_hold_ms: u64,
    #[serde(default)]
    pub restart_policy: RestartPolicy,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tick_ms() -> u64 {
    100
}

fn default_min_increment() -> f64 {
    0.02
}

fn default_max_increment() -> f64 {
    0.15
}

fn default_completion_hold_ms() -> u64 {
    500
}

impl ProgressConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn completion_hold(&self) -> Duration {
        Duration::from_millis(self.completion_hold_ms)
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        ProgressConfig {
            tick_ms: default_tick_ms(),
            min_increment: default_min_increment(),
            max_increment: default_max_increment(),
            completion_hold_ms: default_completion_hold_ms(),
            restart_policy: RestartPolicy::default(),
            seed: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl Config {
    /// Check the values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), String> {
        let progress = &self.progress;

        if !progress.min_increment.is_finite() || !progress.max_increment.is_finite() {
            return Err("progress increments must be finite numbers".to_string());
        }
        if progress.min_increment < 0.0 {
            return Err("progress.min_increment must not be negative".to_string());
        }
        if progress.max_increment <= 0.0 {
            return Err("progress.max_increment must be greater than zero".to_string());
        }
        if progress.min_increment > progress.max_increment {
            return Err(format!(
                "progress.min_increment ({}) is larger than progress.max_increment ({})",
                progress.min_increment, progress.max_increment
            ));
        }
        if progress.tick_ms == 0 {
            return Err("progress.tick_ms must be greater than zero".to_string());
        }
        if self.notifications.duration_ms == 0 {
            return Err("notifications.duration_ms must be greater than zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
