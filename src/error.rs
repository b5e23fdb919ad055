use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppForgeError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
