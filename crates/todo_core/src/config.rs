//! Runtime and UI text configuration.
//!
//! # Responsibility
//! - Hold the texts the binding uses for new tasks and notifications.
//! - Resolve logging settings from the process environment for hosts that
//!   do not pass them explicitly.
//!
//! # Invariants
//! - A validated `BindingConfig` never carries empty texts.

use crate::collab::notifier::NotificationChannel;
use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "TODO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TODO_LOG_DIR";

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyText(&'static str),
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText(field) => write!(f, "config field `{field}` cannot be empty"),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR} must be an absolute path, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Notification titles per task change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTitles {
    pub added: String,
    pub edited: String,
    pub deleted: String,
}

impl Default for NotificationTitles {
    fn default() -> Self {
        Self {
            added: "Dodano zadanie".to_string(),
            edited: "Edytowano zadanie".to_string(),
            deleted: "Usunięto zadanie".to_string(),
        }
    }
}

/// Texts and channel used by `ViewBinding`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    pub new_task_title: String,
    pub new_task_description: String,
    pub notification_titles: NotificationTitles,
    pub channel: NotificationChannel,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            new_task_title: "Nowe Zadanie".to_string(),
            new_task_description: "Opis nowego zadania".to_string(),
            notification_titles: NotificationTitles::default(),
            channel: NotificationChannel::default(),
        }
    }
}

impl BindingConfig {
    /// Rejects blank texts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("new_task_title", &self.new_task_title),
            ("new_task_description", &self.new_task_description),
            ("notification_titles.added", &self.notification_titles.added),
            ("notification_titles.edited", &self.notification_titles.edited),
            ("notification_titles.deleted", &self.notification_titles.deleted),
            ("channel.id", &self.channel.id),
            ("channel.name", &self.channel.name),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyText(name));
            }
        }
        Ok(())
    }
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub log_level: String,
    /// File logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Reads `TODO_LOG_LEVEL` and `TODO_LOG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(ENV_LOG_LEVEL).ok(),
            std::env::var(ENV_LOG_DIR).ok(),
        )
    }

    fn from_values(level: Option<String>, dir: Option<String>) -> Result<Self, ConfigError> {
        let log_level = level
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        let log_dir = match dir.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                let path = PathBuf::from(value);
                if !path.is_absolute() {
                    return Err(ConfigError::RelativeLogDir(value.to_string()));
                }
                Some(path)
            }
        };

        Ok(Self { log_level, log_dir })
    }
}
