//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::planner::get_app_dir;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Override for the task file location (supports a leading `~/`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<String>,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub unlock: UnlockConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockConfig {
    /// URL opened after the authentication dialog, whatever the outcome
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,

    /// Sound played on successful authentication (name in the sounds dir)
    #[serde(default = "default_success_sound")]
    pub success_sound: String,

    /// Sound played on failed authentication
    #[serde(default = "default_failure_sound")]
    pub failure_sound: String,
}

impl Default for UnlockConfig {
    fn default() -> Self {
        Self {
            redirect_url: default_redirect_url(),
            success_sound: default_success_sound(),
            failure_sound: default_failure_sound(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_redirect_url() -> String {
    "https://youtu.be/dQw4w9WgXcQ".to_string()
}

fn default_success_sound() -> String {
    "mission-complete".to_string()
}

fn default_failure_sound() -> String {
    "drumbeat".to_string()
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The configured task file, with `~/` expanded
    pub fn tasks_file_path(&self) -> Option<PathBuf> {
        let raw = self.tasks_file.as_ref()?;
        if let Some(stripped) = raw.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Some(home.join(stripped));
            }
        }
        Some(PathBuf::from(raw))
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.tasks_file.is_none());
        assert!(config.notifications.enabled);
        assert_eq!(config.unlock.redirect_url, default_redirect_url());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            tasks_file = "~/planner/tasks.json"

            [notifications]
            enabled = false

            [unlock]
            redirect_url = "https://example.com"
            success_sound = "fanfare"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tasks_file.as_deref(), Some("~/planner/tasks.json"));
        assert!(!config.notifications.enabled);
        assert_eq!(config.unlock.redirect_url, "https://example.com");
        assert_eq!(config.unlock.success_sound, "fanfare");
        // non-overridden fields stay default
        assert_eq!(config.unlock.failure_sound, default_failure_sound());
    }

    #[test]
    fn test_tasks_file_path_expands_tilde() {
        let config = Config {
            tasks_file: Some("~/planner/tasks.json".to_string()),
            ..Default::default()
        };
        let path = config.tasks_file_path().unwrap();
        assert!(path.ends_with("planner/tasks.json"));
        assert!(!path.starts_with("~"));
    }

    #[test]
    fn test_tasks_file_path_absolute() {
        let config = Config {
            tasks_file: Some("/tmp/tasks.json".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.tasks_file_path(),
            Some(PathBuf::from("/tmp/tasks.json"))
        );
    }

    #[test]
    fn test_tasks_file_path_none() {
        assert_eq!(Config::default().tasks_file_path(), None);
    }
}
