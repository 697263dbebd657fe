//! Configuration schema definitions for MindFit.
//!
//! This module contains the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `config.yml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindFitConfig {
    /// Directory for the durable store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Session name; each session keeps its own ephemeral store
    pub session: String,

    /// Prefix for practice page URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Use the durable store. When false, data lives only in the session.
    #[serde(skip_serializing_if = "is_true")]
    pub durable: bool,

    /// Navigation behavior
    pub navigation: NavigationSettings,
}

impl Default for MindFitConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            session: default_session(),
            base_url: None,
            durable: true,
            navigation: NavigationSettings::default(),
        }
    }
}

/// Navigation and readiness settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Pause before opening a practice page, in milliseconds
    pub launch_delay_ms: u64,

    /// Warn on quick start once today's minutes exceed this
    pub daily_limit_minutes: f64,

    /// Warn on quick start this soon after the last practice
    pub cooldown_minutes: i64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            launch_delay_ms: 300,
            daily_limit_minutes: 30.0,
            cooldown_minutes: 5,
        }
    }
}

fn default_session() -> String {
    "default".to_string()
}

fn is_true(v: &bool) -> bool {
    *v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: MindFitConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, MindFitConfig::default());
        assert_eq!(config.session, "default");
        assert!(config.durable);
        assert_eq!(config.navigation.launch_delay_ms, 300);
    }

    #[test]
    fn parses_all_fields() {
        let yaml = r#"
data_dir: /var/lib/mindfit
session: evening
base_url: https://mindfit.example
durable: false
navigation:
  launch_delay_ms: 0
  daily_limit_minutes: 45
  cooldown_minutes: 10
"#;
        let config: MindFitConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/mindfit")));
        assert_eq!(config.session, "evening");
        assert_eq!(config.base_url.as_deref(), Some("https://mindfit.example"));
        assert!(!config.durable);
        assert_eq!(config.navigation.launch_delay_ms, 0);
        assert_eq!(config.navigation.daily_limit_minutes, 45.0);
        assert_eq!(config.navigation.cooldown_minutes, 10);
    }

    #[test]
    fn partial_navigation_keeps_other_defaults() {
        let config: MindFitConfig =
            serde_yaml::from_str("navigation:\n  cooldown_minutes: 1\n").unwrap();
        assert_eq!(config.navigation.cooldown_minutes, 1);
        assert_eq!(config.navigation.daily_limit_minutes, 30.0);
    }

    #[test]
    fn serialization_omits_defaults() {
        let yaml = serde_yaml::to_string(&MindFitConfig::default()).unwrap();
        assert!(!yaml.contains("durable"));
        assert!(!yaml.contains("data_dir"));
        assert!(yaml.contains("session: default"));
    }
}
