//! Configuration file discovery, loading, and resolution.
//!
//! Settings are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file (`~/.mindfit/config.yml`, or the `--config` path)
//! 3. Environment variables (`MINDFIT_DATA_DIR`, `MINDFIT_SESSION`, `MINDFIT_BASE_URL`)
//! 4. Command-line flags

use crate::config::schema::MindFitConfig;
use crate::error::{MindFitError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "MINDFIT_DATA_DIR";
/// Overrides the session name.
pub const SESSION_ENV: &str = "MINDFIT_SESSION";
/// Overrides the practice page URL prefix.
pub const BASE_URL_ENV: &str = "MINDFIT_BASE_URL";

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub session: Option<String>,
    pub no_durable: bool,
}

/// Fully resolved settings with concrete paths.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: MindFitConfig,
    /// Config file that was read, if any.
    pub config_path: Option<PathBuf>,
    /// Durable store directory.
    pub data_dir: PathBuf,
    /// Ephemeral store directory for the active session.
    pub session_dir: PathBuf,
}

/// User's global config: `~/.mindfit/config.yml`
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".mindfit").join("config.yml"))
}

/// Default durable store location.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("mindfit"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".mindfit").join("data")))
        .unwrap_or_else(|| PathBuf::from(".mindfit"))
}

/// Ephemeral store location for a session name.
pub fn session_dir(session: &str) -> PathBuf {
    std::env::temp_dir()
        .join("mindfit-sessions")
        .join(sanitize_session(session))
}

fn sanitize_session(session: &str) -> String {
    let cleaned: String = session
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "default".to_string()
    } else {
        cleaned
    }
}

/// Parse YAML content into a config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<MindFitConfig> {
    if content.trim().is_empty() {
        return Ok(MindFitConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| MindFitError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file.
///
/// # Errors
///
/// Returns `Io` if the file can't be read.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<MindFitConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load the config file, falling back to defaults.
///
/// An explicit path must exist. The default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<(MindFitConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        return Ok((load_config_file(path)?, Some(path.to_path_buf())));
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Loading config from {}", path.display());
            Ok((load_config_file(&path)?, Some(path)))
        }
        _ => Ok((MindFitConfig::default(), None)),
    }
}

/// Apply `MINDFIT_*` environment overrides.
pub fn apply_env(config: &mut MindFitConfig, env: &HashMap<String, String>) {
    let non_empty = |key: &str| env.get(key).filter(|v| !v.is_empty()).cloned();

    if let Some(dir) = non_empty(DATA_DIR_ENV) {
        config.data_dir = Some(PathBuf::from(dir));
    }
    if let Some(session) = non_empty(SESSION_ENV) {
        config.session = session;
    }
    if let Some(base_url) = non_empty(BASE_URL_ENV) {
        config.base_url = Some(base_url);
    }
}

/// Snapshot of the process environment.
pub fn load_system_env() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Resolve a config from the file, the environment, and command-line overrides.
pub fn resolve(
    overrides: &ConfigOverrides,
    env: &HashMap<String, String>,
) -> Result<ResolvedConfig> {
    let (mut config, config_path) = load_config(overrides.config_path.as_deref())?;
    apply_env(&mut config, env);

    if let Some(dir) = &overrides.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(session) = &overrides.session {
        config.session = session.clone();
    }
    if overrides.no_durable {
        config.durable = false;
    }

    let data_dir = config.data_dir.clone().unwrap_or_else(default_data_dir);
    let session_dir = session_dir(&config.session);

    Ok(ResolvedConfig {
        config,
        config_path,
        data_dir,
        session_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn write_config(temp: &TempDir, content: &str) -> PathBuf {
        let path = temp.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parse_config_reports_path_on_error() {
        let err = parse_config("session: [", Path::new("/x/config.yml")).unwrap_err();
        match err {
            MindFitError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("/x/config.yml"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("  \n", Path::new("c.yml")).unwrap();
        assert_eq!(config, MindFitConfig::default());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config(Some(temp.path().join("missing.yml").as_path()));
        assert!(matches!(result, Err(MindFitError::Io(_))));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "session: morning\n");

        let (config, used) = load_config(Some(path.as_path())).unwrap();

        assert_eq!(config.session, "morning");
        assert_eq!(used, Some(path));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = MindFitConfig {
            session: "file".to_string(),
            ..Default::default()
        };

        apply_env(
            &mut config,
            &env(&[
                (DATA_DIR_ENV, "/tmp/mf"),
                (SESSION_ENV, "env"),
                (BASE_URL_ENV, "https://mindfit.example"),
            ]),
        );

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/mf")));
        assert_eq!(config.session, "env");
        assert_eq!(config.base_url.as_deref(), Some("https://mindfit.example"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = MindFitConfig::default();
        apply_env(&mut config, &env(&[(SESSION_ENV, "")]));
        assert_eq!(config.session, "default");
    }

    #[test]
    fn flags_override_env_and_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "session: file\ndata_dir: /from/file\n");
        let overrides = ConfigOverrides {
            config_path: Some(path),
            data_dir: Some(temp.path().join("flag")),
            session: Some("flag".to_string()),
            no_durable: true,
        };

        let resolved = resolve(&overrides, &env(&[(SESSION_ENV, "env")])).unwrap();

        assert_eq!(resolved.data_dir, temp.path().join("flag"));
        assert_eq!(resolved.config.session, "flag");
        assert!(!resolved.config.durable);
        assert!(resolved.session_dir.ends_with("flag"));
    }

    #[test]
    fn session_dir_sanitizes_name() {
        let dir = session_dir("../evil name");
        assert!(dir.ends_with("___evil_name"));
        assert!(dir.starts_with(std::env::temp_dir()));
    }

    #[test]
    fn empty_session_name_maps_to_default() {
        assert!(session_dir("").ends_with("default"));
    }
}
