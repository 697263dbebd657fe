//! Configuration loading for MindFit.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, environment overrides, and path resolution in [`loader`]
//!
//! # Example
//!
//! ```
//! use mindfit::config::{resolve, ConfigOverrides};
//! use std::collections::HashMap;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "session: evening\n").unwrap();
//!
//! let overrides = ConfigOverrides {
//!     config_path: Some(path),
//!     ..Default::default()
//! };
//! let resolved = resolve(&overrides, &HashMap::new()).unwrap();
//! assert_eq!(resolved.config.session, "evening");
//! ```
//!
//! # Configuration File Location
//!
//! The user config lives at `~/.mindfit/config.yml`; `--config` points
//! elsewhere.

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env, default_config_path, default_data_dir, load_config, load_config_file,
    load_system_env, parse_config, resolve, session_dir, ConfigOverrides, ResolvedConfig,
    BASE_URL_ENV, DATA_DIR_ENV, SESSION_ENV,
};
pub use schema::{MindFitConfig, NavigationSettings};
