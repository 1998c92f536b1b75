//! Session configuration.
//!
//! One TOML file per session; every field has a default so a missing
//! or sparse file still yields a usable configuration. Trust seeding
//! (`trusted_directories` / `untrusted_directories`) is a frontend
//! convenience: the admission runtime itself only sees the resulting
//! trust store.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading the session configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// The file that could not be parsed.
        path: String,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Per-session configuration for the admission frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether per-path trust enforcement is active.
    pub folder_trust_enabled: bool,
    /// The workspace's own trust status; `None` means undetermined at
    /// startup (the frontend asks interactively).
    pub workspace_trusted: Option<bool>,
    /// Whether the execution sandbox forbids runtime directory adds.
    pub restrictive_sandbox: bool,
    /// Reload hierarchical memory when include-directories change.
    pub load_memory_from_include_dirs: bool,
    /// Directories queued for admission once workspace trust resolves.
    pub include_directories: Vec<String>,
    /// Import format for nested context files.
    pub import_format: String,
    /// Cap on directories scanned during memory discovery.
    pub discovery_max_dirs: Option<usize>,
    /// Debug diagnostics flag forwarded to the memory loader.
    pub debug: bool,
    /// Paths seeded as trusted in the session trust store.
    pub trusted_directories: Vec<String>,
    /// Paths seeded as untrusted in the session trust store.
    pub untrusted_directories: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            folder_trust_enabled: true,
            workspace_trusted: None,
            restrictive_sandbox: false,
            load_memory_from_include_dirs: true,
            include_directories: Vec::new(),
            import_format: "tree".to_owned(),
            discovery_max_dirs: None,
            debug: false,
            trusted_directories: Vec::new(),
            untrusted_directories: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Load the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: SessionConfig = toml::from_str("").unwrap();
        assert!(config.folder_trust_enabled);
        assert_eq!(config.workspace_trusted, None);
        assert!(!config.restrictive_sandbox);
        assert_eq!(config.import_format, "tree");
    }

    #[test]
    fn fields_parse_from_toml() {
        let config: SessionConfig = toml::from_str(
            r#"
            folder_trust_enabled = false
            workspace_trusted = true
            restrictive_sandbox = true
            include_directories = ["~/notes", "/srv/data"]
            trusted_directories = ["/srv/data"]
            discovery_max_dirs = 20
            "#,
        )
        .unwrap();

        assert!(!config.folder_trust_enabled);
        assert_eq!(config.workspace_trusted, Some(true));
        assert!(config.restrictive_sandbox);
        assert_eq!(config.include_directories, vec![
            "~/notes".to_owned(),
            "/srv/data".to_owned()
        ]);
        assert_eq!(config.discovery_max_dirs, Some(20));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SessionConfig::load(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
