//! Configuration for the clone operation.
//!
//! Configuration can be loaded from:
//! - A TOML configuration file
//! - Environment variables (`REPOFETCH_*` prefix)
//!
//! There is no process-wide singleton: the loaded value is passed explicitly
//! into the operation that needs it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Credentials injected into repository URLs.
    #[serde(default)]
    pub github: GithubCredentials,

    /// Workspace confinement settings.
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

/// GitHub credentials for authenticated clones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubCredentials {
    /// Account username.
    #[serde(default)]
    pub username: String,

    /// API key or personal access token.
    #[serde(default)]
    pub api_key: String,
}

/// Workspace settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Root directory all clone destinations are confined to.
    #[serde(default = "default_workspace_root")]
    pub root: PathBuf,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: default_workspace_root(),
        }
    }
}

fn default_workspace_root() -> PathBuf {
    std::env::var("REPOFETCH_WORKSPACE_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
                PathBuf::from(xdg_data).join("repofetch").join("workspace")
            } else if let Ok(home) = std::env::var("HOME") {
                PathBuf::from(home).join(".local/share/repofetch/workspace")
            } else {
                PathBuf::from("/var/lib/repofetch/workspace")
            }
        })
}

impl Config {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables, starting from defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(username) = std::env::var("REPOFETCH_GITHUB_USERNAME") {
            config.github.username = username;
        }
        if let Ok(api_key) = std::env::var("REPOFETCH_GITHUB_API_KEY") {
            config.github.api_key = api_key;
        }
        if let Ok(root) = std::env::var("REPOFETCH_WORKSPACE_ROOT") {
            config.workspace.root = PathBuf::from(root);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.github.username.is_empty() {
            anyhow::bail!("github.username must not be empty");
        }
        if self.github.api_key.is_empty() {
            anyhow::bail!("github.api_key must not be empty");
        }
        if self.workspace.root.as_os_str().is_empty() {
            anyhow::bail!("workspace.root must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; tests that set or depend on
    // them take this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard {
        keys: Vec<&'static str>,
    }

    impl EnvGuard {
        fn set(pairs: &[(&'static str, &str)]) -> Self {
            for (key, value) in pairs {
                std::env::set_var(key, value);
            }
            Self {
                keys: pairs.iter().map(|(key, _)| *key).collect(),
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn parses_full_toml() {
        let config: Config = toml::from_str(
            r#"
            [github]
            username = "bot"
            api_key = "tok123"

            [workspace]
            root = "/srv/repofetch/workspace"
            "#,
        )
        .unwrap();

        assert_eq!(config.github.username, "bot");
        assert_eq!(config.github.api_key, "tok123");
        assert_eq!(config.workspace.root, PathBuf::from("/srv/repofetch/workspace"));
        config.validate().unwrap();
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        let config: Config = toml::from_str("").unwrap();

        assert!(config.github.username.is_empty());
        assert!(!config.workspace.root.as_os_str().is_empty());
    }

    #[test]
    fn from_env_overlays_variables() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        let _guard = EnvGuard::set(&[
            ("REPOFETCH_GITHUB_USERNAME", "bot"),
            ("REPOFETCH_GITHUB_API_KEY", "tok123"),
            ("REPOFETCH_WORKSPACE_ROOT", "/srv/repofetch/workspace"),
        ]);

        let config = Config::from_env().unwrap();
        assert_eq!(config.github.username, "bot");
        assert_eq!(config.github.api_key, "tok123");
        assert_eq!(
            config.workspace.root,
            PathBuf::from("/srv/repofetch/workspace")
        );
    }

    #[test]
    fn from_env_fails_without_credentials() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        std::env::remove_var("REPOFETCH_GITHUB_USERNAME");
        std::env::remove_var("REPOFETCH_GITHUB_API_KEY");
        let _guard = EnvGuard::set(&[("REPOFETCH_WORKSPACE_ROOT", "/srv/repofetch/workspace")]);

        assert!(Config::from_env().is_err());
    }

    #[test]
    fn validate_rejects_empty_credentials() {
        let config: Config = toml::from_str(
            r#"
            [github]
            username = "bot"
            api_key = ""
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn load_rejects_malformed_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn load_reads_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [github]
            username = "bot"
            api_key = "tok123"
            "#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.github.username, "bot");
    }
}
