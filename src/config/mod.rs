//! User configuration management
//!
//! One JSON document per user, read-modify-written by `set-config`.
//! Environment variables override persisted values; a malformed file is
//! treated as absent so a corrupted config never blocks execution.

pub mod schema;

pub use schema::{ScriptMode, UserConfig};

use crate::error::{PmError, PmResult};
use crate::registry::{ManagerProfile, Registry};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Overrides the default manager when set to a registered name
pub const DEFAULT_PM_ENV: &str = "OMNIPM_DEFAULT_PM";

/// Overrides the global manager when set to a registered name
pub const GLOBAL_PM_ENV: &str = "OMNIPM_GLOBAL_PM";

/// Statically assumed manager when nothing else resolves
const FALLBACK_MANAGER: &str = "npm";

/// Loads and saves the per-user config file
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// `<user config dir>/omnipm/config.json`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("omnipm")
            .join("config.json")
    }

    /// Load the config, falling back to defaults when the file is
    /// missing or unparsable.
    pub async fn load(&self) -> UserConfig {
        let raw = match fs::read_to_string(&self.config_path).await {
            Ok(raw) => raw,
            Err(_) => {
                debug!("config file not found, using defaults");
                return UserConfig::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                debug!("malformed config at {}: {e}", self.config_path.display());
                UserConfig::default()
            }
        }
    }

    /// Persist the config, creating the parent directory as needed
    pub async fn save(&self, config: &UserConfig) -> PmResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PmError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, raw).await.map_err(|e| {
            PmError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("configuration saved to {}", self.config_path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the default manager: env override, then persisted config,
/// then npm. Unregistered names at any layer fall through.
pub fn default_manager<'r>(config: &UserConfig, registry: &'r Registry) -> &'r ManagerProfile {
    resolve_manager(
        env::var(DEFAULT_PM_ENV).ok(),
        config.default_package_manager.as_deref(),
        registry,
    )
}

/// Resolve the global-operations manager: env override, then persisted
/// config, then the default chain.
pub fn global_manager<'r>(config: &UserConfig, registry: &'r Registry) -> &'r ManagerProfile {
    if let Some(profile) = env::var(GLOBAL_PM_ENV)
        .ok()
        .and_then(|name| registry.get(&name))
    {
        return profile;
    }
    if let Some(profile) = config
        .global_package_manager
        .as_deref()
        .and_then(|name| registry.get(name))
    {
        return profile;
    }
    default_manager(config, registry)
}

fn resolve_manager<'r>(
    env_value: Option<String>,
    configured: Option<&str>,
    registry: &'r Registry,
) -> &'r ManagerProfile {
    if let Some(profile) = env_value.and_then(|name| registry.get(&name)) {
        return profile;
    }
    if let Some(profile) = configured.and_then(|name| registry.get(name)) {
        return profile;
    }
    registry
        .get(FALLBACK_MANAGER)
        .expect("fallback manager is always registered")
}
