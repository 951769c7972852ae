//! User configuration schema
//!
//! Persisted as JSON at `<config dir>/omnipm/config.json`.

use serde::{Deserialize, Serialize};

/// Persisted per-user settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserConfig {
    /// Manager used when detection finds no signal
    pub default_package_manager: Option<String>,

    /// Manager used for `-g`/`--global` operations
    pub global_package_manager: Option<String>,

    /// How script names are resolved against manager built-ins
    pub script_mode: ScriptMode,
}

/// Script resolution mode for managers whose built-ins overlap with
/// script names (bun in particular).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptMode {
    /// Prefer a manifest script when one exists
    #[default]
    Auto,
    /// Always resolve to the manifest script
    Script,
    /// Always resolve to the manager built-in
    Builtin,
}

impl ScriptMode {
    /// Parse a user-supplied mode name
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Self::Auto),
            "script" => Some(Self::Script),
            "builtin" => Some(Self::Builtin),
            _ => None,
        }
    }
}
