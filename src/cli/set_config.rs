//! The `set-config` verb

use crate::config::{ConfigManager, ScriptMode};
use crate::error::{PmError, PmResult};
use crate::registry::Registry;
use console::style;

/// Handle `set-config <key> <value>`: validate, then read-modify-write
/// the persisted user config.
pub async fn execute(args: &[String], registry: &Registry) -> PmResult<()> {
    let (key, value) = match args {
        [key, value] => (key.as_str(), value.as_str()),
        _ => {
            return Err(PmError::User(
                "Usage: omnipm set-config <key> <value>".to_string(),
            ))
        }
    };

    let manager = ConfigManager::new();
    let mut config = manager.load().await;

    match key {
        "default-package-manager" | "defaultPackageManager" => {
            validate_manager(value, registry)?;
            config.default_package_manager = Some(value.to_string());
        }
        "global-package-manager" | "globalPackageManager" => {
            validate_manager(value, registry)?;
            config.global_package_manager = Some(value.to_string());
        }
        "script-mode" | "scriptMode" => {
            config.script_mode =
                ScriptMode::parse(value).ok_or_else(|| PmError::InvalidConfigValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
        }
        _ => return Err(PmError::UnknownConfigKey(key.to_string())),
    }

    manager.save(&config).await?;
    println!("{} {} set to {}", style("✓").green(), key, value);
    Ok(())
}

fn validate_manager(name: &str, registry: &Registry) -> PmResult<()> {
    if registry.get(name).is_none() {
        return Err(PmError::UnknownManager(name.to_string()));
    }
    Ok(())
}
