//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::{ConfigOverrides, DeployConfig};

/// Load the config file, layer command-line overrides on top and validate
/// the result.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the effective
/// configuration is invalid.
pub fn load_config(store: &impl ConfigStore, overrides: ConfigOverrides) -> Result<DeployConfig> {
    let mut config = store.load()?;
    overrides.apply(&mut config);
    config.validate()?;
    tracing::debug!(?config, "effective configuration");
    Ok(config)
}
