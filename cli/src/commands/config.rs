//! `redeploy config` — print the effective configuration as YAML.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::domain::ExitCode;

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the config file path cannot be determined.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let config = &app.config;
    let path = app.config_store.path()?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    app.output.settings(
        &source,
        &[
            ("archive_url", config.archive_url.clone()),
            ("deploy_dir", config.deploy_dir.display().to_string()),
            ("compose_exe", config.compose_exe.display().to_string()),
            ("compose_file", config.compose_file.clone()),
            ("work_dir", config.work_dir.display().to_string()),
            ("health_url", config.health_url.clone()),
            ("health_timeout_secs", config.health_timeout_secs.to_string()),
        ],
    );
    Ok(ExitCode::Success)
}
