//! Application service — asset sync use-case.
//!
//! Download the archive into the deployment directory, unpack it in place,
//! then delete the archive. No checksum, no rollback: a partial extraction
//! is left on disk if anything fails.

use anyhow::{Context, Result};

use crate::application::ports::{ArchiveExtractor, Downloader, LocalFs};
use crate::domain::DeployConfig;

/// Refresh the static assets under `config.deploy_dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the download fails,
/// the archive is malformed, or the archive cannot be removed.
pub async fn sync_assets(
    fs: &impl LocalFs,
    downloader: &impl Downloader,
    extractor: &impl ArchiveExtractor,
    config: &DeployConfig,
) -> Result<bool> {
    let deploy_dir = &config.deploy_dir;
    fs.create_dir_all(deploy_dir)?;

    let archive = config.archive_path()?;
    let bytes = downloader
        .download(&config.archive_url, &archive)
        .await
        .with_context(|| format!("downloading {}", config.archive_url))?;
    tracing::info!(bytes, archive = %archive.display(), "archive downloaded");

    let entries = extractor
        .extract(&archive, deploy_dir)
        .await
        .with_context(|| format!("extracting {}", archive.display()))?;
    tracing::info!(entries, dir = %deploy_dir.display(), "archive extracted");

    fs.remove_file(&archive)?;
    Ok(true)
}
