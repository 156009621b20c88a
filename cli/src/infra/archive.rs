//! Archive infrastructure — implements `ArchiveExtractor` with `tar` + `flate2`.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

use crate::application::ports::ArchiveExtractor;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Extracts `.tar.gz` (or plain `.tar`) archives.
pub struct TarArchive;

/// Unpack every entry of `archive` under `dest`.
///
/// Compression is detected from the gzip magic bytes rather than the file
/// name. Entries that would escape `dest` are skipped by `tar` and not
/// counted.
///
/// # Errors
///
/// Returns an error if the archive is empty, malformed, or an entry cannot be
/// written.
pub fn extract_tar(archive: &Path, dest: &Path) -> Result<u64> {
    let mut file =
        File::open(archive).with_context(|| format!("opening {}", archive.display()))?;
    let len = file.metadata().map(|m| m.len()).unwrap_or(0);
    anyhow::ensure!(len > 0, "archive {} is empty", archive.display());

    let mut magic = [0u8; 2];
    let read = file.read(&mut magic).context("reading archive header")?;
    file.seek(SeekFrom::Start(0)).context("rewinding archive")?;

    let reader: Box<dyn Read> = if read == magic.len() && magic == GZIP_MAGIC {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut tar = tar::Archive::new(reader);
    let mut unpacked = 0;
    for entry in tar.entries().context("reading archive entries")? {
        let mut entry = entry.context("malformed archive entry")?;
        if entry
            .unpack_in(dest)
            .with_context(|| format!("unpacking into {}", dest.display()))?
        {
            unpacked += 1;
        }
    }
    Ok(unpacked)
}

impl ArchiveExtractor for TarArchive {
    async fn extract(&self, archive: &Path, dest: &Path) -> Result<u64> {
        let archive: PathBuf = archive.to_path_buf();
        let dest: PathBuf = dest.to_path_buf();
        tokio::task::spawn_blocking(move || extract_tar(&archive, &dest))
            .await
            .context("spawn_blocking for extract")?
    }
}
