use crate::types::SelectedFile;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use zip::{CompressionMethod, ZipWriter, write::FileOptions};

/// `yyyyMMdd_HHmmss` from the moment of archive creation.
fn timestamp_token(now: OffsetDateTime) -> String {
    let m: u8 = now.month() as u8;
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        now.year(),
        m,
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// `{timestamp}_{discriminator}{marker}.zip`; a non-blank marker is appended
/// verbatim, with no separator. Blank marker == no marker.
fn archive_name(discriminator: &str, marker: &str, now: OffsetDateTime) -> String {
    let ts = timestamp_token(now);
    if marker.trim().is_empty() {
        format!("{ts}_{discriminator}.zip")
    } else {
        format!("{ts}_{discriminator}{marker}.zip")
    }
}

/// Destination for a bundle archive: discriminator is the matched-file count.
pub fn bundle_archive_path(
    dest_dir: &Path,
    file_count: usize,
    marker: &str,
    now: OffsetDateTime,
) -> PathBuf {
    dest_dir.join(archive_name(&file_count.to_string(), marker, now))
}

/// Destination for a single-file archive: discriminator is the source name.
pub fn single_archive_path(
    dest_dir: &Path,
    file_name: &str,
    marker: &str,
    now: OffsetDateTime,
) -> PathBuf {
    dest_dir.join(archive_name(file_name, marker, now))
}

/// Zip one file into `dest`.
pub fn compress_one(file: &SelectedFile, dest: &Path) -> Result<()> {
    compress_set(std::slice::from_ref(file), dest)
}

/// Zip the whole matched set into `dest` in one archive.
pub fn compress_many(files: &[SelectedFile], dest: &Path) -> Result<()> {
    compress_set(files, dest)
}

fn compress_set(files: &[SelectedFile], dest: &Path) -> Result<()> {
    let out =
        File::create(dest).with_context(|| format!("create archive {}", dest.display()))?;
    let mut zip = ZipWriter::new(out);

    // throughput over ratio: deflate at the lowest effort
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(1));

    for file in files {
        let mut src =
            File::open(&file.path).with_context(|| format!("open {}", file.path.display()))?;
        zip.start_file(file.name.as_str(), options)
            .with_context(|| format!("start entry {} in {}", file.name, dest.display()))?;
        std::io::copy(&mut src, &mut zip)
            .with_context(|| format!("compress {}", file.path.display()))?;
    }

    zip.finish()
        .with_context(|| format!("finish archive {}", dest.display()))?;

    // a codec that reported success without producing the file still failed
    if !dest.exists() {
        bail!("archive missing after compression: {}", dest.display());
    }

    Ok(())
}
