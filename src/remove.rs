use crate::types::SelectedFile;
use anyhow::{Context, Result};
use std::path::Path;

/// Permanently delete one file. No trash semantics.
pub fn remove_one(path: &Path) -> Result<()> {
    std::fs::remove_file(path).with_context(|| format!("remove {}", path.display()))
}

/// Delete the whole set, one file at a time, stopping at the first failure.
///
/// Not transactional: files deleted before the failing one stay deleted, and
/// the overall call still reports failure.
pub fn remove_many(files: &[SelectedFile]) -> Result<()> {
    for file in files {
        remove_one(&file.path)?;
    }
    Ok(())
}
