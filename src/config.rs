use crate::types::TaskSpec;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the ordered task list from the config document.
///
/// `.yaml`/`.yml` goes through serde_yaml, everything else is JSON.
/// A missing or unparseable document is fatal for the whole run.
pub fn load_tasks(path: &Path) -> Result<Vec<TaskSpec>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let tasks: Vec<TaskSpec> = if ext == "yaml" || ext == "yml" {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parse config {}", path.display()))?
    } else {
        serde_json::from_str(&raw)
            .with_context(|| format!("parse config {}", path.display()))?
    };

    Ok(tasks)
}
