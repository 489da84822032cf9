use crate::types::SelectedFile;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use time::{Duration, OffsetDateTime, Time, UtcOffset};
use walkdir::WalkDir;

/// Wall clock in the process's local offset, falling back to UTC when the
/// offset cannot be determined.
pub fn local_now() -> OffsetDateTime {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset)
}

/// Age cutoff for a task: today at 00:00:00 advanced by `(1 - days)` days.
///
/// `days = 0` keeps everything up to and including now eligible (cutoff is
/// the start of tomorrow); `days = 1` means strictly before today.
pub fn cutoff_for(days: i64, now: OffsetDateTime) -> OffsetDateTime {
    now.replace_time(Time::MIDNIGHT) + Duration::days(1 - days)
}

/// Compile a name filter (`*` = any run, `?` = one character) into an
/// anchored, case-insensitive regex. The validator has already restricted
/// the charset, so everything except the wildcards is matched literally.
pub fn filter_regex(filter: &str) -> Result<Regex> {
    let mut pattern = String::with_capacity(filter.len() + 8);
    pattern.push_str("(?i)^");
    for ch in filter.chars() {
        match ch {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            ch => pattern.push_str(&regex::escape(&ch.to_string())),
        }
    }
    pattern.push('$');

    Regex::new(&pattern).with_context(|| format!("compile filter {filter:?}"))
}

/// List the direct entries of `dir` whose name matches `filter` and whose
/// mtime is strictly below `cutoff`. Directories never qualify; an empty
/// result is a valid outcome, not an error. Results come back sorted by name.
pub fn select_files(dir: &Path, filter: &str, cutoff: OffsetDateTime) -> Result<Vec<SelectedFile>> {
    let re = filter_regex(filter)?;
    let mut out = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("read_dir {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !re.is_match(&name) {
            continue;
        }

        let meta = entry
            .metadata()
            .with_context(|| format!("metadata {}", entry.path().display()))?;
        let modified = OffsetDateTime::from(
            meta.modified()
                .with_context(|| format!("mtime {}", entry.path().display()))?,
        );
        if modified < cutoff {
            out.push(SelectedFile {
                name,
                path: entry.path().to_path_buf(),
                modified,
            });
        }
    }

    out.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(out)
}
