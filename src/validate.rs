use crate::types::TaskSpec;
use anyhow::{Context, Result, bail};
use regex::Regex;
use std::path::Path;

/// Check one task's declared parameters before anything touches the disk.
///
/// All rules must pass; the first failure aborts the whole run, so the
/// messages name the offending field and value.
pub fn validate_task(spec: &TaskSpec) -> Result<()> {
    if spec.path.trim().is_empty() {
        bail!("task has a blank 'path'");
    }
    if spec.filter.trim().is_empty() {
        bail!("task has a blank 'filter'");
    }
    if spec.days.trim().is_empty() {
        bail!("task has a blank 'days'");
    }

    if !Regex::new(r"^\d+$")?.is_match(&spec.days) {
        bail!("'days' must be a string of digits, got {:?}", spec.days);
    }
    parsed_days(spec)?;

    if !Regex::new(r"^[\w*?. @-]+$")?.is_match(&spec.filter) {
        bail!("'filter' contains unsupported characters: {:?}", spec.filter);
    }

    if !spec.marker.trim().is_empty() && !Regex::new(r"^[\w@-]+$")?.is_match(&spec.marker) {
        bail!("'marker' contains unsupported characters: {:?}", spec.marker);
    }

    if !Path::new(&spec.path).is_dir() {
        bail!("'path' is not an existing directory: {}", spec.path);
    }

    Ok(())
}

/// Numeric view of the validated digit string.
pub fn parsed_days(spec: &TaskSpec) -> Result<i64> {
    spec.days
        .trim()
        .parse::<i64>()
        .with_context(|| format!("'days' out of range: {:?}", spec.days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(path: &str, filter: &str, days: &str, marker: &str) -> TaskSpec {
        TaskSpec {
            path: path.to_string(),
            filter: filter.to_string(),
            days: days.to_string(),
            arc: true,
            del: true,
            single: false,
            marker: marker.to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn accepts_minimal_spec_with_existing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().to_string_lossy().to_string();
        validate_task(&spec(&path, "*.log", "31", "")).expect("valid spec");
        validate_task(&spec(&path, "report ?-v2.*", "0", "@PACMAN")).expect("valid spec");
    }

    #[test]
    fn rejects_blank_mandatory_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().to_string_lossy().to_string();

        assert!(validate_task(&spec("", "*.log", "31", "")).is_err());
        assert!(validate_task(&spec("   ", "*.log", "31", "")).is_err());
        assert!(validate_task(&spec(&path, "", "31", "")).is_err());
        assert!(validate_task(&spec(&path, "*.log", " ", "")).is_err());
    }

    #[test]
    fn rejects_non_numeric_days() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().to_string_lossy().to_string();

        assert!(validate_task(&spec(&path, "*.log", "abc", "")).is_err());
        assert!(validate_task(&spec(&path, "*.log", "-1", "")).is_err());
        assert!(validate_task(&spec(&path, "*.log", "3.5", "")).is_err());
        // matches ^\d+$ but overflows i64
        assert!(validate_task(&spec(&path, "*.log", "99999999999999999999", "")).is_err());
    }

    #[test]
    fn rejects_bad_filter_and_marker_charsets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().to_string_lossy().to_string();

        assert!(validate_task(&spec(&path, "bad!char", "31", "")).is_err());
        assert!(validate_task(&spec(&path, "*.log", "31", "bad!char")).is_err());
        // space is fine in a filter but not in a marker
        validate_task(&spec(&path, "a b*.log", "31", "")).expect("filter with space");
        assert!(validate_task(&spec(&path, "*.log", "31", "a b")).is_err());
    }

    #[test]
    fn blank_marker_is_treated_as_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().to_string_lossy().to_string();
        validate_task(&spec(&path, "*.log", "31", "  ")).expect("blank marker passes");
    }

    #[test]
    fn rejects_missing_or_non_directory_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let gone = dir.path().join("nope").to_string_lossy().to_string();
        assert!(validate_task(&spec(&gone, "*.log", "31", "")).is_err());

        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").expect("write file");
        let file = file.to_string_lossy().to_string();
        assert!(validate_task(&spec(&file, "*.log", "31", "")).is_err());
    }
}
