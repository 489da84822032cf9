use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use time::OffsetDateTime;

fn ddmmyyyy_hhmmss(now: OffsetDateTime) -> String {
    let m: u8 = now.month() as u8;
    format!(
        "{:02}.{:02}.{:04} {:02}:{:02}:{:02}",
        now.day(),
        m,
        now.year(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// Append one `{dd.MM.yyyy HH:mm:ss} {message}` line to the error log,
/// creating the file on first use.
pub fn append(log_path: &Path, message: &str) -> Result<()> {
    append_at(log_path, message, crate::select::local_now())
}

fn append_at(log_path: &Path, message: &str, now: OffsetDateTime) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open error log {}", log_path.display()))?;

    writeln!(file, "{} {}", ddmmyyyy_hhmmss(now), message)
        .with_context(|| format!("write error log {}", log_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn line_carries_timestamp_then_message() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("error.log");

        let now = datetime!(2026-08-06 13:45:12 UTC);
        append_at(&log, "task #2 failed: remove denied", now).expect("append");

        let body = std::fs::read_to_string(&log).expect("read log");
        assert_eq!(body, "06.08.2026 13:45:12 task #2 failed: remove denied\n");
    }

    #[test]
    fn lines_accumulate_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("error.log");

        let now = datetime!(2026-01-02 03:04:05 UTC);
        append_at(&log, "first", now).expect("append");
        append_at(&log, "second", now).expect("append");

        let body = std::fs::read_to_string(&log).expect("read log");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
        assert!(lines[0].starts_with("02.01.2026 03:04:05"));
    }
}
