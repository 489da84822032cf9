use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use time::OffsetDateTime;

/// One retention task from the config document.
///
/// `arc`/`del`/`single` fall back to `true, true, false` when the key is
/// absent; everything else defaults to blank and is checked by the validator.
#[derive(Clone, Debug, Deserialize)]
pub struct TaskSpec {
    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub filter: String,

    /// Age threshold in days, kept as the raw digit string from the config.
    #[serde(default, deserialize_with = "digits_or_number")]
    pub days: String,

    #[serde(default = "default_true")]
    pub arc: bool,

    #[serde(default = "default_true")]
    pub del: bool,

    #[serde(default)]
    pub single: bool,

    /// Optional suffix appended to generated archive names. Blank == absent.
    #[serde(default)]
    pub marker: String,

    /// Free text, echoed in the status output only.
    #[serde(default)]
    pub comment: String,
}

fn default_true() -> bool {
    true
}

/// Accept `"days": "31"` and `"days": 31` alike; the validator sees the
/// digit string either way.
fn digits_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

/// One filesystem entry matched by the selector.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub modified: OffsetDateTime,
}

/// Terminal state of one executed task.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TaskOutcome {
    /// Both `arc` and `del` were false; no selection was attempted.
    NothingToDo,
    /// Selection ran but matched no files.
    NoFiles,
    Done { archived: usize, removed: usize },
}
