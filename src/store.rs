use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable overriding the state file location.
pub const STATE_ENV: &str = "FCONV_STATE";

const STATE_FILE: &str = ".fconv.json";
const DEFAULT_FORMAT: &str = "base64";

/// One workspace row: a plain-text side and its encoded counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub plain: String,
    pub encoded: String,
}

/// Persisted workspace: the active format key plus the saved rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub format: String,
    pub rows: Vec<Row>,
}

impl Default for State {
    fn default() -> Self {
        State {
            format: DEFAULT_FORMAT.to_string(),
            rows: Vec::new(),
        }
    }
}

/// JSON state file handle. Resolution order for the location: explicit path,
/// then `$FCONV_STATE`, then `~/.fconv.json`.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: Option<PathBuf>) -> Store {
        let path = path
            .or_else(|| env::var_os(STATE_ENV).map(PathBuf::from))
            .unwrap_or_else(default_path);
        Store { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing state file yields a fresh default. An unreadable or corrupt
    /// file also yields the default, with a warning on stderr, so a damaged
    /// state file never wedges the command. Save failures stay hard errors.
    pub fn load(&self) -> State {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return State::default(),
            Err(e) => {
                eprintln!(
                    "warning: cannot read {}: {}; starting fresh",
                    self.path.display(),
                    e
                );
                return State::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                eprintln!(
                    "warning: corrupt state file {}: {}; starting fresh",
                    self.path.display(),
                    e
                );
                State::default()
            }
        }
    }

    pub fn save(&self, state: &State) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn default_path() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(STATE_FILE),
        _ => PathBuf::from(STATE_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(Some(dir.path().join("state.json")));

        let mut state = State::default();
        state.format = "hex".to_string();
        state.rows.push(Row {
            plain: "Hello".to_string(),
            encoded: "48656c6c6f".to_string(),
        });

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(Some(dir.path().join("absent.json")));

        let state = store.load();
        assert_eq!(state.format, "base64");
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let store = Store::open(Some(path));
        assert_eq!(store.load(), State::default());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/state.json");

        let store = Store::open(Some(path.clone()));
        store.save(&State::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_explicit_path_wins() {
        let store = Store::open(Some(PathBuf::from("/tmp/explicit.json")));
        assert_eq!(store.path(), Path::new("/tmp/explicit.json"));
    }
}
