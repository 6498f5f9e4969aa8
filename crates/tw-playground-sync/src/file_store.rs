//! File-backed snapshot store
//!
//! Layout inside the store directory:
//! - `<id>.json` - current snapshot content (pretty JSON)
//! - `<id>.commits.jsonl` - one commit per line, append-only

use crate::error::SyncError;
use crate::snapshot::{Commit, Snapshot};
use crate::store::SnapshotStore;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Snapshot store writing JSON files into a directory
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    /// Open (and create if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SyncError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        log::debug!("Opened snapshot store at {:?}", dir);
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn snapshot_path(&self, id: &str) -> Result<PathBuf, SyncError> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{}.json", id)))
    }

    fn commits_path(&self, id: &str) -> Result<PathBuf, SyncError> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{}.commits.jsonl", id)))
    }
}

/// Identifiers become file names, so only a safe character set is allowed
fn validate_id(id: &str) -> Result<(), SyncError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SyncError::InvalidRequest(format!(
            "invalid snapshot id: {:?}",
            id
        )))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn put(&mut self, id: &str, snapshot: &Snapshot) -> Result<(), SyncError> {
        let path = self.snapshot_path(id)?;
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, content)?;
        log::info!("Saved snapshot {} to {:?}", id, path);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Snapshot, SyncError> {
        let path = self.snapshot_path(id)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SyncError::NotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn record_commit(&mut self, id: &str, commit: &Commit) -> Result<(), SyncError> {
        let path = self.commits_path(id)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        let line = serde_json::to_string(commit)?;
        writeln!(file, "{}", line)?;
        log::debug!("Recorded commit for snapshot {}", id);
        Ok(())
    }

    fn commits(&self, id: &str) -> Result<Vec<Commit>, SyncError> {
        let path = self.commits_path(id)?;
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut commits = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(commit) => commits.push(commit),
                Err(e) => log::warn!("Skipping unreadable commit in {:?}: {}", path, e),
            }
        }
        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn snapshot(html: &str) -> Snapshot {
        Snapshot {
            version: "3".to_string(),
            html: html.to_string(),
            css: "@tailwind base;".to_string(),
            config: "module.exports = {}".to_string(),
        }
    }

    #[test]
    fn test_put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSnapshotStore::open(dir.path()).unwrap();

        store.put("abc-123", &snapshot("<div></div>")).unwrap();
        assert_eq!(store.get("abc-123").unwrap(), snapshot("<div></div>"));
        assert!(dir.path().join("abc-123.json").exists());
    }

    #[test]
    fn test_put_is_an_upsert() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSnapshotStore::open(dir.path()).unwrap();

        store.put("abc", &snapshot("first")).unwrap();
        store.put("abc", &snapshot("second")).unwrap();
        assert_eq!(store.get("abc").unwrap().html, "second");
    }

    #[test]
    fn test_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::open(dir.path()).unwrap();
        assert!(matches!(store.get("nope"), Err(SyncError::NotFound(id)) if id == "nope"));
        assert!(store.commits("nope").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_path_like_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSnapshotStore::open(dir.path()).unwrap();
        let err = store.put("../escape", &snapshot("x")).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_commit_history_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSnapshotStore::open(dir.path()).unwrap();

        for html in ["one", "two"] {
            store
                .record_commit(
                    "abc",
                    &Commit {
                        snapshot: snapshot(html),
                        timestamp: Utc::now(),
                    },
                )
                .unwrap();
        }

        let commits = store.commits("abc").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].snapshot.html, "one");
        assert_eq!(commits[1].snapshot.html, "two");
    }
}
