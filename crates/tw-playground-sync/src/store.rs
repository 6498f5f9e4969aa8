//! Snapshot storage seam

use crate::error::SyncError;
use crate::snapshot::{Commit, Snapshot};
use std::collections::HashMap;

/// Key-value store for snapshots and their commit history.
///
/// `put` is an upsert: writing an existing identifier replaces its content.
pub trait SnapshotStore {
    fn put(&mut self, id: &str, snapshot: &Snapshot) -> Result<(), SyncError>;

    fn get(&self, id: &str) -> Result<Snapshot, SyncError>;

    fn record_commit(&mut self, id: &str, commit: &Commit) -> Result<(), SyncError>;

    /// Commits of a snapshot, oldest first; empty for unknown identifiers
    fn commits(&self, id: &str) -> Result<Vec<Commit>, SyncError>;
}

/// In-memory store, used in tests and as a fallback when no directory is
/// available
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    snapshots: HashMap<String, Snapshot>,
    commits: HashMap<String, Vec<Commit>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn put(&mut self, id: &str, snapshot: &Snapshot) -> Result<(), SyncError> {
        self.snapshots.insert(id.to_string(), snapshot.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Snapshot, SyncError> {
        self.snapshots
            .get(id)
            .cloned()
            .ok_or_else(|| SyncError::NotFound(id.to_string()))
    }

    fn record_commit(&mut self, id: &str, commit: &Commit) -> Result<(), SyncError> {
        self.commits
            .entry(id.to_string())
            .or_default()
            .push(commit.clone());
        Ok(())
    }

    fn commits(&self, id: &str) -> Result<Vec<Commit>, SyncError> {
        Ok(self.commits.get(id).cloned().unwrap_or_default())
    }
}
