//! Validate-then-upsert sync flow

use crate::error::SyncError;
use crate::snapshot::{Commit, Snapshot, SyncRequest};
use crate::store::SnapshotStore;
use chrono::Utc;

/// Persists snapshots through a [`SnapshotStore`]
#[derive(Debug)]
pub struct SyncService<S> {
    store: S,
}

impl<S: SnapshotStore> SyncService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Upsert the snapshot and append a commit.
    ///
    /// Uses the request ID when present, otherwise generates a UUID v4.
    /// Returns the identifier the snapshot is stored under. Only a failed
    /// upsert fails the sync; the commit history is best effort.
    pub fn sync(&mut self, request: SyncRequest) -> Result<String, SyncError> {
        let id = request
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        self.store.put(&id, &request.snapshot)?;

        let commit = Commit {
            snapshot: request.snapshot,
            timestamp: Utc::now(),
        };
        if let Err(e) = self.store.record_commit(&id, &commit) {
            log::warn!("Failed to record commit for snapshot {}: {}", id, e);
        }

        log::info!("Synced snapshot {}", id);
        Ok(id)
    }

    /// Load the current content of a snapshot
    pub fn load(&self, id: &str) -> Result<Snapshot, SyncError> {
        self.store.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySnapshotStore;
    use pretty_assertions::assert_eq;

    fn snapshot(html: &str) -> Snapshot {
        Snapshot {
            version: "3".to_string(),
            html: html.to_string(),
            css: String::new(),
            config: String::new(),
        }
    }

    #[test]
    fn test_generates_id_when_absent() {
        let mut service = SyncService::new(MemorySnapshotStore::new());
        let id = service.sync(SyncRequest::new(None, snapshot("<p></p>"))).unwrap();

        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_eq!(service.load(&id).unwrap(), snapshot("<p></p>"));
    }

    #[test]
    fn test_reuses_given_id() {
        let mut service = SyncService::new(MemorySnapshotStore::new());
        let first = service
            .sync(SyncRequest::new(Some("mine".to_string()), snapshot("a")))
            .unwrap();
        let second = service
            .sync(SyncRequest::new(Some("mine".to_string()), snapshot("b")))
            .unwrap();

        assert_eq!(first, "mine");
        assert_eq!(second, "mine");
        assert_eq!(service.store().len(), 1);
        assert_eq!(service.load("mine").unwrap().html, "b");

        let history: Vec<String> = service
            .store()
            .commits("mine")
            .unwrap()
            .into_iter()
            .map(|c| c.snapshot.html)
            .collect();
        assert_eq!(history, vec!["a", "b"]);
    }

    /// Keeps snapshots but can not write the commit history
    #[derive(Default)]
    struct NoHistoryStore {
        inner: MemorySnapshotStore,
    }

    impl SnapshotStore for NoHistoryStore {
        fn put(&mut self, id: &str, snapshot: &Snapshot) -> Result<(), SyncError> {
            self.inner.put(id, snapshot)
        }

        fn get(&self, id: &str) -> Result<Snapshot, SyncError> {
            self.inner.get(id)
        }

        fn record_commit(&mut self, _id: &str, _commit: &Commit) -> Result<(), SyncError> {
            Err(std::io::Error::other("commit log is read-only").into())
        }

        fn commits(&self, id: &str) -> Result<Vec<Commit>, SyncError> {
            self.inner.commits(id)
        }
    }

    #[test]
    fn test_commit_failure_does_not_fail_sync() {
        let mut service = SyncService::new(NoHistoryStore::default());
        let id = service
            .sync(SyncRequest::new(Some("keep".to_string()), snapshot("<p></p>")))
            .unwrap();

        assert_eq!(id, "keep");
        assert_eq!(service.load("keep").unwrap().html, "<p></p>");
        assert!(service.store().commits("keep").unwrap().is_empty());
    }

    #[test]
    fn test_load_unknown() {
        let service = SyncService::new(MemorySnapshotStore::new());
        assert!(matches!(service.load("missing"), Err(SyncError::NotFound(_))));
    }
}
