//! Playground snapshot sync
//!
//! Persists playground snapshots (HTML, CSS, Tailwind config and version)
//! under an identifier, generating one for first-time syncs.
//!
//! - [`SyncRequest`] validates the incoming payload
//! - [`SyncService`] upserts the snapshot and appends a timestamped commit
//! - [`SnapshotStore`] is the key-value seam, with file-backed and in-memory
//!   implementations
//! - [`handle_sync`] maps the whole flow onto HTTP-style status codes

mod error;
mod file_store;
mod handler;
mod service;
mod snapshot;
mod store;
mod version;

pub use error::SyncError;
pub use file_store::FileSnapshotStore;
pub use handler::{handle_sync, SyncResponse};
pub use service::SyncService;
pub use snapshot::{Commit, Snapshot, SyncRequest};
pub use store::{MemorySnapshotStore, SnapshotStore};
pub use version::{to_valid_tailwind_version, version_from_json, DEFAULT_TAILWIND_VERSION};
