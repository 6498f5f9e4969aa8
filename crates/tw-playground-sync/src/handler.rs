//! HTTP-shaped entry point for snapshot sync

use crate::error::SyncError;
use crate::service::SyncService;
use crate::snapshot::SyncRequest;
use crate::store::SnapshotStore;
use serde_json::{json, Value};

/// Status code and optional JSON body of a sync call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl SyncResponse {
    fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Handle a sync request.
///
/// - any method but `POST`: 404, no body
/// - malformed body: 400, no body
/// - stored: 200 `{"ID": "<id>"}`
/// - store failure: 500 `{"error": true}`
pub fn handle_sync<S: SnapshotStore>(
    service: &mut SyncService<S>,
    method: &str,
    body: &str,
) -> SyncResponse {
    if !method.eq_ignore_ascii_case("POST") {
        return SyncResponse::empty(404);
    }

    let request = match SyncRequest::from_json(body) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejecting sync request: {}", e);
            return SyncResponse::empty(400);
        }
    };

    match service.sync(request) {
        Ok(id) => SyncResponse {
            status: 200,
            body: Some(json!({ "ID": id })),
        },
        Err(e) if e.is_client_error() => {
            log::debug!("Rejecting sync request: {}", e);
            SyncResponse::empty(400)
        }
        Err(e) => failure(e),
    }
}

fn failure(error: SyncError) -> SyncResponse {
    log::error!("Snapshot sync failed: {}", error);
    SyncResponse {
        status: 500,
        body: Some(json!({ "error": true })),
    }
}
