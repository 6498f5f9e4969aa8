//! Snapshot payloads

use crate::error::SyncError;
use crate::version::version_from_json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stored playground content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: String,
    pub html: String,
    pub css: String,
    pub config: String,
}

/// Entry of the append-only commit history of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub timestamp: DateTime<Utc>,
}

/// Validated sync payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Existing snapshot to overwrite; a new one is created when absent
    pub id: Option<String>,
    pub snapshot: Snapshot,
}

impl SyncRequest {
    pub fn new(id: Option<String>, snapshot: Snapshot) -> Self {
        Self { id, snapshot }
    }

    /// Parse and validate a JSON request body.
    ///
    /// The body must be an object whose `html`, `css` and `config` fields are
    /// strings. `ID` is optional; when present it must be a string, and an
    /// empty string counts as absent. `version` is normalized.
    pub fn from_json(body: &str) -> Result<Self, SyncError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| SyncError::InvalidRequest(format!("body is not JSON: {}", e)))?;
        Self::from_value(&value)
    }

    /// Same as [`Self::from_json`] for an already parsed body
    pub fn from_value(value: &Value) -> Result<Self, SyncError> {
        let Value::Object(fields) = value else {
            return Err(SyncError::InvalidRequest(
                "body must be a JSON object".to_string(),
            ));
        };

        let id = match fields.get("ID") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(SyncError::InvalidRequest(
                    "field 'ID' must be a string".to_string(),
                ))
            }
        };

        Ok(Self {
            id,
            snapshot: Snapshot {
                version: version_from_json(fields.get("version")),
                html: required_string(fields, "html")?,
                css: required_string(fields, "css")?,
                config: required_string(fields, "config")?,
            },
        })
    }
}

fn required_string(fields: &Map<String, Value>, name: &str) -> Result<String, SyncError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SyncError::InvalidRequest(format!(
            "field '{}' must be a string",
            name
        ))),
        None => Err(SyncError::InvalidRequest(format!(
            "missing field '{}'",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_request() {
        let request = SyncRequest::from_json(
            r#"{"ID": "abc", "html": "<div></div>", "css": "", "config": "module.exports = {}", "version": "2"}"#,
        )
        .unwrap();

        assert_eq!(request.id.as_deref(), Some("abc"));
        assert_eq!(
            request.snapshot,
            Snapshot {
                version: "2".to_string(),
                html: "<div></div>".to_string(),
                css: String::new(),
                config: "module.exports = {}".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_id_and_version() {
        let request = SyncRequest::from_json(r#"{"html": "", "css": "", "config": ""}"#).unwrap();
        assert_eq!(request.id, None);
        assert_eq!(request.snapshot.version, "3");

        let request =
            SyncRequest::from_json(r#"{"ID": "", "html": "", "css": "", "config": ""}"#).unwrap();
        assert_eq!(request.id, None);
    }

    #[test]
    fn test_rejects_malformed_bodies() {
        for body in [
            "not json",
            "[]",
            r#""html""#,
            r#"{"css": "", "config": ""}"#,
            r#"{"html": 1, "css": "", "config": ""}"#,
            r#"{"html": "", "css": null, "config": ""}"#,
            r#"{"html": "", "css": "", "config": {}}"#,
            r#"{"ID": 7, "html": "", "css": "", "config": ""}"#,
        ] {
            let err = SyncRequest::from_json(body).unwrap_err();
            assert!(err.is_client_error(), "expected client error for {}", body);
        }
    }

    #[test]
    fn test_commit_flattens_snapshot() {
        let commit = Commit {
            snapshot: Snapshot {
                version: "3".to_string(),
                html: "<p></p>".to_string(),
                css: String::new(),
                config: String::new(),
            },
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&commit).unwrap();
        assert_eq!(value["html"], "<p></p>");
        assert!(value.get("timestamp").is_some());
    }
}
