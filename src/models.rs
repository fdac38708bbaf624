// Data models for taskpad

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// A single tracked task, as persisted in the tasks file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub completed: bool,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Task {
    /// Create a pending task with a fresh id and the current timestamp
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: new_task_id(),
            description: description.into(),
            completed: false,
            created_at: now_ms(),
            due_date: None,
            priority: None,
            tags: None,
            source: None,
        }
    }
}

/// A marker line lifted from a source file, not yet imported into the store
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTask {
    pub source_path: PathBuf,
    /// 0-based line index within the source file
    pub line_number: usize,
    pub text: String,
}

impl ExtractedTask {
    /// Origin string stored on the imported task
    pub fn source_label(&self) -> String {
        format!("File: {}, Line: {}", self.source_path.display(), self.line_number)
    }
}

/// Generate a unique task id.
///
/// UUIDv7 combines a millisecond timestamp with random bits, so ids are unique
/// in practice without being a cryptographic guarantee.
pub fn new_task_id() -> String {
    Uuid::now_v7().to_string()
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}

/// Render an epoch-millisecond timestamp in local time for display
pub fn format_timestamp(ms: i64) -> String {
    use chrono::{Local, LocalResult, TimeZone};
    match Local.timestamp_millis_opt(ms) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => ms.to_string(),
    }
}
