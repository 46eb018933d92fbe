//! Data Models
//!
//! Data structures matching the remote todo service.

use serde::{Deserialize, Serialize};

/// A task as the server stores it. The client never mutates one locally;
/// the authoritative copy always comes back from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub label: String,
    pub is_done: bool,
}

/// POST body for creating a task. The id is server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDraft {
    pub label: String,
    pub is_done: bool,
}

impl TaskDraft {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_done: false,
        }
    }
}

/// GET /users/{id} response body. The server returns more fields than
/// this; only the task collection matters here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub todos: Vec<Task>,
}
