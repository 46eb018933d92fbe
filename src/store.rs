//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::sync::Phase;

/// Process-local sync state. Rebuilt from scratch on every page load;
/// `tasks` reflects the last successful load response and nothing else.
#[derive(Clone, Debug, Default, Store)]
pub struct SyncState {
    /// Task list in server-returned order
    pub tasks: Vec<Task>,
    /// Controller lifecycle phase
    pub phase: Phase,
    /// Current non-fatal error message, if any
    pub notice: Option<String>,
    /// Text of the not-yet-submitted task
    pub pending_input: String,
}

/// Type alias for the store
pub type SyncStore = Store<SyncState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the task list wholesale with a server response
pub fn store_replace_tasks(store: &SyncStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

/// Remove one task from the store by ID (optimistic local removal)
pub fn store_remove_task(store: &SyncStore, task_id: u32) {
    drop_task(&mut store.tasks().write(), task_id);
}

/// Surface a non-fatal notice to the presentation layer
pub fn store_set_notice(store: &SyncStore, message: impl Into<String>) {
    store.notice().set(Some(message.into()));
}

/// Clear the notice after a successful operation
pub fn store_clear_notice(store: &SyncStore) {
    store.notice().set(None);
}

/// Drop exactly the entries with the matching id, leaving the rest untouched.
pub(crate) fn drop_task(tasks: &mut Vec<Task>, task_id: u32) {
    tasks.retain(|task| task.id != task_id);
}
