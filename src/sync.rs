//! Sync Controller
//!
//! Owns the sequencing logic between the UI and the remote service:
//! the startup bootstrap (check user, create if missing, load tasks)
//! and the three user-facing operations (refresh, add, delete).
//! UI-free so the whole flow is testable against a fake [`TodoApi`].

use crate::api::{ApiError, TodoApi};
use crate::models::{Task, TaskDraft};

/// Lifecycle of the controller. `Degraded` is terminal for the session;
/// only a full reload of the page leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    /// Bootstrap sequence in flight; add/delete not yet available.
    Checking,
    Ready,
    /// User record could not be confirmed; all operations disabled.
    Degraded,
}

/// Outcome of the startup sequence.
#[derive(Debug)]
pub enum Bootstrap {
    Ready(Vec<Task>),
    Degraded(ApiError),
}

/// Outcome of an add request.
#[derive(Debug, PartialEq)]
pub enum AddOutcome {
    /// Task created; carries the freshly reloaded, server-ordered list.
    Created(Vec<Task>),
    /// Label was empty or whitespace-only; nothing was sent.
    RejectedEmpty,
}

/// Sequential sync flow over a [`TodoApi`]. Holds no task state itself;
/// callers apply returned lists to the reactive store.
#[derive(Clone)]
pub struct SyncController<A> {
    api: A,
    user_id: String,
}

impl<A: TodoApi> SyncController<A> {
    pub fn new(api: A, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
        }
    }

    /// Startup sequence: confirm the user record exists (creating it if
    /// the server reports not-found), then load the task list. Runs once;
    /// any failure along the chain degrades the whole session, because
    /// nothing after an unconfirmed user record can be trusted.
    pub async fn bootstrap(&self) -> Bootstrap {
        match self.api.fetch_user(&self.user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                if let Err(err) = self.api.create_user(&self.user_id).await {
                    return Bootstrap::Degraded(err);
                }
            }
            Err(err) => return Bootstrap::Degraded(err),
        }
        match self.refresh().await {
            Ok(tasks) => Bootstrap::Ready(tasks),
            Err(err) => Bootstrap::Degraded(err),
        }
    }

    /// Fetch the full task list, in server order. A user record that
    /// vanished between bootstrap and now surfaces as a server error;
    /// the caller keeps its current list on any failure.
    pub async fn refresh(&self) -> Result<Vec<Task>, ApiError> {
        match self.api.fetch_user(&self.user_id).await? {
            Some(record) => Ok(record.todos),
            None => Err(ApiError::Server {
                status: 404,
                message: "user record missing".into(),
            }),
        }
    }

    /// Create a task, then reload the list once so the server-assigned id
    /// and ordering come back authoritative. Blank labels never reach the
    /// network.
    pub async fn add_task(&self, label: &str) -> Result<AddOutcome, ApiError> {
        let label = label.trim();
        if label.is_empty() {
            return Ok(AddOutcome::RejectedEmpty);
        }
        let draft = TaskDraft::new(label);
        self.api.create_task(&self.user_id, &draft).await?;
        Ok(AddOutcome::Created(self.refresh().await?))
    }

    /// Delete one task. No reload afterwards: the server holds no derived
    /// state to reconcile, so the caller just drops the matching id locally.
    pub async fn delete_task(&self, task_id: u32) -> Result<(), ApiError> {
        self.api.delete_task(task_id).await
    }
}
