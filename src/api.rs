//! REST Client
//!
//! Async wrappers over the remote todo service, one function per endpoint.

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{TaskDraft, UserRecord};

/// Base URL of the remote todo service.
pub const BASE_URL: &str = "https://playground.4geeks.com/todo";

/// Validation status the server returns when the user record already exists.
const STATUS_ALREADY_EXISTS: u16 = 422;

/// What can go wrong talking to the service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be sent or the response never arrived.
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Success status but the payload does not have the expected shape.
    #[error("unexpected response format: {0}")]
    DataFormat(String),
}

/// Remote operations the sync flow depends on. The one production
/// implementation is [`RestApi`]; tests substitute a scripted fake.
pub trait TodoApi {
    /// Fetch the user record. `Ok(None)` means the server reported
    /// not-found, which is how an absent user is signalled.
    async fn fetch_user(&self, user_id: &str) -> Result<Option<UserRecord>, ApiError>;

    /// Create the user record. Idempotent from the caller's point of
    /// view: an "already exists" answer counts as success.
    async fn create_user(&self, user_id: &str) -> Result<(), ApiError>;

    /// Create a task under the user's record.
    async fn create_task(&self, user_id: &str, draft: &TaskDraft) -> Result<(), ApiError>;

    /// Delete the task with the given server-assigned id.
    async fn delete_task(&self, task_id: u32) -> Result<(), ApiError>;
}

/// HTTP implementation of [`TodoApi`] against the playground service.
#[derive(Clone)]
pub struct RestApi {
    base: String,
}

impl RestApi {
    pub fn new() -> Self {
        Self::with_base(BASE_URL)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for RestApi {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoApi for RestApi {
    async fn fetch_user(&self, user_id: &str) -> Result<Option<UserRecord>, ApiError> {
        let url = format!("{}/users/{}", self.base, user_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(server_error(&response).await);
        }
        let record: UserRecord = response
            .json()
            .await
            .map_err(|e| ApiError::DataFormat(e.to_string()))?;
        Ok(Some(record))
    }

    async fn create_user(&self, user_id: &str) -> Result<(), ApiError> {
        let url = format!("{}/users/{}", self.base, user_id);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // 422 means the record is already there, which is just as good.
        if response.ok() || response.status() == STATUS_ALREADY_EXISTS {
            Ok(())
        } else {
            Err(server_error(&response).await)
        }
    }

    async fn create_task(&self, user_id: &str, draft: &TaskDraft) -> Result<(), ApiError> {
        let url = format!("{}/todos/{}", self.base, user_id);
        let response = Request::post(&url)
            .json(draft)
            .map_err(|e| ApiError::DataFormat(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(server_error(&response).await)
        }
    }

    async fn delete_task(&self, task_id: u32) -> Result<(), ApiError> {
        let url = format!("{}/todos/{}", self.base, task_id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(server_error(&response).await)
        }
    }
}

/// Turn a non-success response into a [`ApiError::Server`], carrying the
/// textual error body when the server provides one.
async fn server_error(response: &gloo_net::http::Response) -> ApiError {
    let message = response.text().await.unwrap_or_default();
    ApiError::Server {
        status: response.status(),
        message,
    }
}
