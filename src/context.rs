//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{ApiError, RestApi};
use crate::store::{store_set_notice, SyncStore};
use crate::sync::SyncController;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive sync state - read/write
    pub store: SyncStore,
    /// Controller for the remote service
    controller: StoredValue<SyncController<RestApi>>,
}

impl AppContext {
    pub fn new(store: SyncStore, controller: SyncController<RestApi>) -> Self {
        Self {
            store,
            controller: StoredValue::new(controller),
        }
    }

    /// Clone the controller handle for use inside a spawned task
    pub fn controller(&self) -> SyncController<RestApi> {
        self.controller.get_value()
    }

    /// Log an operation failure and surface it as a non-fatal notice
    pub fn report(&self, what: &str, err: &ApiError) {
        web_sys::console::error_1(&format!("[SYNC] {what}: {err}").into());
        store_set_notice(&self.store, format!("{what}: {err}"));
    }
}
