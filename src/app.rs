//! Todo Sync App
//!
//! Root component: runs the bootstrap sequence once at startup, then
//! renders the todo box (or the degraded-state panel) from the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::RestApi;
use crate::components::{NewTaskForm, TaskList};
use crate::context::AppContext;
use crate::store::{store_replace_tasks, SyncState, SyncStateStoreFields, SyncStore};
use crate::sync::{Bootstrap, Phase, SyncController};

/// Fixed identifier of the server-side user record.
const USER_ID: &str = "agustinp";

#[component]
pub fn App() -> impl IntoView {
    let store = SyncStore::new(SyncState::default());
    let ctx = AppContext::new(store, SyncController::new(RestApi::new(), USER_ID));

    // Provide context to all children
    provide_context(ctx);

    // Bootstrap once on mount: check user, create if missing, load tasks.
    // No retry; a failure here is terminal until the page is reloaded.
    Effect::new(move |_| {
        if store.phase().get_untracked() != Phase::Uninitialized {
            return;
        }
        store.phase().set(Phase::Checking);
        spawn_local(async move {
            web_sys::console::log_1(&format!("[APP] Checking user {}", USER_ID).into());
            match ctx.controller().bootstrap().await {
                Bootstrap::Ready(tasks) => {
                    web_sys::console::log_1(
                        &format!("[APP] Bootstrap done, {} tasks", tasks.len()).into(),
                    );
                    store_replace_tasks(&store, tasks);
                    store.phase().set(Phase::Ready);
                }
                Bootstrap::Degraded(err) => {
                    web_sys::console::error_1(&format!("[APP] Bootstrap failed: {err}").into());
                    store.phase().set(Phase::Degraded);
                }
            }
        });
    });

    view! {
        <div class="app-shell">
            <h1 class="app-title">"todos"</h1>

            {move || match store.phase().get() {
                Phase::Uninitialized | Phase::Checking => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                Phase::Ready => view! {
                    <div class="todo-box">
                        <NewTaskForm />
                        <TaskList />
                    </div>
                }.into_any(),
                Phase::Degraded => view! {
                    <div class="error-message">
                        "The user does not exist. Please create a valid user."
                    </div>
                }.into_any(),
            }}

            {move || store.notice().get().map(|message| view! {
                <div class="notice">{message}</div>
            })}
        </div>
    }
}
