//! New Task Form Component
//!
//! Single text input; Enter submits. Blank or whitespace-only input is
//! dropped before any network call, and the field is only cleared once
//! the server has accepted the task.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::{store_clear_notice, store_replace_tasks, SyncStateStoreFields};
use crate::sync::AddOutcome;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let label = store.pending_input().get();
        if label.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            match ctx.controller().add_task(&label).await {
                Ok(AddOutcome::Created(tasks)) => {
                    store_replace_tasks(&store, tasks);
                    store.pending_input().set(String::new());
                    store_clear_notice(&store);
                }
                Ok(AddOutcome::RejectedEmpty) => {}
                Err(err) => ctx.report("Could not add task", &err),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=submit>
            <input
                type="text"
                class="new-task-input"
                placeholder="What needs to be done?"
                prop:value=move || store.pending_input().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store.pending_input().set(input.value());
                }
            />
        </form>
    }
}
