//! Task List Component
//!
//! Renders the synced task list with one delete button per row. Delete
//! is optimistic-local: on success the matching row is dropped from the
//! store without a reload, since the server holds no other derived state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{store_clear_notice, store_remove_task, SyncStateStoreFields};

/// List of synced tasks plus the items-left footer
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let delete_task = move |task_id: u32| {
        spawn_local(async move {
            match ctx.controller().delete_task(task_id).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[LIST] Deleted task {}", task_id).into());
                    store_remove_task(&store, task_id);
                    store_clear_notice(&store);
                }
                Err(err) => ctx.report("Could not delete task", &err),
            }
        });
    };

    view! {
        <ul class="task-list">
            <Show when=move || store.tasks().read().is_empty()>
                <li class="no-tasks">"No tasks yet, add one above"</li>
            </Show>
            <For
                each=move || store.tasks().get()
                key=|task| task.id
                children=move |task| {
                    let task_id = task.id;
                    view! {
                        <li class="task-item">
                            <span class="task-label" class:done=task.is_done>
                                {task.label.clone()}
                            </span>
                            <button
                                class="delete-btn"
                                on:click=move |_| delete_task(task_id)
                            >
                                "🗑️"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
        <div class="todo-footer">
            {move || {
                let count = store.tasks().read().len();
                format!("{} {} left", count, if count == 1 { "item" } else { "items" })
            }}
        </div>
    }
}
