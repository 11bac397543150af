//! Task Row Component
//!
//! One row of the list: completion checkbox, title, badge, delete. The
//! checkbox is not optimistic; it only changes once the re-fetch lands.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::Todo;
use crate::store::{push_toast, use_app_store, AppStateStoreFields, ToastKind};

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = todo.id;
    let is_completed = todo.is_completed;

    let toggle = move |_| {
        let Some(session) = store.session().get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::set_completed(&session, id, !is_completed).await {
                Ok(()) => ctx.reload(),
                Err(msg) => push_toast(&store, ToastKind::Error, msg),
            }
        });
    };

    let delete = move |_| {
        let Some(session) = store.session().get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_todo(&session, id).await {
                Ok(()) => {
                    push_toast(&store, ToastKind::Info, "Task deleted");
                    ctx.reload();
                }
                // No re-fetch on failure, the row stays where it is
                Err(msg) => push_toast(&store, ToastKind::Error, msg),
            }
        });
    };

    view! {
        <li class=move || if is_completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                prop:checked=is_completed
                on:change=toggle
            />
            <div class="todo-body">
                <span class="todo-title">{todo.title.clone()}</span>
                {todo.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                    <span class="todo-description">{d}</span>
                })}
                {todo.due_date.map(|date| view! {
                    <span class="todo-due">{format!("Due {}", date.format("%Y-%m-%d"))}</span>
                })}
            </div>
            <span class=todo.priority.badge_class()>{todo.priority.label()}</span>
            <button class="delete-btn" on:click=delete>"×"</button>
        </li>
    }
}
