//! Task List Component
//!
//! Renders the last fetched snapshot, newest first. The store is only a
//! snapshot; every mutation goes through a full re-fetch.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::TodoRow;
use crate::models::Todo;
use crate::store::{use_app_store, AppStateStoreFields};

/// Key rows on every field a re-fetch can change in place, so `<For>`
/// rebuilds the row instead of reusing the stale view for a surviving id
fn row_key(todo: &Todo) -> (Uuid, bool) {
    (todo.id, todo.is_completed)
}

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="todo-list">
            <Show when=move || store.loading().get()>
                <p class="loading">"Loading tasks..."</p>
            </Show>

            <Show when=move || !store.loading().get() && store.todos().read().is_empty()>
                <p class="empty-state">"No tasks yet. Add one above."</p>
            </Show>

            <ul>
                <For
                    each=move || store.todos().get()
                    key=row_key
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </ul>

            <p class="todo-count">
                {move || {
                    let todos = store.todos().read();
                    let done = todos.iter().filter(|t| t.is_completed).count();
                    format!("{} tasks, {} done", todos.len(), done)
                }}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::{TimeZone, Utc};

    fn make_todo(is_completed: bool) -> Todo {
        Todo {
            id: Uuid::parse_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap(),
            user_id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            title: "Buy milk".into(),
            description: None,
            is_completed,
            due_date: None,
            priority: Priority::Medium,
            created_at: Utc.with_ymd_and_hms(2026, 8, 29, 10, 15, 30).unwrap(),
        }
    }

    #[test]
    fn test_row_key_changes_when_completion_flips() {
        // Same id must not key to the same row once the flag differs,
        // otherwise the checkbox keeps showing the pre-refresh state
        let open = make_todo(false);
        let done = make_todo(true);
        assert_eq!(open.id, done.id);
        assert_ne!(row_key(&open), row_key(&done));
        assert_eq!(row_key(&open), row_key(&open.clone()));
    }
}
