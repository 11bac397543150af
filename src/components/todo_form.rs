//! New Task Form Component
//!
//! Draft form for creating tasks. The draft only resets after the insert
//! succeeds; a failed submit keeps everything the user typed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{Priority, TodoDraft};
use crate::store::{push_toast, use_app_store, AppStateStoreFields, ToastKind};

/// Priority options for the select control, in display order
const PRIORITIES: &[(&str, &str)] = &[
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
];

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Medium);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TodoDraft {
            title: title.get(),
            description: description.get(),
            due_date: due_date.get(),
            priority: priority.get(),
        };
        if draft.title.trim().is_empty() {
            return;
        }
        // The insert needs the owner id; without a session this form is not rendered
        let Some(session) = store.session().get_untracked() else {
            return;
        };

        spawn_local(async move {
            let mut draft = draft;
            let new_todo = draft.to_new_todo(session.user.id);
            match api::create_todo(&session, &new_todo).await {
                Ok(()) => {
                    draft.reset();
                    set_title.set(draft.title);
                    set_description.set(draft.description);
                    set_due_date.set(draft.due_date);
                    set_priority.set(draft.priority);
                    push_toast(&store, ToastKind::Info, "Task created");
                    ctx.reload();
                }
                Err(msg) => push_toast(&store, ToastKind::Error, msg),
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=create_todo>
            <div class="todo-form-row">
                <input
                    type="text"
                    placeholder="Add a task..."
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>

            <div class="todo-form-row">
                <input
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || priority.get().as_str()
                    on:change=move |ev| set_priority.set(Priority::from_str(&event_target_value(&ev)))
                >
                    {PRIORITIES.iter().map(|(value, label)| view! {
                        <option value=*value selected=move || priority.get().as_str() == *value>
                            {*label}
                        </option>
                    }).collect_view()}
                </select>
            </div>
        </form>
    }
}
