//! Tasklist Frontend App
//!
//! Root component: restores the persisted session on mount, switches
//! between the auth screen and the task screen on session presence, and
//! re-fetches the list whenever the session or the reload trigger changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AuthScreen, ToastStack, TodoForm, TodoList};
use crate::context::AppContext;
use crate::store::{
    push_toast, store_clear_session, AppState, AppStateStoreFields, AppStore, ToastKind,
};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Restore the persisted session on mount
    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            if let Some(session) = api::load_session() {
                web_sys::console::log_1(
                    &format!("[APP] Restored session for {:?}", session.user.email).into(),
                );
                store.session().set(Some(session));
            }
        }
    });

    // Fetch the task list when a session appears or a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(session) = store.session().get() else {
            return;
        };
        web_sys::console::log_1(&format!("[APP] Loading tasks, trigger={trigger}").into());
        store.loading().set(true);
        spawn_local(async move {
            match api::list_todos(&session).await {
                Ok(todos) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", todos.len()).into());
                    store.todos().set(todos);
                }
                // Keep the previous snapshot on failure
                Err(msg) => push_toast(&store, ToastKind::Error, msg),
            }
            store.loading().set(false);
        });
    });

    let sign_out = move |_| {
        let Some(session) = store.session().get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::sign_out(&session).await {
                Ok(()) => {
                    store_clear_session(&store);
                    push_toast(&store, ToastKind::Info, "Signed out");
                }
                Err(msg) => push_toast(&store, ToastKind::Error, msg),
            }
        });
    };

    view! {
        <div class="app-layout">
            <Show
                when=move || store.session().read().is_some()
                fallback=|| view! { <AuthScreen /> }
            >
                <main class="main-content">
                    <header class="app-header">
                        <h1>"Tasklist"</h1>
                        <div class="session-info">
                            <span class="user-email">
                                {move || store.session().read().as_ref()
                                    .and_then(|s| s.user.email.clone())
                                    .unwrap_or_default()}
                            </span>
                            <button class="sign-out-btn" on:click=sign_out>"Sign Out"</button>
                        </div>
                    </header>

                    <TodoForm />
                    <TodoList />
                </main>
            </Show>

            <ToastStack />
        </div>
    }
}
