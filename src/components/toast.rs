//! Toast Stack Component
//!
//! Transient notifications in a corner stack. Each one dismisses itself
//! after a few seconds (see `store::push_toast`) or on click.

use leptos::prelude::*;

use crate::store::{dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            on:click=move |_| dismiss_toast(&store, id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
