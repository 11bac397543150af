//! Auth Screen Component
//!
//! Email + password forms shown while no session exists. Sign-up runs the
//! local password pre-check and never contacts the Backend Service when it
//! fails.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{push_toast, use_app_store, AppStateStoreFields, ToastKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

#[component]
pub fn AuthScreen() -> impl IntoView {
    let store = use_app_store();

    let (mode, set_mode) = signal(AuthMode::SignIn);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    // Inline validation error, shown under the password field
    let (inline_error, set_inline_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }

        match mode.get() {
            AuthMode::SignUp => {
                if let Err(msg) = api::validate_password(&password_value) {
                    set_inline_error.set(Some(msg));
                    return;
                }
                set_inline_error.set(None);
                spawn_local(async move {
                    match api::sign_up(&email_value, &password_value).await {
                        Ok(()) => push_toast(
                            &store,
                            ToastKind::Info,
                            "Check your email to confirm your account",
                        ),
                        Err(msg) => push_toast(&store, ToastKind::Error, msg),
                    }
                });
            }
            AuthMode::SignIn => {
                set_inline_error.set(None);
                spawn_local(async move {
                    match api::sign_in(&email_value, &password_value).await {
                        Ok(session) => {
                            web_sys::console::log_1(
                                &format!("[AUTH] Signed in as {:?}", session.user.email).into(),
                            );
                            store.session().set(Some(session));
                            push_toast(&store, ToastKind::Info, "Signed in");
                        }
                        Err(msg) => push_toast(&store, ToastKind::Error, msg),
                    }
                });
            }
        }
    };

    let switch_mode = move |next: AuthMode| {
        set_mode.set(next);
        set_inline_error.set(None);
    };

    view! {
        <div class="auth-screen">
            <h1>"Tasklist"</h1>

            <div class="auth-tabs">
                <button
                    class=move || if mode.get() == AuthMode::SignIn { "auth-tab active" } else { "auth-tab" }
                    on:click=move |_| switch_mode(AuthMode::SignIn)
                >
                    "Sign In"
                </button>
                <button
                    class=move || if mode.get() == AuthMode::SignUp { "auth-tab active" } else { "auth-tab" }
                    on:click=move |_| switch_mode(AuthMode::SignUp)
                >
                    "Sign Up"
                </button>
            </div>

            <form class="auth-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || inline_error.get().map(|msg| view! {
                    <p class="inline-error">{msg}</p>
                })}

                <button type="submit">
                    {move || match mode.get() {
                        AuthMode::SignIn => "Sign In",
                        AuthMode::SignUp => "Create Account",
                    }}
                </button>
            </form>
        </div>
    }
}
