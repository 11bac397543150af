//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Writing the
//! `session` field is the session-change notification: every subscriber
//! sees sign-in and sign-out through it.

use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::models::{Session, Todo};

/// How long a transient notification stays visible (ms)
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast info",
            ToastKind::Error => "toast error",
        }
    }
}

/// One transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current session; `None` shows the auth screen
    pub session: Option<Session>,
    /// Last fetched snapshot of the task list (newest first)
    pub todos: Vec<Todo>,
    /// Set while a list fetch is in flight
    pub loading: bool,
    /// Visible transient notifications
    pub toasts: Vec<Toast>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(1);

/// Show a transient notification and schedule its dismissal
pub fn push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    store.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        store.toasts().write().retain(|t| t.id != id);
    });
}

/// Remove a notification before its timer fires
pub fn dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|t| t.id != id);
}

/// Clear everything tied to the signed-out user
pub fn store_clear_session(store: &AppStore) {
    store.session().set(None);
    store.todos().write().clear();
}
