//! Backend Service Connection Settings
//!
//! The browser has no runtime environment, so connection credentials are
//! baked in at compile time. Set `TASKLIST_BACKEND_URL` and
//! `TASKLIST_ANON_KEY` when building against a real project; the defaults
//! point at a local development stack.

/// Base URL of the Backend Service project, without a trailing slash
pub fn backend_url() -> &'static str {
    option_env!("TASKLIST_BACKEND_URL").unwrap_or("http://localhost:54321")
}

/// Public (anon) API key sent with every request
pub fn anon_key() -> &'static str {
    option_env!("TASKLIST_ANON_KEY").unwrap_or("local-dev-anon-key")
}

/// localStorage key the current session is mirrored under
pub const SESSION_STORAGE_KEY: &str = "tasklist.session";
