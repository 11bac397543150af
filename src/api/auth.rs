//! Auth Sub-Interface
//!
//! Sign-up, sign-in, and sign-out against the Backend Service, plus the
//! localStorage mirror that makes the session survive a page reload.

use crate::config;
use crate::models::Session;
use serde_json::json;

use super::{fetch_json, fetch_no_content};

/// Minimum accepted password length, checked before any request goes out
pub const MIN_PASSWORD_LEN: usize = 6;

fn auth_endpoint(path: &str) -> String {
    format!("{}/auth/v1/{path}", config::backend_url())
}

/// Local pre-check for sign-up; the only validation done on this side
/// of the wire.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ))
    } else {
        Ok(())
    }
}

/// Register a new account. The service sends a confirmation email, so no
/// session comes back here.
pub async fn sign_up(email: &str, password: &str) -> Result<(), String> {
    validate_password(password)?;
    let body = json!({ "email": email, "password": password }).to_string();
    fetch_no_content("POST", &auth_endpoint("signup"), None, Some(body), None).await
}

/// Exchange credentials for a session and persist it locally.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    let body = json!({ "email": email, "password": password }).to_string();
    let url = auth_endpoint("token?grant_type=password");
    let session: Session = fetch_json("POST", &url, None, Some(body)).await?;
    store_session(&session);
    Ok(session)
}

/// Invalidate the session server-side and drop the local mirror.
pub async fn sign_out(session: &Session) -> Result<(), String> {
    fetch_no_content(
        "POST",
        &auth_endpoint("logout"),
        Some(&session.access_token),
        None,
        None,
    )
    .await?;
    clear_session();
    Ok(())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Restore the persisted session, if any and still valid.
///
/// This is the startup `getSession()`: an expired mirror is dropped so the
/// app comes up unauthenticated instead of failing its first fetch.
pub fn load_session() -> Option<Session> {
    let storage = local_storage()?;
    let raw = storage.get_item(config::SESSION_STORAGE_KEY).ok()??;
    let session: Session = serde_json::from_str(&raw).ok()?;
    if session.is_expired(now_secs()) {
        clear_session();
        return None;
    }
    Some(session)
}

pub fn store_session(session: &Session) {
    if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(config::SESSION_STORAGE_KEY, &raw);
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(config::SESSION_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_is_rejected_with_exact_message() {
        let err = validate_password("abc12").unwrap_err();
        assert_eq!(err, "Password must be at least 6 characters long");
    }

    #[test]
    fn test_password_boundary() {
        assert!(validate_password("").is_err());
        assert!(validate_password("abc12").is_err());
        assert!(validate_password("abc123").is_ok());
        assert!(validate_password("correct horse battery").is_ok());
    }

    #[test]
    fn test_auth_endpoints() {
        assert!(auth_endpoint("signup").ends_with("/auth/v1/signup"));
        assert!(auth_endpoint("token?grant_type=password")
            .ends_with("/auth/v1/token?grant_type=password"));
        assert!(auth_endpoint("logout").ends_with("/auth/v1/logout"));
    }
}
