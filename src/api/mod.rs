//! Backend Service Client
//!
//! Request/response plumbing for the managed auth + database service,
//! organized by sub-interface. Every call goes over the browser's fetch
//! API and resolves to `Result<T, String>` where the `String` is the
//! user-visible error message.

mod auth;
mod todos;

pub use auth::*;
pub use todos::*;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config;

fn js_err(e: JsValue) -> String {
    format!("{e:?}")
}

/// Pull a human-readable message out of a Backend Service error body.
///
/// The auth and data sub-interfaces use different field names, so try
/// them in turn before falling back to the HTTP status.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error_description", "msg", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    format!("Request failed (HTTP {status})")
}

/// One fetch round-trip; the caller decides how to read the body.
async fn send(
    method: &str,
    url: &str,
    bearer: Option<&str>,
    body: Option<String>,
    prefer: Option<&str>,
) -> Result<Response, String> {
    let headers = Headers::new().map_err(js_err)?;
    headers.set("apikey", config::anon_key()).map_err(js_err)?;
    if let Some(token) = bearer {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(js_err)?;
    }
    if body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
    }
    if let Some(prefer) = prefer {
        headers.set("Prefer", prefer).map_err(js_err)?;
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_headers(&headers);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    response
        .dyn_into::<Response>()
        .map_err(|_| "unexpected fetch result".to_string())
}

async fn read_error(response: Response) -> String {
    let status = response.status();
    let body = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    error_message(status, &body)
}

/// Issue a request and decode the JSON response body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    bearer: Option<&str>,
    body: Option<String>,
) -> Result<T, String> {
    let response = send(method, url, bearer, body, None).await?;
    if !response.ok() {
        return Err(read_error(response).await);
    }
    let value = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Issue a request where only success/failure matters.
pub(crate) async fn fetch_no_content(
    method: &str,
    url: &str,
    bearer: Option<&str>,
    body: Option<String>,
    prefer: Option<&str>,
) -> Result<(), String> {
    let response = send(method, url, bearer, body, prefer).await?;
    if !response.ok() {
        return Err(read_error(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_data_interface_shape() {
        let body = r#"{"message":"duplicate key value violates unique constraint"}"#;
        assert_eq!(
            error_message(409, body),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_error_message_reads_auth_interface_shapes() {
        assert_eq!(
            error_message(400, r#"{"error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            error_message(422, r#"{"msg":"User already registered"}"#),
            "User already registered"
        );
        assert_eq!(
            error_message(401, r#"{"error":"invalid_grant"}"#),
            "invalid_grant"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(500, ""), "Request failed (HTTP 500)");
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "Request failed (HTTP 502)");
        assert_eq!(error_message(400, r#"{"message":""}"#), "Request failed (HTTP 400)");
    }
}
