//! Data Sub-Interface
//!
//! CRUD over the `todos` collection. Row-level security scopes every call
//! to the bearer token's owner, so no user filter appears in the queries.

use serde_json::json;
use uuid::Uuid;

use crate::config;
use crate::models::{NewTodo, Session, Todo};

use super::{fetch_json, fetch_no_content};

fn todos_endpoint() -> String {
    format!("{}/rest/v1/todos", config::backend_url())
}

/// Full-collection select, newest first
fn list_url() -> String {
    format!("{}?select=*&order=created_at.desc", todos_endpoint())
}

fn row_url(id: Uuid) -> String {
    format!("{}?id=eq.{id}", todos_endpoint())
}

fn completed_patch(is_completed: bool) -> String {
    json!({ "is_completed": is_completed }).to_string()
}

pub async fn list_todos(session: &Session) -> Result<Vec<Todo>, String> {
    fetch_json("GET", &list_url(), Some(&session.access_token), None).await
}

pub async fn create_todo(session: &Session, new_todo: &NewTodo) -> Result<(), String> {
    let body = serde_json::to_string(new_todo).map_err(|e| e.to_string())?;
    fetch_no_content(
        "POST",
        &todos_endpoint(),
        Some(&session.access_token),
        Some(body),
        Some("return=minimal"),
    )
    .await
}

/// Flip one row's completion flag; the caller re-fetches afterwards
pub async fn set_completed(session: &Session, id: Uuid, is_completed: bool) -> Result<(), String> {
    fetch_no_content(
        "PATCH",
        &row_url(id),
        Some(&session.access_token),
        Some(completed_patch(is_completed)),
        None,
    )
    .await
}

pub async fn delete_todo(session: &Session, id: Uuid) -> Result<(), String> {
    fetch_no_content("DELETE", &row_url(id), Some(&session.access_token), None, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_orders_newest_first() {
        assert!(list_url().ends_with("/rest/v1/todos?select=*&order=created_at.desc"));
    }

    #[test]
    fn test_row_url_filters_by_id() {
        let id = Uuid::parse_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").unwrap();
        assert!(row_url(id)
            .ends_with("/rest/v1/todos?id=eq.7c9e6679-7425-40de-944b-e07fc1f90ae7"));
    }

    #[test]
    fn test_completed_patch_body() {
        assert_eq!(completed_patch(true), r#"{"is_completed":true}"#);
        assert_eq!(completed_patch(false), r#"{"is_completed":false}"#);
    }
}
