//! Frontend Models
//!
//! Data structures matching the Backend Service's row and session shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority, stored lowercase in the `todos` collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Capitalized display form for the list badge
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// CSS class for the priority badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-badge low",
            Priority::Medium => "priority-badge medium",
            Priority::High => "priority-badge high",
        }
    }
}

/// One user-owned task row (matches the `todos` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the `todos` collection
///
/// Empty optional fields are left out entirely so the Backend Service
/// stores NULL instead of an empty string.
#[derive(Debug, Clone, Serialize)]
pub struct NewTodo {
    pub user_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub priority: Priority,
}

/// Authenticated user as returned by the auth sub-interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Proof of authenticated identity, persisted to localStorage between visits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp after which the access token is no longer valid
    #[serde(default)]
    pub expires_at: i64,
    pub user: User,
}

impl Session {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at != 0 && now >= self.expires_at
    }
}

/// Transient unsaved input state for creating a new task
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD` from the date input, empty when unset
    pub due_date: String,
    pub priority: Priority,
}

impl TodoDraft {
    /// Build the insert payload for the given owner
    pub fn to_new_todo(&self, user_id: Uuid) -> NewTodo {
        NewTodo {
            user_id,
            title: self.title.trim().to_string(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            due_date: if self.due_date.is_empty() {
                None
            } else {
                Some(self.due_date.clone())
            },
            priority: self.priority,
        }
    }

    /// Back to defaults after a successful submit
    pub fn reset(&mut self) {
        *self = TodoDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_json() -> &'static str {
        r#"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "user_id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Buy milk",
            "description": null,
            "is_completed": false,
            "due_date": null,
            "priority": "low",
            "created_at": "2026-08-29T10:15:30+00:00"
        }"#
    }

    #[test]
    fn test_todo_decodes_backend_row() {
        let todo: Todo = serde_json::from_str(fixture_json()).unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, None);
        assert_eq!(todo.due_date, None);
        assert_eq!(todo.priority, Priority::Low);
        assert!(!todo.is_completed);
    }

    #[test]
    fn test_todo_defaults_for_missing_fields() {
        // Rows created before the priority column existed come back without it
        let json = r#"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "user_id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Old row",
            "description": "kept",
            "due_date": "2026-09-01",
            "created_at": "2026-08-29T10:15:30+00:00"
        }"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.priority, Priority::Medium);
        assert!(!todo.is_completed);
        assert_eq!(todo.due_date, Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()));
    }

    #[test]
    fn test_priority_round_trip() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_str(p.as_str()), p);
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
        // Unknown values fall back to the default
        assert_eq!(Priority::from_str("urgent"), Priority::Medium);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_priority_labels_are_capitalized() {
        assert_eq!(Priority::Low.label(), "Low");
        assert_eq!(Priority::Medium.label(), "Medium");
        assert_eq!(Priority::High.label(), "High");
        assert_eq!(Priority::Low.badge_class(), "priority-badge low");
    }

    #[test]
    fn test_draft_defaults_and_reset() {
        let mut draft = TodoDraft {
            title: "Buy milk".into(),
            description: "2%".into(),
            due_date: "2026-09-01".into(),
            priority: Priority::High,
        };
        draft.reset();
        assert_eq!(draft.title, "");
        assert_eq!(draft.description, "");
        assert_eq!(draft.due_date, "");
        assert_eq!(draft.priority, Priority::Medium);
    }

    #[test]
    fn test_new_todo_skips_empty_optionals() {
        let user_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let draft = TodoDraft {
            title: "Buy milk".into(),
            description: String::new(),
            due_date: String::new(),
            priority: Priority::Low,
        };
        let json = serde_json::to_string(&draft.to_new_todo(user_id)).unwrap();
        assert!(json.contains("\"user_id\""));
        assert!(json.contains("\"priority\":\"low\""));
        assert!(!json.contains("description"));
        assert!(!json.contains("due_date"));
    }

    #[test]
    fn test_new_todo_keeps_filled_optionals() {
        let user_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let draft = TodoDraft {
            title: "  Buy milk  ".into(),
            description: "from the corner shop".into(),
            due_date: "2026-09-01".into(),
            priority: Priority::High,
        };
        let new_todo = draft.to_new_todo(user_id);
        assert_eq!(new_todo.title, "Buy milk");
        assert_eq!(new_todo.description.as_deref(), Some("from the corner shop"));
        assert_eq!(new_todo.due_date.as_deref(), Some("2026-09-01"));
    }

    #[test]
    fn test_session_expiry() {
        let session = Session {
            access_token: "tok".into(),
            refresh_token: "ref".into(),
            expires_at: 1_000,
            user: User {
                id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
                email: Some("a@b.com".into()),
            },
        };
        assert!(!session.is_expired(999));
        assert!(session.is_expired(1_000));
        assert!(session.is_expired(2_000));

        // Sessions without an expiry never count as expired locally
        let open_ended = Session { expires_at: 0, ..session };
        assert!(!open_ended.is_expired(i64::MAX - 1));
    }

    #[test]
    fn test_session_round_trips_through_storage_encoding() {
        let session = Session {
            access_token: "tok".into(),
            refresh_token: "ref".into(),
            expires_at: 1_756_400_000,
            user: User {
                id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
                email: None,
            },
        };
        let encoded = serde_json::to_string(&session).unwrap();
        let decoded: Session = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, session);
    }
}
