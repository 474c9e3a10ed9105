//! Wire types for the user API.

use serde::{Deserialize, Serialize};

/// A registered user as returned by the backend.
///
/// The `id` is assigned server-side; the client never invents one and
/// treats records as immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Backend health snapshot.
///
/// Both fields are opaque to the client; they are displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Reported status (e.g., "ok").
    pub status: String,
    /// Server-side timestamp string.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_deserializes_from_backend_shape() {
        let json = r#"{"id":1,"name":"Alice","email":"a@x.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn new_user_serializes_without_id() {
        let draft = NewUser {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Bob");
    }

    #[test]
    fn health_status_deserializes() {
        let json = r#"{"status":"ok","timestamp":"2024-01-01T00:00:00Z"}"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();

        assert_eq!(health.status, "ok");
        assert_eq!(health.timestamp, "2024-01-01T00:00:00Z");
    }
}
