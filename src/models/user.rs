//! User data models for the CLI

use crate::models::datafile::UserEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User summary from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub sudo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Paginated user list response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub results: Vec<UserSummary>,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
}

/// Create user request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firstname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lastname: String,
    pub allow_public_key: bool,
    pub ldap_binding_user: bool,
    pub passwordless_sudo: bool,
    pub sudo: bool,
}

impl CreateUserRequest {
    /// Build a request with the directory's default account flags
    pub fn new(username: String, email: String, firstname: String, lastname: String) -> Self {
        Self {
            username,
            email,
            firstname,
            lastname,
            allow_public_key: true,
            ldap_binding_user: false,
            passwordless_sudo: false,
            sudo: false,
        }
    }
}

impl From<&UserEntry> for CreateUserRequest {
    fn from(entry: &UserEntry) -> Self {
        Self::new(
            entry.username.clone(),
            entry.email.clone(),
            entry.firstname.clone(),
            entry.lastname.clone(),
        )
    }
}

/// Update user request
#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.firstname.is_none() && self.lastname.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let request = CreateUserRequest::new(
            "dave".to_string(),
            "dave@example.com".to_string(),
            String::new(),
            String::new(),
        );
        assert!(request.allow_public_key);
        assert!(!request.sudo);
        assert!(!request.ldap_binding_user);
        assert!(!request.passwordless_sudo);
    }

    #[test]
    fn test_create_request_skips_empty_names() {
        let request = CreateUserRequest::new(
            "dave".to_string(),
            "dave@example.com".to_string(),
            String::new(),
            String::new(),
        );
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("firstname"));
        assert!(!json.contains("lastname"));
    }

    #[test]
    fn test_create_request_from_entry() {
        let entry = UserEntry {
            username: "dave".to_string(),
            email: "d@x.com".to_string(),
            firstname: "Dave".to_string(),
            lastname: "Smith".to_string(),
        };
        let request = CreateUserRequest::from(&entry);
        assert_eq!(request.username, "dave");
        assert_eq!(request.firstname, "Dave");
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(UpdateUserRequest::default().is_empty());
        let request = UpdateUserRequest {
            email: Some("x@y.com".to_string()),
            ..Default::default()
        };
        assert!(!request.is_empty());
    }

    #[test]
    fn test_user_summary_tolerates_missing_optional_fields() {
        let json = r#"{"id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
                       "username": "dave", "email": "d@x.com"}"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "dave");
        assert_eq!(user.firstname, "");
        assert!(user.created_at.is_none());
    }
}
