//! Group data models for the CLI

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group summary from the API
///
/// The `type` field is the wire string `"user_group"` or `"system_group"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: String,
}

/// Create group request (posted to the kind-specific endpoint)
#[derive(Debug, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Membership mutation posted to a group's members endpoint
#[derive(Debug, Serialize)]
pub struct GroupMemberRequest {
    pub id: Uuid,
    pub op: String,
    #[serde(rename = "type")]
    pub member_type: String,
}

impl GroupMemberRequest {
    /// Request adding a user to a user group
    pub fn add_user(user_id: Uuid) -> Self {
        Self {
            id: user_id,
            op: "add".to_string(),
            member_type: "user".to_string(),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_summary_deserializes_type_field() {
        let json = r#"{"id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
                       "name": "admin", "type": "user_group"}"#;
        let group: GroupSummary = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "admin");
        assert_eq!(group.group_type, "user_group");
    }

    #[test]
    fn test_member_request_add_user() {
        let user_id = Uuid::new_v4();
        let request = GroupMemberRequest::add_user(user_id);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"op\":\"add\""));
        assert!(json.contains("\"type\":\"user\""));
    }
}
