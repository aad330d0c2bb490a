//! System (managed host) data models for the CLI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// System summary from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSummary {
    pub id: Uuid,
    pub hostname: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub allow_multi_factor_authentication: Option<bool>,
    #[serde(default)]
    pub allow_public_key_authentication: Option<bool>,
    #[serde(default)]
    pub allow_ssh_password_authentication: Option<bool>,
    #[serde(default)]
    pub allow_ssh_root_login: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub last_contact: Option<DateTime<Utc>>,
}

/// Paginated system list response
#[derive(Debug, Serialize, Deserialize)]
pub struct SystemListResponse {
    pub results: Vec<SystemSummary>,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
}

/// Update system request
#[derive(Debug, Default, Serialize)]
pub struct UpdateSystemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multi_factor_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_public_key_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_ssh_password_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_ssh_root_login: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl UpdateSystemRequest {
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|v| v.as_object().map(|o| o.is_empty()).unwrap_or(true))
            .unwrap_or(true)
    }
}
