//! Group API client methods
//!
//! Groups live on the v2 API: one shared listing endpoint plus
//! kind-specific endpoints for creation and deletion.

use crate::api::client::PAGE_LIMIT;
use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::datafile::GroupKind;
use crate::models::group::{CreateGroupRequest, GroupMemberRequest, GroupSummary};
use uuid::Uuid;

impl ApiClient {
    /// List one page of groups. The v2 endpoint returns a bare JSON array.
    pub async fn list_groups(&self, limit: usize, skip: usize) -> CliResult<Vec<GroupSummary>> {
        let url = format!(
            "{}/api/v2/groups?limit={}&skip={}",
            self.config().api_url,
            limit,
            skip
        );

        let response = self.get(&url).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Fetch the complete group set, following pagination until an empty page
    pub async fn list_all_groups(&self) -> CliResult<Vec<GroupSummary>> {
        let mut groups: Vec<GroupSummary> = Vec::new();
        loop {
            let page = self.list_groups(PAGE_LIMIT, groups.len()).await?;
            if page.is_empty() {
                return Ok(groups);
            }
            groups.extend(page);
        }
    }

    /// Create a group of the given kind
    pub async fn create_group(&self, name: &str, kind: GroupKind) -> CliResult<GroupSummary> {
        let url = format!(
            "{}/api/v2/{}",
            self.config().api_url,
            Self::group_endpoint(kind)
        );
        let request = CreateGroupRequest {
            name: name.to_string(),
        };

        let response = self.post_json(&url, &request).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else if response.status() == reqwest::StatusCode::CONFLICT {
            Err(CliError::Conflict(format!("Group already exists: {name}")))
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Delete a group by id and kind
    pub async fn delete_group(&self, id: Uuid, kind: GroupKind) -> CliResult<()> {
        let url = format!(
            "{}/api/v2/{}/{}",
            self.config().api_url,
            Self::group_endpoint(kind),
            id
        );

        let response = self.delete(&url).await?;

        if response.status().is_success() || response.status() == reqwest::StatusCode::NO_CONTENT {
            Ok(())
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Err(CliError::NotFound(format!("Group not found: {id}")))
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Look up a group by name and kind. Returns `None` when absent.
    pub async fn find_group(
        &self,
        name: &str,
        kind: GroupKind,
    ) -> CliResult<Option<GroupSummary>> {
        let groups = self.list_all_groups().await?;
        Ok(groups
            .into_iter()
            .find(|g| g.name == name && g.group_type == kind.api_type()))
    }

    /// Add a user to a user group
    pub async fn bind_user_to_group(&self, user_id: Uuid, group_id: Uuid) -> CliResult<()> {
        let url = format!(
            "{}/api/v2/usergroups/{}/members",
            self.config().api_url,
            group_id
        );
        let request = GroupMemberRequest::add_user(user_id);

        let response = self.post_json(&url, &request).await?;

        if response.status().is_success() || response.status() == reqwest::StatusCode::NO_CONTENT {
            Ok(())
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Err(CliError::NotFound(format!("Group not found: {group_id}")))
        } else {
            Err(Self::api_error(response).await)
        }
    }

    fn group_endpoint(kind: GroupKind) -> &'static str {
        match kind {
            GroupKind::User => "usergroups",
            GroupKind::System => "systemgroups",
        }
    }
}
