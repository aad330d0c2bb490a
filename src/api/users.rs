//! User API client methods

use crate::api::client::PAGE_LIMIT;
use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::user::{CreateUserRequest, UpdateUserRequest, UserListResponse, UserSummary};
use uuid::Uuid;

impl ApiClient {
    /// List one page of users
    pub async fn list_users(&self, limit: usize, skip: usize) -> CliResult<UserListResponse> {
        let url = format!(
            "{}/api/v1/systemusers?limit={}&skip={}",
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

    /// Fetch the complete user set, following pagination until an empty page
    pub async fn list_all_users(&self) -> CliResult<Vec<UserSummary>> {
        let mut users: Vec<UserSummary> = Vec::new();
        loop {
            let page = self.list_users(PAGE_LIMIT, users.len()).await?;
            if page.results.is_empty() {
                return Ok(users);
            }
            users.extend(page.results);
        }
    }

    /// Create a new user
    pub async fn create_user(&self, request: &CreateUserRequest) -> CliResult<UserSummary> {
        let url = format!("{}/api/v1/systemusers", self.config().api_url);

        let response = self.post_json(&url, request).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else if response.status() == reqwest::StatusCode::CONFLICT {
            Err(CliError::Conflict(format!(
                "User already exists: {}",
                request.username
            )))
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Update a user by id
    pub async fn update_user(
        &self,
        id: Uuid,
        request: &UpdateUserRequest,
    ) -> CliResult<UserSummary> {
        let url = format!("{}/api/v1/systemusers/{}", self.config().api_url, id);

        let response = self.put_json(&url, request).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Err(CliError::NotFound(format!("User not found: {id}")))
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Delete a user by id
    pub async fn delete_user(&self, id: Uuid) -> CliResult<()> {
        let url = format!("{}/api/v1/systemusers/{}", self.config().api_url, id);

        let response = self.delete(&url).await?;

        if response.status().is_success() || response.status() == reqwest::StatusCode::NO_CONTENT {
            Ok(())
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Err(CliError::NotFound(format!("User not found: {id}")))
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Look up a user by username
    pub async fn get_user(&self, username: &str) -> CliResult<UserSummary> {
        let users = self.list_all_users().await?;
        users
            .into_iter()
            .find(|u| u.username == username)
            .ok_or_else(|| CliError::NotFound(format!("No user found for username: {username}")))
    }

    /// Resolve a username to the directory's user id
    pub async fn get_user_id(&self, username: &str) -> CliResult<Uuid> {
        Ok(self.get_user(username).await?.id)
    }
}
