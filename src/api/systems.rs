//! System API client methods

use crate::api::client::PAGE_LIMIT;
use crate::api::ApiClient;
use crate::error::{CliError, CliResult};
use crate::models::system::{SystemListResponse, SystemSummary, UpdateSystemRequest};
use uuid::Uuid;

impl ApiClient {
    /// List one page of systems
    pub async fn list_systems(&self, limit: usize, skip: usize) -> CliResult<SystemListResponse> {
        let url = format!(
            "{}/api/v1/systems?limit={}&skip={}",
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

    /// Fetch the complete system set, following pagination until an empty page
    pub async fn list_all_systems(&self) -> CliResult<Vec<SystemSummary>> {
        let mut systems: Vec<SystemSummary> = Vec::new();
        loop {
            let page = self.list_systems(PAGE_LIMIT, systems.len()).await?;
            if page.results.is_empty() {
                return Ok(systems);
            }
            systems.extend(page.results);
        }
    }

    /// Look up a system by hostname
    pub async fn get_system(&self, hostname: &str) -> CliResult<SystemSummary> {
        let systems = self.list_all_systems().await?;
        systems
            .into_iter()
            .find(|s| s.hostname == hostname)
            .ok_or_else(|| CliError::NotFound(format!("No system found with hostname {hostname}")))
    }

    /// Update a system by id
    pub async fn update_system(
        &self,
        id: Uuid,
        request: &UpdateSystemRequest,
    ) -> CliResult<SystemSummary> {
        let url = format!("{}/api/v1/systems/{}", self.config().api_url, id);

        let response = self.put_json(&url, request).await?;

        if response.status().is_success() {
            response.json().await.map_err(Into::into)
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Err(CliError::NotFound(format!("System not found: {id}")))
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Delete a system by id
    pub async fn delete_system(&self, id: Uuid) -> CliResult<()> {
        let url = format!("{}/api/v1/systems/{}", self.config().api_url, id);

        let response = self.delete(&url).await?;

        if response.status().is_success() || response.status() == reqwest::StatusCode::NO_CONTENT {
            Ok(())
        } else if response.status() == reqwest::StatusCode::NOT_FOUND {
            Err(CliError::NotFound(format!("System not found: {id}")))
        } else {
            Err(Self::api_error(response).await)
        }
    }
}
