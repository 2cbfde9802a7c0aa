use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http::StatusCode;
use octocrab::Octocrab;
use serde::Deserialize;

use super::error::HostError;
use super::host::SourceHost;
use super::types::{PullRequestRecord, Repository};

/// `SourceHost` backed by the GitHub REST API.
#[derive(Clone)]
pub struct OctocrabHost {
    client: Octocrab,
}

impl OctocrabHost {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct ApiRepository {
    name: String,
    owner: ApiUser,
}

#[derive(Debug, Deserialize)]
struct ApiPullRequest {
    title: String,
    url: String,
    html_url: String,
    user: ApiUser,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ApiRepository> for Repository {
    fn from(repo: ApiRepository) -> Self {
        Repository {
            name: repo.name,
            owner: repo.owner.login,
        }
    }
}

impl From<ApiPullRequest> for PullRequestRecord {
    fn from(pr: ApiPullRequest) -> Self {
        PullRequestRecord {
            title: pr.title,
            url: pr.url,
            html_url: pr.html_url,
            author: pr.user.login,
            created_at: pr.created_at,
            updated_at: pr.updated_at,
        }
    }
}

/// Classify an octocrab error into the host error taxonomy
fn map_api_error(operation: &str, error: octocrab::Error) -> HostError {
    let operation = operation.to_string();
    match error {
        octocrab::Error::GitHub { source, .. } => {
            let message = format!("{} {}", source.status_code, source.message);
            match source.status_code {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    HostError::Authentication { operation, message }
                }
                StatusCode::NOT_FOUND => HostError::NotFound { operation, message },
                _ => HostError::Api { operation, message },
            }
        }
        octocrab::Error::Hyper { .. }
        | octocrab::Error::Http { .. }
        | octocrab::Error::Service { .. } => HostError::Network {
            operation,
            message: error.to_string(),
        },
        other => HostError::Api {
            operation,
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl SourceHost for OctocrabHost {
    async fn list_repositories_page(
        &self,
        org: &str,
        per_page: u8,
        page: u32,
    ) -> Result<Vec<Repository>, HostError> {
        let per_page = per_page.to_string();
        let page = page.to_string();
        let params = [("per_page", per_page.as_str()), ("page", page.as_str())];

        let repos: Vec<ApiRepository> = self
            .client
            .get(format!("/orgs/{}/repos", org), Some(&params))
            .await
            .map_err(|e| map_api_error("list organization repositories", e))?;

        Ok(repos.into_iter().map(Repository::from).collect())
    }

    async fn list_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestRecord>, HostError> {
        let params = [("state", "open")];

        let pulls: Vec<ApiPullRequest> = self
            .client
            .get(format!("/repos/{}/{}/pulls", owner, repo), Some(&params))
            .await
            .map_err(|e| map_api_error("list pull requests", e))?;

        Ok(pulls.into_iter().map(PullRequestRecord::from).collect())
    }

    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<(), HostError> {
        let payload = serde_json::json!({ "body": body });

        let _created: serde_json::Value = self
            .client
            .post(
                format!("/repos/{}/{}/issues/{}/comments", owner, repo, issue_number),
                Some(&payload),
            )
            .await
            .map_err(|e| map_api_error("create issue comment", e))?;

        Ok(())
    }
}
