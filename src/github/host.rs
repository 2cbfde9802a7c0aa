use async_trait::async_trait;

use super::error::HostError;
use super::types::{PullRequestRecord, Repository};

/// The capabilities the report needs from a source-control host.
///
/// Implementations perform exactly one request per call. Callers await each
/// call before issuing the next.
#[async_trait]
pub trait SourceHost: Send + Sync {
    /// List one page of the organization's repositories.
    ///
    /// An empty page signals that there are no more repositories.
    async fn list_repositories_page(
        &self,
        org: &str,
        per_page: u8,
        page: u32,
    ) -> Result<Vec<Repository>, HostError>;

    /// List the open pull requests of a repository (a single page).
    async fn list_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestRecord>, HostError>;

    /// Post a comment on an issue.
    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<(), HostError>;
}
