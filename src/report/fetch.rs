use anyhow::{Context, Result};

use crate::github::{PullRequestRecord, Repository, SourceHost};

/// Fetch the open pull requests of one repository.
///
/// Only the first page of results is requested.
pub async fn list_open_pull_requests(
    host: &dyn SourceHost,
    repository: &Repository,
) -> Result<Vec<PullRequestRecord>> {
    let pulls = host
        .list_open_pull_requests(&repository.owner, &repository.name)
        .await
        .with_context(|| {
            format!("Failed to list open pull requests of {}", repository.full_name())
        })?;

    tracing::debug!(repo = %repository.full_name(), open = pulls.len(), "fetched pull requests");

    Ok(pulls)
}
