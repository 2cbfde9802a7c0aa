use anyhow::{Context, Result};

use crate::github::{Repository, SourceHost};

/// Number of repositories requested per page (the API maximum)
pub const REPOSITORY_PAGE_SIZE: u8 = 100;

/// List every repository of `org`, in the order the host returns them.
///
/// Pages are requested one after another starting at page 1 until a page
/// comes back empty. Any failed page aborts the enumeration.
pub async fn list_all_repositories(host: &dyn SourceHost, org: &str) -> Result<Vec<Repository>> {
    let mut repositories = Vec::new();
    let mut page: u32 = 1;

    loop {
        let batch = host
            .list_repositories_page(org, REPOSITORY_PAGE_SIZE, page)
            .await
            .with_context(|| format!("Failed to list repositories of {} (page {})", org, page))?;

        tracing::debug!(org, page, count = batch.len(), "fetched repository page");

        if batch.is_empty() {
            break;
        }

        repositories.extend(batch);
        page += 1;
    }

    Ok(repositories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::{repo, Call, FakeHost};

    #[tokio::test]
    async fn test_concatenates_pages_in_order() {
        let host = FakeHost::new()
            .with_page(vec![repo("a"), repo("b"), repo("c")])
            .with_page(vec![repo("d"), repo("e")]);

        let repos = list_all_repositories(&host, "acme").await.unwrap();

        let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_stops_at_first_empty_page() {
        let host = FakeHost::new()
            .with_page(vec![repo("a")])
            .with_page(vec![repo("b")]);

        list_all_repositories(&host, "acme").await.unwrap();

        // Two data pages plus the terminating empty one
        assert_eq!(host.page_requests(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_requests_fixed_page_size() {
        let host = FakeHost::new().with_page(vec![repo("a")]);

        list_all_repositories(&host, "acme").await.unwrap();

        assert_eq!(
            host.calls()[0],
            Call::ListRepositories {
                org: "acme".to_string(),
                per_page: 100,
                page: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_empty_organization() {
        let host = FakeHost::new();

        let repos = list_all_repositories(&host, "acme").await.unwrap();

        assert!(repos.is_empty());
        assert_eq!(host.page_requests(), vec![1]);
    }

    #[tokio::test]
    async fn test_does_not_reorder_repositories() {
        let host = FakeHost::new().with_page(vec![repo("zeta"), repo("alpha")]);

        let repos = list_all_repositories(&host, "acme").await.unwrap();

        assert_eq!(repos[0].name, "zeta");
        assert_eq!(repos[1].name, "alpha");
    }
}
