use anyhow::Result;

use crate::github::SourceHost;
use crate::publish::{publish, CommentTarget, RenderedReport};
use crate::report::{list_all_repositories, list_open_pull_requests, Aggregator, Report, Summary};

/// What a run needs to know beyond the host connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub organization: String,
    pub target: CommentTarget,
    pub include_details: bool,
    /// Render only; nothing is posted
    pub dry_run: bool,
}

/// Totals of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub repositories: usize,
    pub open_pull_requests: usize,
    pub comments_posted: usize,
    pub rendered: RenderedReport,
}

/// Enumerate the organization's repositories and aggregate their open pull
/// requests, one repository at a time.
pub async fn collect(host: &dyn SourceHost, org: &str) -> Result<(usize, Summary, Report)> {
    let repositories = list_all_repositories(host, org).await?;
    tracing::info!(org, repositories = repositories.len(), "enumerated repositories");

    let mut aggregator = Aggregator::new();
    for repository in &repositories {
        let pulls = list_open_pull_requests(host, repository).await?;
        aggregator.record(repository, &pulls);
    }

    let (summary, report) = aggregator.finish();
    Ok((repositories.len(), summary, report))
}

/// Run the whole report: collect, render, then publish unless dry-running.
///
/// Nothing is posted until every repository has been fetched, so a failed
/// fetch leaves the tracking issue untouched.
pub async fn run_report(host: &dyn SourceHost, options: &RunOptions) -> Result<RunOutcome> {
    let (repositories, summary, report) = collect(host, &options.organization).await?;

    let open_pull_requests = crate::output::summary_total(&summary);
    tracing::info!(
        repositories,
        open_pull_requests,
        with_open = report.len(),
        "aggregated open pull requests"
    );

    let rendered = RenderedReport::render(&summary, &report, options.include_details);

    let comments_posted = if options.dry_run {
        tracing::info!(comments = rendered.comment_count(), "dry run, not posting");
        0
    } else {
        publish(host, &options.target, &rendered).await?
    };

    Ok(RunOutcome {
        repositories,
        open_pull_requests,
        comments_posted,
        rendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::{pull, repo, Call, FakeHost};
    use chrono::Duration;

    fn options(include_details: bool) -> RunOptions {
        RunOptions {
            organization: "acme".to_string(),
            target: CommentTarget {
                owner: "acme".to_string(),
                repo: "tech-team-metrics".to_string(),
                issue_number: 1,
            },
            include_details,
            dry_run: false,
        }
    }

    fn two_repo_host() -> FakeHost {
        FakeHost::new()
            .with_page(vec![repo("svc-a"), repo("svc-b")])
            .with_pulls("svc-a", vec![pull("Fix bug", 1, Duration::days(5))])
    }

    #[tokio::test]
    async fn test_collect_builds_summary_for_every_repository() {
        let host = two_repo_host();

        let (count, summary, report) = collect(&host, "acme").await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary["svc-a"], 1);
        assert_eq!(summary["svc-b"], 0);
        assert!(report.contains("svc-a"));
        assert!(!report.contains("svc-b"));
    }

    #[tokio::test]
    async fn test_end_to_end_with_details() {
        let host = two_repo_host();

        let outcome = run_report(&host, &options(true)).await.unwrap();

        assert_eq!(outcome.repositories, 2);
        assert_eq!(outcome.open_pull_requests, 1);
        assert_eq!(outcome.comments_posted, 2);

        let comments = host.comments();
        assert_eq!(comments.len(), 2);
        match &comments[0] {
            Call::Comment { body, .. } => assert_eq!(
                body,
                "## Open PRs Summary \n| Name | Open PRs | \n| - | - | \n|svc-a| 1| \n | Total | 1 | \n"
            ),
            other => panic!("unexpected call {:?}", other),
        }
        match &comments[1] {
            Call::Comment { body, .. } => assert_eq!(
                body,
                "## svc-a \n| Title | Url | Age| \n| - | - | - | \n|Fix bug| https://github.com/acme/svc/pull/1| 5 | \n"
            ),
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_summary_only_posts_one_comment() {
        let host = two_repo_host();

        let outcome = run_report(&host, &options(false)).await.unwrap();

        assert_eq!(outcome.comments_posted, 1);
        assert_eq!(host.comments().len(), 1);
    }

    #[tokio::test]
    async fn test_fetches_sequentially_in_enumeration_order() {
        let host = FakeHost::new()
            .with_page(vec![repo("b"), repo("a")])
            .with_page(vec![repo("c")]);

        collect(&host, "acme").await.unwrap();

        let pulls: Vec<_> = host
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ListPulls { repo, .. } => Some(repo),
                _ => None,
            })
            .collect();
        assert_eq!(pulls, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_posts_nothing() {
        let host = FakeHost::new()
            .with_page(vec![repo("svc-a"), repo("svc-b")])
            .with_pulls("svc-a", vec![pull("Fix bug", 1, Duration::days(5))])
            .failing_pulls_for("svc-b");

        let err = run_report(&host, &options(true)).await.unwrap_err();

        assert!(format!("{:#}", err).contains("acme/svc-b"));
        assert!(host.comments().is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_renders_without_posting() {
        let host = two_repo_host();
        let mut opts = options(true);
        opts.dry_run = true;

        let outcome = run_report(&host, &opts).await.unwrap();

        assert_eq!(outcome.comments_posted, 0);
        assert_eq!(outcome.rendered.comment_count(), 2);
        assert!(host.comments().is_empty());
    }
}
