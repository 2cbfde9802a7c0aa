use anyhow::{Context, Result};

use crate::github::SourceHost;
use crate::output::{render_detail_tables, render_summary_table};
use crate::report::{Report, Summary};

/// The issue that receives the report comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTarget {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}

impl CommentTarget {
    /// Return "owner/repo#number"
    pub fn short_ref(&self) -> String {
        format!("{}/{}#{}", self.owner, self.repo, self.issue_number)
    }
}

/// All comment bodies for one run, in posting order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub summary: String,
    /// (repository name, body), in report order
    pub details: Vec<(String, String)>,
}

impl RenderedReport {
    /// Render the summary and, when `include_details` is set, one detail
    /// table per repository with open pull requests.
    pub fn render(summary: &Summary, report: &Report, include_details: bool) -> Self {
        let details = if include_details {
            render_detail_tables(report)
        } else {
            Vec::new()
        };

        Self {
            summary: render_summary_table(summary),
            details,
        }
    }

    /// Comment bodies in posting order
    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.summary.as_str())
            .chain(self.details.iter().map(|(_, body)| body.as_str()))
    }

    pub fn comment_count(&self) -> usize {
        1 + self.details.len()
    }
}

/// Post every comment of `rendered` to `target`, one at a time.
///
/// Stops at the first rejected comment; comments already posted stay.
/// Returns the number of comments posted.
pub async fn publish(
    host: &dyn SourceHost,
    target: &CommentTarget,
    rendered: &RenderedReport,
) -> Result<usize> {
    host.create_issue_comment(&target.owner, &target.repo, target.issue_number, &rendered.summary)
        .await
        .with_context(|| format!("Failed to post summary comment to {}", target.short_ref()))?;
    tracing::info!(issue = %target.short_ref(), "posted summary comment");

    let mut posted = 1;
    for (repo, body) in &rendered.details {
        host.create_issue_comment(&target.owner, &target.repo, target.issue_number, body)
            .await
            .with_context(|| {
                format!(
                    "Failed to post detail comment for {} to {}",
                    repo,
                    target.short_ref()
                )
            })?;
        tracing::debug!(repo = %repo, "posted detail comment");
        posted += 1;
    }

    Ok(posted)
}
