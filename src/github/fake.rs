//! In-memory `SourceHost` used by the pipeline tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::error::HostError;
use super::host::SourceHost;
use super::types::{PullRequestRecord, Repository};

/// A request observed by [`FakeHost`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListRepositories { org: String, per_page: u8, page: u32 },
    ListPulls { owner: String, repo: String },
    Comment { owner: String, repo: String, issue_number: u64, body: String },
}

#[derive(Default)]
pub struct FakeHost {
    pages: Vec<Vec<Repository>>,
    pulls: HashMap<String, Vec<PullRequestRecord>>,
    failing_repo: Option<String>,
    failing_comment: Option<usize>,
    calls: Mutex<Vec<Call>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `page` as the next page of repositories.
    pub fn with_page(mut self, page: Vec<Repository>) -> Self {
        self.pages.push(page);
        self
    }

    pub fn with_pulls(mut self, repo: &str, pulls: Vec<PullRequestRecord>) -> Self {
        self.pulls.insert(repo.to_string(), pulls);
        self
    }

    /// Fail the pull request listing for `repo`.
    pub fn failing_pulls_for(mut self, repo: &str) -> Self {
        self.failing_repo = Some(repo.to_string());
        self
    }

    /// Fail the nth (0-based) comment post.
    pub fn failing_comment(mut self, index: usize) -> Self {
        self.failing_comment = Some(index);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn comments(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Comment { .. }))
            .collect()
    }

    pub fn page_requests(&self) -> Vec<u32> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ListRepositories { page, .. } => Some(page),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SourceHost for FakeHost {
    async fn list_repositories_page(
        &self,
        org: &str,
        per_page: u8,
        page: u32,
    ) -> Result<Vec<Repository>, HostError> {
        self.record(Call::ListRepositories {
            org: org.to_string(),
            per_page,
            page,
        });
        // Pages past the injected data are empty.
        Ok(page
            .checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .cloned()
            .unwrap_or_default())
    }

    async fn list_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequestRecord>, HostError> {
        self.record(Call::ListPulls {
            owner: owner.to_string(),
            repo: repo.to_string(),
        });
        if self.failing_repo.as_deref() == Some(repo) {
            return Err(HostError::Network {
                operation: "list pull requests".to_string(),
                message: "connection reset".to_string(),
            });
        }
        Ok(self.pulls.get(repo).cloned().unwrap_or_default())
    }

    async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<(), HostError> {
        let posted = self.comments().len();
        if self.failing_comment == Some(posted) {
            return Err(HostError::NotFound {
                operation: "create issue comment".to_string(),
                message: format!("issue #{} does not exist", issue_number),
            });
        }
        self.record(Call::Comment {
            owner: owner.to_string(),
            repo: repo.to_string(),
            issue_number,
            body: body.to_string(),
        });
        Ok(())
    }
}

pub fn repo(name: &str) -> Repository {
    Repository::new("acme", name)
}

/// A pull request record created `age` ago.
pub fn pull(title: &str, number: u64, age: Duration) -> PullRequestRecord {
    let created_at: DateTime<Utc> = Utc::now() - age;
    PullRequestRecord {
        title: title.to_string(),
        url: format!("https://api.github.com/repos/acme/svc/pulls/{}", number),
        html_url: format!("https://github.com/acme/svc/pull/{}", number),
        author: "octocat".to_string(),
        created_at,
        updated_at: created_at,
    }
}
