use chrono::{DateTime, Utc};

/// A repository belonging to the organization being reported on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub owner: String, // owner/organization login
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
        }
    }

    /// Return "owner/name"
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// An open pull request as returned by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    pub title: String,
    pub url: String,      // API resource URL
    pub html_url: String, // browsable URL
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
