use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::github::{PullRequestRecord, Repository};

/// Open pull request count per repository name.
///
/// Every repository seen by the aggregator has an entry, including those
/// with no open pull requests.
pub type Summary = HashMap<String, usize>;

/// One open pull request as shown in a repository's detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub title: String,
    pub url: String, // browsable URL
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: String,
    pub age_in_days: i64,
}

impl DetailEntry {
    /// Build a detail entry, computing the age relative to `now`
    pub fn from_record(record: &PullRequestRecord, now: DateTime<Utc>) -> Self {
        Self {
            title: record.title.clone(),
            url: record.html_url.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            author: record.author.clone(),
            age_in_days: age_in_days(record.created_at, now),
        }
    }
}

/// Whole days elapsed between `created_at` and `now`, truncated.
///
/// Timestamps in the future (clock skew) count as zero days.
pub fn age_in_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_days().max(0)
}

/// Detail entries per repository, keyed in the order repositories were
/// first seen with an open pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, Vec<DetailEntry>)>,
    index: HashMap<String, usize>, // repository name -> position in `entries`
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for `repo`, creating the key on first use
    pub fn push(&mut self, repo: &str, entry: DetailEntry) {
        match self.index.get(repo) {
            Some(&position) => self.entries[position].1.push(entry),
            None => {
                self.index.insert(repo.to_string(), self.entries.len());
                self.entries.push((repo.to_string(), vec![entry]));
            }
        }
    }

    pub fn get(&self, repo: &str) -> Option<&[DetailEntry]> {
        self.index
            .get(repo)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains(&self, repo: &str) -> bool {
        self.index.contains_key(repo)
    }

    /// Repository names in insertion order
    pub fn repositories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DetailEntry])> {
        self.entries
            .iter()
            .map(|(name, list)| (name.as_str(), list.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates the summary and detail report for one run.
#[derive(Debug, Default)]
pub struct Aggregator {
    summary: Summary,
    report: Report,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the open pull requests of one repository.
    ///
    /// Must be called once per repository, in enumeration order.
    pub fn record(&mut self, repository: &Repository, pulls: &[PullRequestRecord]) {
        self.summary.insert(repository.name.clone(), pulls.len());

        for pull in pulls {
            let entry = DetailEntry::from_record(pull, Utc::now());
            self.report.push(&repository.name, entry);
        }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn finish(self) -> (Summary, Report) {
        (self.summary, self.report)
    }
}
