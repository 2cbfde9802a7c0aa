//! Collection and aggregation of open pull requests across an organization.

pub mod aggregate;
pub mod enumerate;
pub mod fetch;

pub use aggregate::{age_in_days, Aggregator, DetailEntry, Report, Summary};
pub use enumerate::{list_all_repositories, REPOSITORY_PAGE_SIZE};
pub use fetch::list_open_pull_requests;
