pub mod client;
pub mod error;
pub mod host;
pub mod octocrab_host;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::create_client;
pub use error::HostError;
pub use host::SourceHost;
pub use octocrab_host::OctocrabHost;
pub use types::{PullRequestRecord, Repository};
