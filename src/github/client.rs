use anyhow::{Context, Result};
use octocrab::Octocrab;

/// Create an authenticated GitHub client using a personal access token
///
/// `api_base` overrides the public API endpoint, e.g. for GitHub Enterprise
/// (`https://github.example.com/api/v3`) or a local mock server.
pub fn create_client(token: &str, api_base: Option<&str>) -> Result<Octocrab> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());

    if let Some(base) = api_base {
        builder = builder
            .base_uri(base)
            .with_context(|| format!("Invalid GitHub API base URL: {}", base))?;
    }

    builder.build().context("Failed to create GitHub client")
}
