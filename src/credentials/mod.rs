use std::fmt;

/// Environment variable checked first for a GitHub token
pub const ENV_TOKEN_VAR: &str = "ORG_PR_REPORT_TOKEN";

/// Fallback environment variable, as set by GitHub Actions
pub const ENV_FALLBACK_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, PartialEq, Eq)]
pub enum CredentialError {
    TokenNotFound,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::TokenNotFound => write!(
                f,
                "No GitHub token found. Pass --token or set {} or {}",
                ENV_TOKEN_VAR, ENV_FALLBACK_TOKEN_VAR
            ),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Trim a candidate token, treating blank values as absent
fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Look up a token in the given environment variable
pub fn get_token_from_env(var: &str) -> Option<String> {
    std::env::var(var).ok().and_then(|val| non_empty(&val))
}

/// Pick the token from the command line, then the environment.
///
/// `lookup` resolves an environment variable name; production code passes
/// [`get_token_from_env`].
pub fn resolve_token<F>(cli_token: Option<&str>, lookup: F) -> Result<String, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    cli_token
        .and_then(non_empty)
        .or_else(|| lookup(ENV_TOKEN_VAR))
        .or_else(|| lookup(ENV_FALLBACK_TOKEN_VAR))
        .ok_or(CredentialError::TokenNotFound)
}
