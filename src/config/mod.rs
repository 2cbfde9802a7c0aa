mod schema;

pub use schema::{Config, ReportConfig, DEFAULT_ISSUE_NUMBER, DEFAULT_REPORT_REPOSITORY};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::publish::CommentTarget;

/// Get the config directory path (~/.config/org-pr-report/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("org-pr-report"))
}

/// Get the default config file path (~/.config/org-pr-report/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, the default path is
///   tried and a missing file there yields an empty config.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => match get_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub organization: Option<String>,
    pub report_repository: Option<String>,
    pub issue_number: Option<String>,
    /// `Some(false)` switches off details enabled in the config file
    pub include_details: Option<bool>,
    pub api_base: Option<String>,
    pub dry_run: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub organization: String,
    pub target: CommentTarget,
    pub include_details: bool,
    pub api_base: Option<String>,
    pub dry_run: bool,
}

/// Parse a tracking issue number, which must be a positive integer
pub fn parse_issue_number(value: &str) -> Result<u64> {
    let number: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid issue number '{}': expected a positive integer", value))?;

    if number == 0 {
        anyhow::bail!("Invalid issue number '{}': expected a positive integer", value);
    }

    Ok(number)
}

/// Check that an API base is an absolute URL
fn validate_api_base(value: &str) -> Result<String> {
    let uri: http::Uri = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid GitHub API base URL '{}'", value))?;

    if uri.scheme().is_none() || uri.host().is_none() {
        anyhow::bail!("Invalid GitHub API base URL '{}': expected an absolute URL", value);
    }

    Ok(value.trim().to_string())
}

/// Merge the config file with command line overrides and validate the result
pub fn resolve_settings(config: Config, overrides: Overrides) -> Result<Settings> {
    let report = config.report.unwrap_or_default();

    let organization = overrides
        .organization
        .or(config.organization)
        .map(|org| org.trim().to_string())
        .filter(|org| !org.is_empty())
        .context("No organization configured. Pass --org or set `organization` in the config file")?;

    let include_details = overrides
        .include_details
        .or(report.include_details)
        .unwrap_or(false);

    let issue_number = match overrides.issue_number {
        Some(value) => parse_issue_number(&value)?,
        None => match report.issue_number {
            Some(0) => anyhow::bail!("Invalid issue number '0': expected a positive integer"),
            Some(number) => number,
            None if include_details => anyhow::bail!(
                "No issue number configured for the detail report. Pass --issue or set `report.issue_number` in the config file"
            ),
            None => DEFAULT_ISSUE_NUMBER,
        },
    };

    let repository = overrides
        .report_repository
        .or(report.repository)
        .unwrap_or_else(|| DEFAULT_REPORT_REPOSITORY.to_string());

    Ok(Settings {
        target: CommentTarget {
            owner: organization.clone(),
            repo: repository,
            issue_number,
        },
        organization,
        include_details,
        api_base: overrides
            .api_base
            .or(config.api_base)
            .map(|base| validate_api_base(&base))
            .transpose()?,
        dry_run: overrides.dry_run,
    })
}
