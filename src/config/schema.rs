use serde::{Deserialize, Serialize};

/// Repository that holds the tracking issue, when not configured
pub const DEFAULT_REPORT_REPOSITORY: &str = "tech-team-metrics";

/// Tracking issue number, when not configured
pub const DEFAULT_ISSUE_NUMBER: u64 = 1;

/// Contents of the YAML config file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Organization whose repositories are scanned
    #[serde(default)]
    pub organization: Option<String>,

    /// API base URL, e.g. "https://github.example.com/api/v3"
    #[serde(default)]
    pub api_base: Option<String>,

    #[serde(default)]
    pub report: Option<ReportConfig>,
}

/// Where and how the report is published.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Repository (in the organization) holding the tracking issue
    #[serde(default)]
    pub repository: Option<String>,

    /// Tracking issue number
    #[serde(default)]
    pub issue_number: Option<u64>,

    /// Post a detail comment per repository after the summary
    #[serde(default)]
    pub include_details: Option<bool>,
}
