use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use org_pr_report::exit::{exit_code_for, EXIT_AUTH, EXIT_CONFIG, EXIT_SUCCESS};

#[derive(Parser, Debug)]
#[command(name = "org-pr-report")]
#[command(about = "Post a summary of open PRs across a GitHub organization to a tracking issue", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/org-pr-report/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Organization whose repositories are scanned
    #[arg(long = "org")]
    organization: Option<String>,

    /// Repository holding the tracking issue (defaults to tech-team-metrics)
    #[arg(long)]
    report_repo: Option<String>,

    /// Tracking issue number (defaults to 1; required with --details)
    #[arg(long)]
    issue: Option<String>,

    /// Also post one detail comment per repository with open PRs
    #[arg(long, conflicts_with = "no_details")]
    details: bool,

    /// Post the summary only, even if the config file enables details
    #[arg(long)]
    no_details: bool,

    /// GitHub API base URL (for GitHub Enterprise)
    #[arg(long)]
    api_base: Option<String>,

    /// GitHub token (defaults to ORG_PR_REPORT_TOKEN, then GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Print the comments instead of posting them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let start_time = Instant::now();

    if let Err(e) = org_pr_report::logging::init(cli.verbose) {
        eprintln!("Logging error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match org_pr_report::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let overrides = org_pr_report::config::Overrides {
        organization: cli.organization,
        report_repository: cli.report_repo,
        issue_number: cli.issue,
        include_details: match (cli.details, cli.no_details) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        api_base: cli.api_base,
        dry_run: cli.dry_run,
    };
    let settings = match org_pr_report::config::resolve_settings(config, overrides) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let token = match org_pr_report::credentials::resolve_token(
        cli.token.as_deref(),
        org_pr_report::credentials::get_token_from_env,
    ) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Credential error: {}", e);
            std::process::exit(EXIT_AUTH);
        }
    };

    // Create GitHub client
    let client = match org_pr_report::github::create_client(&token, settings.api_base.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create GitHub client: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let host = org_pr_report::github::OctocrabHost::new(client);

    let options = org_pr_report::pipeline::RunOptions {
        organization: settings.organization,
        target: settings.target,
        include_details: settings.include_details,
        dry_run: settings.dry_run,
    };

    tracing::info!(
        org = %options.organization,
        issue = %options.target.short_ref(),
        details = options.include_details,
        "starting open PR report"
    );

    match org_pr_report::pipeline::run_report(&host, &options).await {
        Ok(outcome) => {
            if options.dry_run {
                let bodies: Vec<&str> = outcome.rendered.bodies().collect();
                println!("{}", bodies.join("\n"));
            }
            tracing::info!(
                repositories = outcome.repositories,
                open_pull_requests = outcome.open_pull_requests,
                comments_posted = outcome.comments_posted,
                elapsed = ?start_time.elapsed(),
                "report complete"
            );
        }
        Err(e) => {
            eprintln!("Report failed: {:#}", e);
            std::process::exit(exit_code_for(&e));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
