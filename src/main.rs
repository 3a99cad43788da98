//! gh-provision - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, warn};

use gh_provision::{output_report, provision, Cli, Config, GitHubClient, RunReport};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting gh-provision v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={:?}, api_url={:?}, csv_dir={}, stages={:?}, dry_run={}, output={}",
        cli.org,
        cli.api_url,
        cli.csv_dir.display(),
        cli.stages,
        cli.dry_run,
        cli.output
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> gh_provision::Result<()> {
    let config = Config::from_cli(cli)?;
    let client = GitHubClient::from_config(&config);

    let mut report = RunReport::new(&config.org, config.dry_run);
    let outcome = provision::run(&client, &config, &mut report).await;

    // a fatal error still reports what was done before it
    if !report.stages.is_empty() {
        output_report(&report, cli.output)?;
    }
    outcome?;

    if report.has_failures() {
        warn!("Completed with some failures");
    } else {
        info!("Completed successfully");
    }
    Ok(())
}
