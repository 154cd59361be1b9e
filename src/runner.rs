use std::io;
use std::time::Duration;

use anyhow::bail;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use gitprobe::config::ScanConfig;
use gitprobe::{checker, http_client, loader, report};

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    let config = ScanConfig {
        verbose: cli.verbose,
        debug: cli.debug,
        timeout_secs: cli.timeout,
        concurrency: usize::from(cli.concurrency),
    };

    // All diagnostics go to stderr: stdout carries nothing but the report.
    let env_filter =
        EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if !cli.timeout.is_finite() || cli.timeout <= 0.0 {
        bail!(
            "timeout must be a positive number of seconds, got {}",
            cli.timeout
        );
    }
    // from_secs_f64 also panics past Duration's range, not only on NaN/negative.
    if Duration::try_from_secs_f64(cli.timeout).is_err() {
        bail!("timeout of {} seconds is too large", cli.timeout);
    }

    let urls = loader::load_urls(&cli.filename)?;
    tracing::info!(
        file = %cli.filename.display(),
        urls = urls.len(),
        timeout_secs = config.timeout_secs,
        concurrency = config.concurrency,
        "starting scan"
    );

    let client = http_client::build_client()?;
    let stdout = io::stdout();
    if cli.json {
        let results = checker::check_all(&client, &urls, &config).await;
        report::write_json(stdout.lock(), &results)?;
    } else {
        let exposed = checker::evaluate(&client, &urls, &config).await;
        report::write_plain(stdout.lock(), &exposed)?;
    }

    Ok(())
}
