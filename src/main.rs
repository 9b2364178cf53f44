mod args;
mod config;
mod data;
mod error;
mod file_ops;
mod reporter;
mod scan;
mod title;

use clap::Parser;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use crate::reporter::{Reporter, TracingReporter};

async fn print_manifest(config: &Config, reporter: &dyn Reporter) -> Result<()> {
    reporter.info("Scanning for apps...");
    let apps = scan::build_manifest(config, reporter).await?;
    let bytes = file_ops::render_manifest(&apps)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&bytes)
        .and_then(|_| stdout.flush())
        .map_err(|source| error::ManifestError::WriteOutput {
            path: "<stdout>".into(),
            source,
        })?;

    reporter.info(&format!("Successfully built {} apps", apps.len()));
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Args = Args::parse();

    // load environment variables from .env file
    dotenv()
        .ok();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    let config = Config::resolve(&args);
    tracing::debug!("Using {:?}", config);

    let reporter = TracingReporter;
    let outcome = if args.stdout {
        print_manifest(&config, &reporter).await
    } else {
        scan::run(&config, &reporter).await.map(|_| ())
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.error(&format!("Error building app list: {}", err));
            ExitCode::FAILURE
        }
    }
}
