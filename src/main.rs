use anyhow::Context;
use clap::Parser;
use lettermatrix::cli::{get_log_level, Cli};
use lettermatrix::config::load_config;
use lettermatrix::io::OutputTarget;
use lettermatrix::mapreduce::LetterMatrixJob;
use tracing::{debug, error, trace};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(get_log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("lettermatrix started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    if let Some(max_parallel) = cli.max_parallel {
        config.execution.max_parallel = max_parallel;
    }
    debug!("Resolved configuration: {:?}", config);

    let job = LetterMatrixJob::new(config)?;
    let output = OutputTarget::from_arg(&cli.output);
    let summary = job
        .run(&cli.input, &output)
        .await
        .with_context(|| format!("Failed to build letter matrix for {}", cli.input.display()))?;

    debug!("Run summary: {:?}", summary);
    Ok(())
}
