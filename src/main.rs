use anyhow::Context;
use clap::Parser;
use guessr::cli::Cli;
use guessr::config::Config;
use guessr::game::RandomTarget;
use guessr::logging::init_tracing;
use guessr::ui::app::DynTargets;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| config.logging.resolved_file());
    init_tracing(&config.logging, &log_file)?;

    let targets = match cli.seed {
        Some(seed) => RandomTarget::seeded(seed),
        None => RandomTarget::from_entropy(),
    };
    tracing::info!(
        seed = ?targets.seed(),
        log_file = %log_file.display(),
        "Starting guessr v{}",
        env!("CARGO_PKG_VERSION")
    );
    let targets: DynTargets = Box::new(targets);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .enable_io()
        .build()
        .context("failed to start async runtime")?;

    guessr::ui::run(&config, targets, runtime.handle().clone())
        .context("terminal UI failed")?;

    runtime.shutdown_timeout(std::time::Duration::from_millis(100));
    Ok(())
}
