use anyhow::Context;
use clap::Parser;
use soonami_cli::{cli, launch, output, progress::Progress, screen::Screen, ui};
use soonami_config::SoonamiConfig;
use soonami_feed::FeedClient;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("soonami error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = SoonamiConfig::load_with_dotenv().context("failed to load soonami config")?;
    cli.apply_overrides(&mut config.display);
    ui::init(&cli, config.display.format);

    let format = config.display.format;
    let mut screen = Screen::new(config.display, config.labels);

    let spinner = Progress::spinner("Fetching latest earthquake...");
    let pending = launch::launch(FeedClient::new());

    tokio::select! {
        updated = pending.deliver_to(&mut screen) => {
            spinner.finish_clear();
            tracing::debug!(updated, "launch result delivered");
        }
        _ = tokio::signal::ctrl_c() => {
            spinner.finish_clear();
            tracing::debug!("interrupted before the feed returned");
            return Ok(());
        }
    }

    output::output(&screen, format)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SOONAMI_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
