use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn, Level};
use vea::{exporter, Aggregator, Config, Fetcher, KeywordFilter};

const LOG_FILE: &str = "vea.log";

#[derive(Parser, Debug)]
#[command(name = "vea", about = "Fetch RSS/Atom feeds and keep keyword-matched entries")]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("vea: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(config.log_level);

    info!("=============== Starting Vea ===============");
    info!(
        "Configured {} feeds and {} keywords",
        config.feeds.len(),
        config.keywords.len()
    );

    let aggregator = Aggregator::new(Fetcher::new(), KeywordFilter::new(&config.keywords));
    let results = aggregator.run(&config.feeds).await;

    info!("Total result: {}", results.len());

    // An export failure is logged but does not change the exit code; the
    // run is over either way.
    match exporter::export(&config.output_directory, &results) {
        Ok(path) => info!("Results written to {}", path.display()),
        Err(e) => error!("Failed to write results: {}", e),
    }

    info!("=============== Vea finished ===============");
}

/// Appends to the log file with timestamp, level, file and line on each
/// record. Falls back to stdout if the log file cannot be opened; only a
/// config failure is allowed to kill the process.
fn init_logging(level: Level) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
    {
        Ok(file) => builder.with_writer(Arc::new(file)).init(),
        Err(e) => {
            builder.init();
            warn!("Could not open {}, logging to stdout: {}", LOG_FILE, e);
        }
    }
}
