mod errors;
mod fetch;
mod parser;
mod record;
mod render;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use fetch::FetchConfig;
use parser::classify::Source;

#[derive(Parser)]
#[command(name = "cidian", about = "Look up a word or phrase on Bing or Youdao dictionary")]
struct Cli {
    /// Word or phrase to look up
    #[arg(required = true)]
    words: Vec<String>,

    /// Dictionary service to query
    #[arg(short, long, value_enum, env = "CIDIAN_SOURCE", default_value = "bing")]
    source: Source,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,

    /// Request timeout in seconds
    #[arg(long, env = "CIDIAN_TIMEOUT", default_value = "10")]
    timeout: u64,

    /// Override the service base URL (scheme + host)
    #[arg(long, env = "CIDIAN_ENDPOINT")]
    endpoint: Option<String>,

    /// No progress spinner
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let query = fetch::normalize_query(&cli.words)?;
    let config = FetchConfig {
        source: cli.source,
        endpoint: cli.endpoint,
        timeout: Duration::from_secs(cli.timeout),
    };

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Looking up \"{}\" on {}...", query, config.source));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = fetch::lookup(&config, &query).await;
    pb.finish_and_clear();

    let record = match result {
        Ok(record) => record,
        Err(e) => {
            if let errors::LookupError::Upstream { status, .. } = &e {
                debug!("Upstream failed with {}", status);
            }
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!("hit={} for {:?}", record.is_hit(), query);

    if cli.json {
        println!("{}", render::render_json(&record)?);
    } else {
        println!("{}", render::render_text(&record));
    }

    Ok(ExitCode::SUCCESS)
}
