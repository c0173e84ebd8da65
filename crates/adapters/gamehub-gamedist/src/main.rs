use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gamehub_gamedist::importer::{DEFAULT_FEED_URL, write_catalog};
use gamehub_gamedist::{ImportError, Importer, ImporterConfig};

#[derive(Parser, Debug)]
#[command(
    name = "gamehub-import",
    version,
    about = "Fetch the GameDistribution feed and write a Game Hub catalog"
)]
struct Args {
    #[arg(long, default_value_t = 3, help = "Feed pages to fetch (100 games each).")]
    pages: u32,

    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        default_value = "games.json",
        help = "Where to write the catalog."
    )]
    output: PathBuf,

    #[arg(long, default_value_t = 1000, help = "Pause between page requests.")]
    delay_ms: u64,

    #[arg(long, default_value_t = 15, help = "Per-request timeout in seconds.")]
    timeout_secs: u64,

    #[arg(long, value_name = "URL", default_value = DEFAULT_FEED_URL, help = "Feed URL with a {page} placeholder.")]
    feed_url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = ImporterConfig {
        feed_url: args.feed_url,
        pages: args.pages,
        delay: Duration::from_millis(args.delay_ms),
        timeout: Duration::from_secs(args.timeout_secs),
    };

    if let Err(e) = run(config, &args.output).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(config: ImporterConfig, output: &std::path::Path) -> Result<(), ImportError> {
    let records = Importer::new(config)?.import().await?;
    write_catalog(output, &records)
}
