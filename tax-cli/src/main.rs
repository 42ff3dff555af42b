use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tax_cli::app;
use tax_rates_http::{
    DEFAULT_BACKOFF_MS, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
    RateClientConfig,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Progressive income tax calculator.
///
/// Fetches the bracket schedule for the requested year from the rate
/// source and prints the band-by-band breakdown as JSON.
#[derive(Debug, Parser)]
#[command(name = "tax-calc", version, about, long_about = None)]
struct Cli {
    /// Tax year (2019 to 2022).
    #[arg(long)]
    year: String,

    /// Annual income, e.g. `75000` or `75000.50`.
    #[arg(long, allow_hyphen_values = true)]
    salary: String,

    /// Base URL of the rate source.
    #[arg(long, env = "TAX_RATES_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Attempts per uncached year before giving up.
    #[arg(long, env = "TAX_RATES_MAX_RETRIES", default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: u32,

    /// Linear backoff step between attempts, in milliseconds.
    #[arg(long, env = "TAX_RATES_BACKOFF_MS", default_value_t = DEFAULT_BACKOFF_MS)]
    backoff_ms: u64,

    /// Overall timeout per request, in seconds.
    #[arg(long, env = "TAX_RATES_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Pretty-print the JSON result.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

impl Cli {
    fn rate_client_config(&self) -> RateClientConfig {
        RateClientConfig::default()
            .with_base_url(&self.base_url)
            .with_max_retries(self.max_retries)
            .with_backoff_base(Duration::from_millis(self.backoff_ms))
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set, otherwise `info`.
/// * Writes to stderr so stdout carries only the JSON result.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    let calculator = app::build_calculator(cli.rate_client_config())
        .context("failed to configure rate client")?;

    match app::compute(&calculator, &cli.year, &cli.salary).await {
        Ok(result) => {
            let json = app::render(&result, cli.pretty).context("failed to encode result")?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(error = %err, year = %cli.year, "cannot calculate income tax");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
