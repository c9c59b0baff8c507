//! fxcache CLI
//!
//! Offline-first currency conversion from the command line. Wires the
//! HTTP provider and the file-backed snapshot store into the rate engine,
//! then serves conversions from whichever snapshot is freshest.

mod display;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxcache_engine::{EngineConfig, RateEngine};
use fxcache_provider::HttpRateSource;
use fxcache_store::build_store;
use fxcache_types::{Conversion, CurrencyCode, LinkAlwaysPresent};

#[derive(Parser)]
#[command(name = "fxcache")]
#[command(author, version, about = "Offline-first currency conversion cache", long_about = None)]
struct Cli {
    /// Base URL of the rate provider
    #[arg(
        long,
        env = "FXCACHE_API_URL",
        default_value = "https://api.exchangerate-api.com"
    )]
    api_url: String,

    /// Path of the persisted snapshot file
    #[arg(
        long,
        env = "FXCACHE_SNAPSHOT_PATH",
        default_value = "fxcache-snapshot.json"
    )]
    snapshot_path: PathBuf,

    /// Currency the provider's rate table is quoted against
    #[arg(long, env = "FXCACHE_BASE_CURRENCY", default_value = "USD")]
    base_currency: CurrencyCode,

    /// Home currency, the default conversion target
    #[arg(long, env = "FXCACHE_HOME_CURRENCY", default_value = "AUD")]
    home_currency: CurrencyCode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount using the freshest available rates
    Convert {
        /// Amount in the source currency
        amount: f64,
        /// Source currency code
        from: CurrencyCode,
        /// Target currency code (defaults to the home currency)
        #[arg(long)]
        to: Option<CurrencyCode>,
    },
    /// Show connectivity, last update time, and snapshot age
    Status,
    /// Refresh rates now, bypassing the staleness check
    Refresh,
    /// Run the background scheduler until interrupted
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,fxcache_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let engine = build_engine(&cli)?;

    match cli.command {
        Commands::Convert { amount, from, to } => {
            let to = to.unwrap_or_else(|| cli.home_currency.clone());
            engine.probe().await;
            match engine.convert(amount, &from, &to).await {
                Some(conversion) => print_conversion(amount, &conversion),
                None => {
                    println!("No conversion possible right now (no usable rates for {from} -> {to}).");
                    std::process::exit(1);
                }
            }
        }
        Commands::Status => {
            let connectivity = engine.probe().await;
            println!("Connectivity: {connectivity}");
            match engine.snapshot() {
                Some(snapshot) => {
                    let age = snapshot.age(Utc::now());
                    let staleness = if snapshot.is_stale(Utc::now(), engine.config().staleness_threshold) {
                        "stale"
                    } else {
                        "fresh"
                    };
                    println!(
                        "Last updated: {} ({} ago, {}, {} currencies)",
                        display::format_local(snapshot.fetched_at()),
                        display::format_age(age),
                        staleness,
                        snapshot.rates().len()
                    );
                }
                None => println!("Last updated: never (no cached rates)"),
            }
        }
        Commands::Refresh => match engine.force_refresh().await {
            Some((snapshot, freshness)) if !freshness.is_cached() => {
                println!(
                    "Rates updated: {} currencies as of {}.",
                    snapshot.rates().len(),
                    display::format_local(snapshot.fetched_at())
                );
            }
            Some((snapshot, _)) => {
                println!(
                    "Could not reach the provider; keeping cached rates from {}.",
                    display::format_local(snapshot.fetched_at())
                );
            }
            None => {
                println!("Could not reach the provider and no cached rates exist.");
                std::process::exit(1);
            }
        },
        Commands::Watch => {
            let handle = engine.start();
            println!("Scheduler running; press Ctrl-C to stop.");
            tokio::signal::ctrl_c().await?;
            handle.stop().await;
            println!("Stopped.");
        }
    }

    Ok(())
}

fn build_engine(cli: &Cli) -> Result<RateEngine> {
    let source = Arc::new(HttpRateSource::new(cli.api_url.as_str()));
    let store = Arc::new(build_store(&cli.snapshot_path)?);
    let config = EngineConfig {
        base_currency: cli.base_currency.clone(),
        ..EngineConfig::default()
    };
    Ok(RateEngine::new(
        config,
        source,
        store,
        Arc::new(LinkAlwaysPresent),
    ))
}

fn print_conversion(amount: f64, conversion: &Conversion) {
    let to_name = display::currency_name(&conversion.to)
        .map(|name| format!(" ({name})"))
        .unwrap_or_default();
    println!(
        "{amount} {} = {:.2} {}{to_name}",
        conversion.from, conversion.amount, conversion.to
    );
    if conversion.freshness.is_cached() {
        println!(
            "Using cached exchange rates from {}. Connect to the internet to update.",
            display::format_local(conversion.fetched_at)
        );
    }
}
