use anyhow::Result;
use clap::{Parser, ValueEnum};
use gasgauge::{
    config::Config,
    console,
    services::{numeric, ExchangeService, GasOracleService, HttpService, ReportService},
    watch,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "gasgauge", version, about = "Ethereum transaction cost reporter")]
struct Args {
    /// Gas units to price (thousands separators allowed, e.g. 21,000)
    #[arg(short, long, default_value = "21000", value_parser = parse_gas_units)]
    gas: f64,

    /// Target ISO currency code, case-insensitive
    #[arg(short, long, default_value = "usd")]
    currency: String,

    /// Chain id override for the gas oracle
    #[arg(long)]
    chain_id: Option<u64>,

    /// Keep the report refreshing on an interval
    #[arg(short, long)]
    watch: bool,

    /// Refresh interval in seconds for watch mode
    #[arg(long)]
    interval: Option<u64>,

    /// Output format for the one-shot report
    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn parse_gas_units(s: &str) -> Result<f64, String> {
    match numeric::parse_amount(s) {
        Some(gas) if gas > 0.0 => Ok(gas),
        Some(_) => Err("gas units must be positive".to_string()),
        None => Err(format!("invalid gas amount: {}", s)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(chain_id) = args.chain_id {
        config.chain_id = chain_id;
    }
    if let Some(secs) = args.interval {
        config.refresh_interval = Duration::from_secs(secs);
    }

    let http = Arc::new(HttpService::new(config.http_timeout)?);
    let gas_oracle = GasOracleService::new(http.clone(), &config);
    let exchange = ExchangeService::new(http, &config);
    let service = Arc::new(ReportService::new(gas_oracle, exchange));

    if args.watch {
        return watch::run(service, args.gas, args.currency, config.refresh_interval).await;
    }

    match service.build_report(args.gas, &args.currency).await {
        Ok(report) => match args.format {
            Format::Table => console::print_report(&report),
            Format::Json => console::print_json(&report)?,
        },
        Err(e) => {
            match args.format {
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() }))?
                ),
                Format::Table => eprintln!("{}", e),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
