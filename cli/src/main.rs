//! Converter CLI
//!
//! Front end for unit and currency conversion.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use converter_common::ConversionOutcome;
use converter_fx::{ExchangeRateClient, FxConfig};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{convert_currency, convert_units, format_listing, format_value, list_units};

/// Converter CLI
#[derive(Parser, Debug)]
#[command(name = "convert")]
#[command(about = "Convert lengths, weights, temperatures and currencies")]
struct Args {
    /// Print the outcome as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a value between units of one category
    Units {
        /// Length, Weight or Temperature
        category: String,
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit symbol (e.g. km, kg, C)
        from: String,
        /// Target unit symbol (e.g. mi, lb, F)
        to: String,
    },

    /// Convert an amount between currencies at the live rate
    Currency {
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Source currency code (e.g. USD)
        from: String,
        /// Target currency code (e.g. EUR)
        to: String,
        /// Rates endpoint; the base currency is appended to it
        #[arg(long)]
        rates_url: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// List supported units and featured currencies
    List {
        /// Restrict the listing to one category, or `currency`
        category: Option<String>,
    },
}

fn init_logging(json: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

fn fx_config(rates_url: Option<String>, timeout_secs: Option<u64>) -> FxConfig {
    let mut config = FxConfig::from_env();

    if let Some(url) = rates_url {
        config = config.with_base_url(url);
    }

    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    config
}

/// Print `outcome` and map it to an exit code.
fn report<T: Serialize>(
    outcome: &ConversionOutcome<T>,
    json: bool,
    describe: impl FnOnce(&T) -> String,
) -> anyhow::Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        match outcome {
            ConversionOutcome::Success { value } => println!("{}", describe(value)),
            ConversionOutcome::Failure { kind, message } => {
                eprintln!("error[{}]: {}", kind, message)
            }
        }
    }

    Ok(ExitCode::from(exit_status(outcome)))
}

/// Process status for an outcome: 0 on success, 1 on failure.
fn exit_status<T>(outcome: &ConversionOutcome<T>) -> u8 {
    if outcome.is_success() {
        0
    } else {
        1
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log_json)?;

    debug!(command = ?args.command, "Starting converter");

    match args.command {
        Command::Units {
            category,
            value,
            from,
            to,
        } => {
            let outcome = convert_units(&category, value, &from, &to);
            report(&outcome, args.json, |result| {
                format!(
                    "{} {} = {} {}",
                    format_value(value),
                    from.trim(),
                    format_value(*result),
                    to.trim()
                )
            })
        }

        Command::Currency {
            amount,
            from,
            to,
            rates_url,
            timeout_secs,
        } => {
            let config = fx_config(rates_url, timeout_secs);
            let outcome = match ExchangeRateClient::from_config(&config) {
                Ok(client) => convert_currency(&client, amount, &from, &to).await,
                Err(e) => e.into(),
            }
            .map(|money| money.round());
            report(&outcome, args.json, |money| {
                format!("{} {} = {}", amount, from.trim().to_uppercase(), money)
            })
        }

        Command::List { category } => {
            let outcome = list_units(category.as_deref());
            report(&outcome, args.json, format_listing)
        }
    }
}
