//! Lucky sample entry point.
//!
//! Reads its numeric arguments through the `maybars` parse adapters, so an
//! unparsable argument turns into an absent value instead of a panic.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use maybars::control::Maybe;
use maybars::parse::{NumberFormat, Parsers};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lucky", about = "Fizz-buzz and lucky numbers with maybars")]
struct Cli {
    /// First number of the range
    #[arg(long, default_value = "1")]
    from: String,

    /// Last number of the range (inclusive)
    #[arg(long, default_value = "20")]
    to: String,

    /// The lucky number
    #[arg(long, default_value = "13")]
    lucky: String,

    /// Read the numbers as hexadecimal
    #[arg(long)]
    hex: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fizz-buzz line for every number in the range
    FizzBuzz,
    /// Report the lucky numbers in the range
    Lucky,
}

/// Used when `RUST_LOG` is unset. The library only emits trace-level events.
const DEFAULT_FILTER: &str = "lucky=info,maybars=trace";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let parsers = if cli.hex {
        Parsers::with_format(NumberFormat::hex_number())
    } else {
        Parsers::standard()
    };

    let from = number_argument(&parsers, "--from", &cli.from)?;
    let to = number_argument(&parsers, "--to", &cli.to)?;
    let lucky = number_argument(&parsers, "--lucky", &cli.lucky)?;

    if from > to {
        bail!("--from ({from}) must not be greater than --to ({to})");
    }
    tracing::info!(from, to, lucky, "Running");

    match cli.command {
        Command::FizzBuzz => {
            for number in from..=to {
                println!("{}", lucky::fizz_buzz(number));
            }
            lucky::first_fizz_buzz(from, to)
                .for_each(|number| tracing::debug!(number = *number, "First FizzBuzz"));
        }
        Command::Lucky => {
            for line in lucky::lucky_numbers(from, to, lucky) {
                println!("{line}");
            }
            lucky::single_lucky(from, to, lucky)
                .context("more than one lucky number in range")?
                .for_each(|number| tracing::info!(number = *number, "Found the lucky number"))
                .else_do(|| tracing::info!("No lucky number in range"));
        }
    }

    Ok(())
}

fn number_argument(parsers: &Parsers, name: &str, source: &str) -> anyhow::Result<i64> {
    let parsed: Maybe<i64> = parsers.int64().parse(source);
    parsed
        .into_value()
        .with_context(|| format!("{name} is not a number: {source:?}"))
}
