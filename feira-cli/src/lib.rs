//! Command-line interface for searching and comparing storefront catalogues.
//!
//! `feira search` runs relevance search over a catalogue exported as JSON and
//! `feira best-price` ranks the offers for a single product. Both commands
//! layer their options from CLI flags, `FEIRA_*` environment variables, and
//! configuration files, and print pretty JSON to stdout.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod best_price;
mod error;
mod fs;
mod location;
mod search;

pub use error::CliError;

use best_price::{BestPriceArgs, run_best_price_with};
use search::{SearchArgs, run_search_with};

const ARG_SEARCH_CATALOG: &str = "catalog";
const ARG_QUERY: &str = "query";
const ARG_LIMIT: &str = "limit";
const ARG_GROUP_BY_ENTITY: &str = "group-by-entity";
const ARG_BEST_PRICE_OFFERS: &str = "offers";
const ARG_LATITUDE: &str = "latitude";
const ARG_LONGITUDE: &str = "longitude";
const ARG_FALLBACK_LATITUDE: &str = "fallback-latitude";
const ARG_FALLBACK_LONGITUDE: &str = "fallback-longitude";
const ENV_SEARCH_CATALOG: &str = "FEIRA_CMDS_SEARCH_CATALOG_PATH";
const ENV_QUERY: &str = "FEIRA_CMDS_SEARCH_QUERY";
const ENV_BEST_PRICE_OFFERS: &str = "FEIRA_CMDS_BEST_PRICE_OFFERS_PATH";

/// Run the Feira CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, an
/// input cannot be read, or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Search(args) => run_search_with(args, writer),
        Command::BestPrice(args) => run_best_price_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "feira",
    about = "Search storefront catalogues and compare offers offline",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score products and stores in a catalogue against a query.
    Search(SearchArgs),
    /// Rank several stores' offers for the same product.
    BestPrice(BestPriceArgs),
}

#[cfg(test)]
mod tests;
