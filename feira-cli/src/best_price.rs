//! Best-price command implementation for the Feira CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use feira_core::{Coordinate, Offer, validate_offers};
use feira_ranking::rank_best_price;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{load_json, require_existing, write_json};
use crate::location::LocationInputs;
use crate::{ARG_BEST_PRICE_OFFERS, ARG_LATITUDE, ARG_LONGITUDE, CliError, ENV_BEST_PRICE_OFFERS};

/// CLI arguments for the `best-price` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a JSON array of offers for one product. Each offer is \
                 scored on price, distance, and promotion; the three best \
                 receive a podium position.",
    about = "Rank offers for a product by best price"
)]
#[ortho_config(prefix = "FEIRA")]
pub(crate) struct BestPriceArgs {
    /// Path to a JSON array of offers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) offers_path: Option<Utf8PathBuf>,
    /// Shopper latitude in degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Shopper longitude in degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Latitude used when no location is given on the command line.
    #[arg(skip)]
    #[serde(default)]
    pub(crate) fallback_latitude: Option<f64>,
    /// Longitude used when no location is given on the command line.
    #[arg(skip)]
    #[serde(default)]
    pub(crate) fallback_longitude: Option<f64>,
}

impl BestPriceArgs {
    pub(crate) fn into_config(self) -> Result<BestPriceConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BestPriceConfig::try_from(merged)
    }
}

/// Resolved `best-price` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BestPriceConfig {
    pub(crate) offers_path: Utf8PathBuf,
    pub(crate) location: Option<Coordinate>,
}

impl TryFrom<BestPriceArgs> for BestPriceConfig {
    type Error = CliError;

    fn try_from(args: BestPriceArgs) -> Result<Self, Self::Error> {
        let offers_path = args.offers_path.ok_or(CliError::MissingArgument {
            field: ARG_BEST_PRICE_OFFERS,
            env: ENV_BEST_PRICE_OFFERS,
        })?;
        let location = LocationInputs {
            latitude: args.latitude,
            longitude: args.longitude,
            fallback_latitude: args.fallback_latitude,
            fallback_longitude: args.fallback_longitude,
        }
        .resolve()?;
        Ok(Self {
            offers_path,
            location,
        })
    }
}

pub(crate) fn run_best_price_with(
    args: BestPriceArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    debug!("resolved best-price configuration: {config:?}");
    require_existing(&config.offers_path, ARG_BEST_PRICE_OFFERS)?;
    let offers = load_offers(&config.offers_path)?;
    debug!("loaded {} offers from {}", offers.len(), config.offers_path);
    write_json(writer, &rank_best_price(&offers, config.location))
}

/// Loads and validates a JSON array of offers.
pub(crate) fn load_offers(path: &Utf8Path) -> Result<Vec<Offer>, CliError> {
    let offers: Vec<Offer> = load_json(path, ARG_BEST_PRICE_OFFERS)?;
    validate_offers(&offers).map_err(|source| CliError::InvalidOffers {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(offers)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<BestPriceConfig, CliError> {
    let merged = BestPriceArgs::merge_from_layers(layers).map_err(CliError::from)?;
    BestPriceConfig::try_from(merged)
}
