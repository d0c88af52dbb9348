//! Search command implementation for the Feira CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use feira_core::{Coordinate, Entity, Product};
use feira_search::{group_by_entity, search, top_results};
use log::{debug, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{load_json, require_existing, write_json};
use crate::location::LocationInputs;
use crate::{
    ARG_GROUP_BY_ENTITY, ARG_LATITUDE, ARG_LIMIT, ARG_LONGITUDE, ARG_QUERY, ARG_SEARCH_CATALOG,
    CliError, ENV_QUERY, ENV_SEARCH_CATALOG,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search a catalogue exported as JSON with \"produtos\" and \
                 \"entidades\" arrays. Products match on name, tags, and \
                 category; stores match on their type. A shopper location \
                 adds proximity bonuses.",
    about = "Search a catalogue for products and stores"
)]
#[ortho_config(prefix = "FEIRA")]
pub(crate) struct SearchArgs {
    /// Path to the catalogue JSON file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_path: Option<Utf8PathBuf>,
    /// Free-text query.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Shopper latitude in degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Shopper longitude in degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Print at most this many results.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Group results by store instead of printing one flat list.
    #[arg(long = ARG_GROUP_BY_ENTITY)]
    #[serde(default)]
    pub(crate) group_by_entity: bool,
    /// Latitude used when no location is given on the command line.
    #[arg(skip)]
    #[serde(default)]
    pub(crate) fallback_latitude: Option<f64>,
    /// Longitude used when no location is given on the command line.
    #[arg(skip)]
    #[serde(default)]
    pub(crate) fallback_longitude: Option<f64>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchConfig {
    pub(crate) catalog_path: Utf8PathBuf,
    pub(crate) query: String,
    pub(crate) location: Option<Coordinate>,
    pub(crate) limit: Option<usize>,
    pub(crate) group_by_entity: bool,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let catalog_path = args.catalog_path.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_CATALOG,
            env: ENV_SEARCH_CATALOG,
        })?;
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_QUERY,
        })?;
        let location = LocationInputs {
            latitude: args.latitude,
            longitude: args.longitude,
            fallback_latitude: args.fallback_latitude,
            fallback_longitude: args.fallback_longitude,
        }
        .resolve()?;
        Ok(Self {
            catalog_path,
            query,
            location,
            limit: args.limit,
            group_by_entity: args.group_by_entity,
        })
    }
}

/// Catalogue export consumed by `feira search`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub(crate) struct Catalogue {
    #[serde(rename = "produtos", default)]
    pub(crate) products: Vec<Product>,
    #[serde(rename = "entidades", default)]
    pub(crate) entities: Vec<Entity>,
}

pub(crate) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    debug!("resolved search configuration: {config:?}");
    require_existing(&config.catalog_path, ARG_SEARCH_CATALOG)?;
    let catalogue: Catalogue = load_json(&config.catalog_path, ARG_SEARCH_CATALOG)?;
    execute_search(&config, &catalogue, writer)
}

pub(crate) fn execute_search(
    config: &SearchConfig,
    catalogue: &Catalogue,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut results = search(
        &config.query,
        &catalogue.products,
        &catalogue.entities,
        config.location,
    );
    if let Some(limit) = config.limit {
        results = top_results(results, limit);
    }
    if !config.group_by_entity {
        return write_json(writer, &results);
    }

    let total = results.len();
    let groups = group_by_entity(results);
    let grouped: usize = groups.values().map(Vec::len).sum();
    if grouped < total {
        warn!(
            "{} results without a store were left out of the groups",
            total - grouped
        );
    }
    write_json(writer, &groups)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}
