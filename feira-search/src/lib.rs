//! Relevance search over an already-fetched storefront catalogue.
//!
//! The crate scores products and stores against a free-text query and
//! returns one flat list, best match first:
//! - **Products** score on name (tiered: exact, prefix, substring, word),
//!   tags, and category, then gain bonuses for an active promotion, a low
//!   price, and a nearby store.
//! - **Stores** score on their type (`tipo`) and proximity.
//!
//! Scoring constants live in [`SearchWeights`]; [`search`] uses the defaults.
//! Results can then be bucketed per store with [`group_by_entity`].
//!
//! # Examples
//!
//! ```
//! use feira_core::{Entity, Product};
//! use feira_search::{group_by_entity, search};
//!
//! let mercado = Entity::new(1, "Mercado Central").with_kind("mercado");
//! let products = vec![
//!     Product::new(10, "Arroz Branco 5kg").with_price(20.0).with_entity(mercado.clone()),
//!     Product::new(11, "Arroz Integral").with_entity(mercado.clone()),
//! ];
//! let entities = [mercado];
//! let results = search("arroz", &products, &entities, None);
//! assert_eq!(results.len(), 2);
//!
//! let groups = group_by_entity(results);
//! assert_eq!(groups.get(&1).map(Vec::len), Some(2));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::collections::BTreeMap;

use feira_core::{Coordinate, Entity, EntityId, Product};

mod engine;
mod query;
mod result;
mod weights;

pub use engine::SearchEngine;
pub use query::SearchQuery;
pub use result::{MatchType, SearchResult};
pub use weights::{SearchWeights, WeightsError};

/// Score `products` and `entities` against `query` with default weights.
///
/// See [`SearchEngine::search`] for ordering and filtering rules.
#[must_use]
pub fn search<'a>(
    query: &str,
    products: &'a [Product],
    entities: &'a [Entity],
    user_location: Option<Coordinate>,
) -> Vec<SearchResult<'a>> {
    SearchEngine::default().search(query, products, entities, user_location)
}

/// Bucket results by store, keeping each bucket in score order.
///
/// Store hits use their own identifier; product hits fall back to the
/// product's store. Results with no store are left out.
#[must_use]
pub fn group_by_entity<'a, I>(results: I) -> BTreeMap<EntityId, Vec<SearchResult<'a>>>
where
    I: IntoIterator<Item = SearchResult<'a>>,
{
    let mut groups: BTreeMap<EntityId, Vec<SearchResult<'a>>> = BTreeMap::new();
    for result in results {
        if let Some(id) = result.entity_id() {
            groups.entry(id).or_default().push(result);
        }
    }
    groups
}

/// Keep at most `limit` results.
///
/// The engine never truncates; pagination is left to callers.
#[must_use]
pub fn top_results(mut results: Vec<SearchResult<'_>>, limit: usize) -> Vec<SearchResult<'_>> {
    results.truncate(limit);
    results
}
