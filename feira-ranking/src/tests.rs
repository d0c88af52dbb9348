//! Unit coverage for best-price ranking.
#![forbid(unsafe_code)]

use feira_core::test_support::{SHOPPER, distant_store, nearby_store, offer_at};
use feira_core::{Coordinate, Entity, Offer};
use rstest::{fixture, rstest};

use crate::{
    BestPriceRanker, BestPriceWeights, NormalisationBounds, best_price_score, rank_best_price,
};

const TOLERANCE: f64 = 1e-9;

#[fixture]
fn store_a_and_b() -> Vec<Offer> {
    vec![
        offer_at(Entity::new(1, "Loja A"), 10.0).with_distance(2.0),
        offer_at(Entity::new(2, "Loja B"), 8.0)
            .with_promotion()
            .with_distance(5.0),
    ]
}

fn entity_ids(offers: &[crate::RankedOffer]) -> Vec<u64> {
    offers.iter().map(|ranked| ranked.offer.entity.id).collect()
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating point values"
)]
fn promotional_cheaper_offer_wins(store_a_and_b: Vec<Offer>) {
    let ranked = rank_best_price(&store_a_and_b, None);

    assert_eq!(entity_ids(&ranked), vec![2, 1]);
    let [first, second] = ranked.as_slice() else {
        panic!("expected two ranked offers");
    };
    assert!((first.score - 0.70).abs() < TOLERANCE, "got {}", first.score);
    assert!((second.score - 0.82).abs() < TOLERANCE, "got {}", second.score);
    assert_eq!(first.ranking, Some(1));
    assert_eq!(second.ranking, Some(2));
    assert_eq!(first.promotion, 0.0);
    assert_eq!(second.promotion, 1.0);
    assert!((second.normalised_distance - 0.4).abs() < TOLERANCE);
}

#[rstest]
fn empty_input_yields_empty_output() {
    assert!(rank_best_price(&[], Some(SHOPPER)).is_empty());
}

#[rstest]
fn only_first_three_are_ranked() {
    let prices = [9.0, 8.0, 7.0, 6.0, 5.0];
    let offers: Vec<Offer> = prices
        .iter()
        .zip(1..)
        .map(|(price, id)| offer_at(Entity::new(id, "Loja"), *price))
        .collect();
    let ranked = rank_best_price(&offers, None);

    let rankings: Vec<Option<u8>> = ranked.iter().map(|offer| offer.ranking).collect();
    assert_eq!(rankings, vec![Some(1), Some(2), Some(3), None, None]);
    assert_eq!(entity_ids(&ranked), vec![5, 4, 3, 2, 1]);
}

#[rstest]
fn ties_keep_input_order() {
    let offers: Vec<Offer> = (1..=4)
        .map(|id| offer_at(Entity::new(id, "Loja"), 5.0))
        .collect();
    let ranked = rank_best_price(&offers, None);
    assert_eq!(entity_ids(&ranked), vec![1, 2, 3, 4]);
}

#[rstest]
fn distance_is_computed_from_store_location() {
    let offers = vec![
        offer_at(nearby_store(1, "Perto", "mercado"), 10.0),
        offer_at(distant_store(2, "Longe", "mercado"), 10.0),
    ];
    let ranked = rank_best_price(&offers, Some(SHOPPER));

    assert_eq!(entity_ids(&ranked), vec![1, 2]);
    assert!(ranked.iter().all(|offer| offer.offer.distance_km.is_some()));
    let furthest = ranked
        .iter()
        .find(|offer| offer.offer.entity.id == 2)
        .unwrap_or_else(|| panic!("distant offer should be ranked"));
    assert_eq!(furthest.normalised_distance, 1.0);
}

#[rstest]
fn precomputed_distance_is_kept() {
    let offers = vec![offer_at(nearby_store(1, "Perto", "mercado"), 10.0).with_distance(7.5)];
    let ranked = rank_best_price(&offers, Some(SHOPPER));
    assert_eq!(ranked.first().and_then(|offer| offer.offer.distance_km), Some(7.5));
}

#[rstest]
fn input_offers_are_not_mutated() {
    let offers = vec![offer_at(nearby_store(1, "Perto", "mercado"), 10.0)];
    let before = offers.clone();
    let ranked = rank_best_price(&offers, Some(SHOPPER));
    assert_eq!(offers, before);
    assert!(offers.first().is_some_and(|offer| offer.distance_km.is_none()));
    assert!(ranked.first().is_some_and(|offer| offer.offer.distance_km.is_some()));
}

#[rstest]
fn missing_locations_contribute_nothing() {
    let offers = vec![
        offer_at(Entity::new(1, "Sem endereço"), 4.0),
        offer_at(Entity::new(2, "Também sem"), 2.0),
    ];
    let ranked = rank_best_price(&offers, Some(SHOPPER));
    assert!(ranked.iter().all(|offer| offer.normalised_distance == 0.0));
    assert_eq!(entity_ids(&ranked), vec![2, 1]);
}

#[rstest]
#[case(&[0.0, 0.0], 1.0)]
#[case(&[0.5], 1.0)]
#[case(&[3.0, 12.0, 7.0], 12.0)]
fn price_bound_is_floored_at_one(#[case] prices: &[f64], #[case] expected: f64) {
    let offers: Vec<Offer> = prices
        .iter()
        .map(|price| offer_at(Entity::new(1, "Loja"), *price))
        .collect();
    assert_eq!(NormalisationBounds::from_offers(&offers).max_price, expected);
}

#[rstest]
fn distance_bound_ignores_non_positive_values() {
    let offers = vec![
        offer_at(Entity::new(1, "A"), 1.0).with_distance(0.0),
        offer_at(Entity::new(2, "B"), 1.0).with_distance(0.4),
        offer_at(Entity::new(3, "C"), 1.0),
    ];
    assert_eq!(NormalisationBounds::from_offers(&offers).max_distance, 1.0);
}

#[rstest]
fn single_offer_score_matches_ranking(store_a_and_b: Vec<Offer>) {
    let bounds = NormalisationBounds::from_offers(&store_a_and_b);
    let scores: Vec<f64> = store_a_and_b
        .iter()
        .map(|offer| best_price_score(offer, bounds))
        .collect();
    let ranked = rank_best_price(&store_a_and_b, None);
    let mut expected = scores.clone();
    expected.reverse();
    let actual: Vec<f64> = ranked.iter().map(|offer| offer.score).collect();
    assert_eq!(actual, expected);
}

#[rstest]
fn custom_weights_change_the_winner(store_a_and_b: Vec<Offer>) {
    let distance_only = BestPriceRanker::new(BestPriceWeights {
        price: 0.0,
        distance: 1.0,
        promotion: 0.0,
    })
    .unwrap_or_else(|err| panic!("weights should validate: {err}"));
    let ranked = distance_only.rank(&store_a_and_b, None);
    assert_eq!(entity_ids(&ranked), vec![1, 2]);
}

#[rstest]
fn invalid_weights_are_rejected() {
    let result = BestPriceRanker::new(BestPriceWeights {
        price: 0.2,
        distance: 0.2,
        promotion: 0.2,
    });
    assert!(result.is_err());
}

#[rstest]
fn ranked_offers_serialise_flat() {
    let offers = vec![offer_at(Entity::new(1, "Loja"), 4.0).with_promotion()];
    let ranked = rank_best_price(&offers, Some(Coordinate::new(0.0, 0.0)));
    let value = serde_json::to_value(&ranked).unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(value[0]["preco"], 4.0);
    assert_eq!(value[0]["temPromocao"], true);
    assert_eq!(value[0]["ranking"], 1);
    assert_eq!(value[0]["promocao"], 0.0);
}
