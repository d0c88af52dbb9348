//! Behaviour-driven step definitions driving the best-price CLI scenarios.

use super::helpers::{Workspace, offers, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use clap::Parser;
use feira_core::{Entity, Offer, Product};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

struct BestPriceWorld {
    workspace: Workspace,
    offers_path: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl BestPriceWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let offers_path = workspace.path("offers.json");
        Self {
            workspace,
            offers_path,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }
}

#[fixture]
fn world() -> BestPriceWorld {
    BestPriceWorld::new()
}

#[given("offers from two stores exist on disk")]
fn two_store_offers_exist(#[from(world)] world: &BestPriceWorld) {
    world.workspace.write_json("offers.json", &offers());
}

#[given("an offer with a negative price exists on disk")]
fn negative_offer_exists(#[from(world)] world: &BestPriceWorld) {
    let offer = Offer::new(Product::new(1, "Leite"), Entity::new(9, "Loja Z"), -3.0);
    world.workspace.write_json("offers.json", &[offer]);
}

#[given("the offers file contains invalid JSON")]
fn offers_contain_invalid_json(#[from(world)] world: &BestPriceWorld) {
    write_utf8(&world.offers_path, b"[ not valid json");
}

#[when("I run the best-price command")]
fn run_best_price_command(#[from(world)] world: &BestPriceWorld) {
    let invocation = ["feira", "best-price", world.offers_path.as_str()];
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::BestPrice(args) => {
            let mut buffer = world.stdout.borrow_mut();
            best_price::run_best_price_with(args, &mut *buffer)
        }
        Command::Search(_) => panic!("expected best-price command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the promotional store is ranked first")]
fn promotional_store_first(#[from(world)] world: &BestPriceWorld) {
    if let Some(Err(err)) = world.result.borrow().as_ref() {
        panic!("expected success, found {err:?}");
    }
    let output: Value =
        serde_json::from_slice(&world.stdout.borrow()).expect("stdout should be JSON");
    let ranked = output.as_array().expect("output is an array");
    assert_eq!(ranked[0]["entidade"]["nome"], "Loja B");
    assert_eq!(ranked[0]["temPromocao"], true);
    assert_eq!(ranked[0]["ranking"], 1);
}

#[then("the command fails because an offer is invalid")]
fn fails_invalid_offer(#[from(world)] world: &BestPriceWorld) {
    assert!(world.error().starts_with("InvalidOffers"));
}

#[then("the command fails because the offers JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &BestPriceWorld) {
    assert!(world.error().starts_with("ParseInput"));
}

macro_rules! register_best_price_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/best_price_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: BestPriceWorld) {
            let _ = world;
        }
    };
}

register_best_price_scenario!(best_price_happy_path, "ranking offers from JSON");
register_best_price_scenario!(best_price_negative_price, "rejecting offers with negative prices");
register_best_price_scenario!(best_price_invalid_json, "rejecting invalid JSON input");
