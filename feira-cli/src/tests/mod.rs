//! Shared test harness modules for the Feira CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod best_price_steps;
mod helpers;
