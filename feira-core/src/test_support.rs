//! Test-only catalogue fixtures shared by unit, behaviour, and property tests.

use crate::{Coordinate, Entity, Offer, Product};

/// Praça da Sé, used as the shopper position in fixtures.
pub const SHOPPER: Coordinate = Coordinate::new(-23.5503, -46.6339);

/// A store roughly one kilometre north of [`SHOPPER`].
#[must_use]
pub fn nearby_store(id: u64, name: &str, kind: &str) -> Entity {
    Entity::new(id, name)
        .with_kind(kind)
        .with_location(Coordinate::new(-23.5413, -46.6339))
}

/// A store roughly twenty kilometres south of [`SHOPPER`].
#[must_use]
pub fn distant_store(id: u64, name: &str, kind: &str) -> Entity {
    Entity::new(id, name)
        .with_kind(kind)
        .with_location(Coordinate::new(-23.7302, -46.6339))
}

/// A small mixed catalogue: grains, bakery, and produce across three stores.
#[must_use]
pub fn sample_catalogue() -> (Vec<Product>, Vec<Entity>) {
    let mercado = nearby_store(1, "Mercado Central", "mercado");
    let padaria = distant_store(2, "Padaria Estrela", "padaria");
    let quitanda = Entity::new(3, "Quitanda do Zé").with_kind("hortifruti");

    let products = vec![
        Product::new(10, "Arroz Branco 5kg")
            .with_price(20.0)
            .with_category("Grãos")
            .with_entity(mercado.clone()),
        Product::new(11, "Feijão Carioca 1kg")
            .with_price(8.5)
            .with_tag("grãos")
            .with_category("Grãos")
            .with_entity(mercado.clone()),
        Product::new(20, "Pão Francês")
            .with_price(0.9)
            .with_tag("padaria")
            .with_promotion(0.75)
            .with_entity(padaria.clone()),
        Product::new(30, "Maçã Fuji")
            .with_price(12.0)
            .with_category("Frutas")
            .with_entity(quitanda.clone()),
    ];
    (products, vec![mercado, padaria, quitanda])
}

/// Build an offer for product `1` at the given store.
#[must_use]
pub fn offer_at(entity: Entity, price: f64) -> Offer {
    Offer::new(Product::new(1, "Leite Integral 1L"), entity, price)
}
