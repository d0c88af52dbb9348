//! Test helpers for writing catalogue and offer fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use feira_core::test_support::{nearby_store, offer_at};
use feira_core::{Entity, Offer, Product};
use std::fs;
use tempfile::TempDir;

use crate::search::Catalogue;

pub(super) use feira_core::test_support::SHOPPER;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory exposed as a UTF-8 path.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_json<T: serde::Serialize>(&self, name: &str, value: &T) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn catalogue() -> Catalogue {
    let mercado = nearby_store(1, "Mercado Central", "mercado");
    let padaria = Entity::new(2, "Padaria Estrela").with_kind("padaria");
    Catalogue {
        products: vec![
            Product::new(10, "Arroz Branco 5kg")
                .with_price(20.0)
                .with_entity(mercado.clone()),
            Product::new(11, "Arroz Integral 1kg")
                .with_price(9.0)
                .with_entity(mercado.clone()),
            Product::new(20, "Pão Francês")
                .with_price(0.9)
                .with_tag("padaria")
                .with_entity(padaria.clone()),
        ],
        entities: vec![mercado, padaria],
    }
}

pub(super) fn offers() -> Vec<Offer> {
    vec![
        offer_at(Entity::new(1, "Loja A"), 10.0).with_distance(2.0),
        offer_at(Entity::new(2, "Loja B"), 8.0)
            .with_promotion()
            .with_distance(5.0),
    ]
}
