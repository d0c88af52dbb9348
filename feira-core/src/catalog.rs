//! Catalogue records as served by the marketplace API.
//!
//! Field names follow Rust conventions; the serde attributes map them onto the
//! Portuguese JSON names used by the storefront (`nome`, `precoFinal`,
//! `entidade`, ...). Only the fields read by the ranking engines are modelled.

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Identifier of a product in the catalogue.
pub type ProductId = u64;

/// Identifier of a store (entity) in the catalogue.
pub type EntityId = u64;

/// A neighbourhood store.
///
/// # Examples
/// ```
/// use feira_core::{Coordinate, Entity};
///
/// let hortifruti = Entity::new(7, "Hortifruti da Vila")
///     .with_kind("hortifruti")
///     .with_location(Coordinate::new(-23.55, -46.63));
/// assert_eq!(hortifruti.kind.as_deref(), Some("hortifruti"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Store identifier.
    pub id: EntityId,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Store category such as `"padaria"` or `"mercado"`.
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Store position, when the store has been geocoded.
    #[serde(
        rename = "localizacao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Coordinate>,
}

impl Entity {
    /// Construct a store with no type or location.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: None,
            location: None,
        }
    }

    /// Set the store type while returning `self` for chaining.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the store location while returning `self` for chaining.
    #[must_use]
    pub const fn with_location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }
}

/// A free-form label attached to a product.
///
/// Serialised in the API's nested shape, `{"tag": {"nome": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TagLink", into = "TagLink")]
pub struct Tag {
    /// Tag label.
    pub name: String,
}

impl Tag {
    /// Construct a tag from its label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Serialize, Deserialize)]
struct TagLink {
    tag: TagName,
}

#[derive(Serialize, Deserialize)]
struct TagName {
    nome: String,
}

impl From<TagLink> for Tag {
    fn from(value: TagLink) -> Self {
        Self {
            name: value.tag.nome,
        }
    }
}

impl From<Tag> for TagLink {
    fn from(value: Tag) -> Self {
        Self {
            tag: TagName { nome: value.name },
        }
    }
}

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category label.
    #[serde(rename = "nome")]
    pub name: String,
}

impl Category {
    /// Construct a category from its label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A product listed by a store.
///
/// # Examples
/// ```
/// use feira_core::{Entity, Product};
///
/// let arroz = Product::new(1, "Arroz Branco 5kg")
///     .with_price(20.0)
///     .with_entity(Entity::new(3, "Mercado Central"));
/// assert_eq!(arroz.final_price, Some(20.0));
/// assert_eq!(arroz.entity_id(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProductRecord")]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Price charged at checkout.
    #[serde(rename = "precoFinal", skip_serializing_if = "Option::is_none")]
    pub final_price: Option<f64>,
    /// Labels attached to the product.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Product category.
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Whether the store is running a promotion on the product.
    #[serde(rename = "emPromocao")]
    pub on_promotion: bool,
    /// Promotional price, when one is set.
    #[serde(rename = "precoDesconto", skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    /// Store selling the product.
    #[serde(rename = "entidade", skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
}

/// Product as decoded from the API.
///
/// Records may carry `precoFinal`, `precoAtual`, or both, and send `null` for
/// absent lists and flags.
#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    nome: String,
    #[serde(rename = "precoFinal")]
    preco_final: Option<f64>,
    #[serde(rename = "precoAtual")]
    preco_atual: Option<f64>,
    tags: Option<Vec<Tag>>,
    categoria: Option<Category>,
    #[serde(rename = "emPromocao")]
    em_promocao: Option<bool>,
    #[serde(rename = "precoDesconto")]
    preco_desconto: Option<f64>,
    entidade: Option<Entity>,
}

impl From<ProductRecord> for Product {
    fn from(value: ProductRecord) -> Self {
        Self {
            id: value.id,
            name: value.nome,
            final_price: value.preco_final.or(value.preco_atual),
            tags: value.tags.unwrap_or_default(),
            category: value.categoria,
            on_promotion: value.em_promocao.unwrap_or_default(),
            discount_price: value.preco_desconto,
            entity: value.entidade,
        }
    }
}

impl Product {
    /// Construct a product with only an identifier and a name.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            final_price: None,
            tags: Vec::new(),
            category: None,
            on_promotion: false,
            discount_price: None,
            entity: None,
        }
    }

    /// Set the checkout price.
    #[must_use]
    pub const fn with_price(mut self, price: f64) -> Self {
        self.final_price = Some(price);
        self
    }

    /// Append a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(Tag::new(tag));
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Category::new(category));
        self
    }

    /// Mark the product as on promotion at `discount_price`.
    #[must_use]
    pub const fn with_promotion(mut self, discount_price: f64) -> Self {
        self.on_promotion = true;
        self.discount_price = Some(discount_price);
        self
    }

    /// Attach the selling store.
    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Identifier of the selling store, if known.
    #[must_use]
    pub fn entity_id(&self) -> Option<EntityId> {
        self.entity.as_ref().map(|entity| entity.id)
    }

    /// Location of the selling store, if known.
    #[must_use]
    pub fn entity_location(&self) -> Option<Coordinate> {
        self.entity.as_ref().and_then(|entity| entity.location)
    }

    /// Report whether an active promotion with a usable discount price exists.
    ///
    /// A zero or `NaN` discount price does not count as a promotion.
    #[must_use]
    pub fn has_active_promotion(&self) -> bool {
        self.on_promotion
            && self
                .discount_price
                .is_some_and(|price| price != 0.0 && !price.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialises_api_shape() {
        let json = r#"{
            "id": 12,
            "nome": "Pão Francês",
            "precoAtual": 0.9,
            "tags": [{"tag": {"nome": "padaria"}}],
            "categoria": {"nome": "Panificados"},
            "emPromocao": true,
            "precoDesconto": 0.75,
            "entidade": {
                "id": 4,
                "nome": "Padaria Estrela",
                "tipo": "padaria",
                "localizacao": {"latitude": -23.5, "longitude": -46.6}
            }
        }"#;
        let product: Product = serde_json::from_str(json).expect("valid product json");
        assert_eq!(product.final_price, Some(0.9));
        assert_eq!(product.tags, vec![Tag::new("padaria")]);
        assert_eq!(product.entity_id(), Some(4));
        assert_eq!(
            product.entity_location(),
            Some(Coordinate::new(-23.5, -46.6))
        );
        assert!(product.has_active_promotion());
    }

    #[rstest]
    #[case(r#""precoFinal": 18.0, "precoAtual": 20.0"#, Some(18.0))]
    #[case(r#""precoAtual": 20.0, "precoFinal": 18.0"#, Some(18.0))]
    #[case(r#""precoFinal": null, "precoAtual": 20.0"#, Some(20.0))]
    #[case(r#""precoAtual": 20.0"#, Some(20.0))]
    #[case(r#""precoFinal": null"#, None)]
    fn final_price_prefers_preco_final(#[case] prices: &str, #[case] expected: Option<f64>) {
        let json = format!(r#"{{"id": 1, "nome": "Arroz", {prices}}}"#);
        let product: Product = serde_json::from_str(&json).expect("product with prices");
        assert_eq!(product.final_price, expected);
    }

    #[rstest]
    fn null_collections_and_flags_default() {
        let json = r#"{
            "id": 1,
            "nome": "Arroz",
            "tags": null,
            "categoria": null,
            "emPromocao": null,
            "precoDesconto": null,
            "entidade": null
        }"#;
        let product: Product = serde_json::from_str(json).expect("product with nulls");
        assert_eq!(product, Product::new(1, "Arroz"));
    }

    #[rstest]
    fn serialisation_decodes_back() {
        let product = Product::new(3, "Pão")
            .with_price(0.9)
            .with_tag("padaria")
            .with_category("Panificados")
            .with_promotion(0.75)
            .with_entity(Entity::new(4, "Padaria"));
        let json = serde_json::to_string(&product).expect("serialise product");
        let decoded: Product = serde_json::from_str(&json).expect("decode product");
        assert_eq!(decoded, product);
    }

    #[rstest]
    fn missing_optional_fields_default() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "nome": "Feijão"}"#).expect("minimal product");
        assert_eq!(product, Product::new(1, "Feijão"));
    }

    #[rstest]
    fn tags_serialise_in_nested_shape() {
        let product = Product::new(1, "Queijo").with_tag("laticinio");
        let value = serde_json::to_value(&product).expect("serialise product");
        assert_eq!(value["tags"][0]["tag"]["nome"], "laticinio");
    }

    #[rstest]
    #[case(Some(0.0), false)]
    #[case(None, false)]
    #[case(Some(4.5), true)]
    fn promotion_requires_discount_price(#[case] discount: Option<f64>, #[case] expected: bool) {
        let mut product = Product::new(1, "Café");
        product.on_promotion = true;
        product.discount_price = discount;
        assert_eq!(product.has_active_promotion(), expected);
    }
}
