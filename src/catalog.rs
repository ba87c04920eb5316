//! Read-only product catalog bundled with the application.
//!
//! The JSON file is compiled into the binary and parsed at most once per
//! process. Nothing mutates it afterwards.
use std::collections::HashSet;
use std::sync::OnceLock;

use leptos::logging::error;

use crate::error::CatalogError;
use crate::models::product::Product;

const BUNDLED_CATALOG: &str = include_str!("../data/products.json");

static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse a catalog, rejecting files where two products share a slug.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First product whose slug matches exactly.
    pub fn get(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.slug == slug)
    }
}

/// The catalog shipped in `data/products.json`.
pub fn bundled() -> Result<&'static Catalog, &'static CatalogError> {
    CATALOG
        .get_or_init(|| Catalog::from_json(BUNDLED_CATALOG))
        .as_ref()
}

pub fn list_products() -> &'static [Product] {
    match bundled() {
        Ok(catalog) => catalog.products(),
        Err(e) => {
            error!("[CATALOG] Bundled catalog unavailable: {}", e);
            &[]
        }
    }
}

pub fn get_product(slug: &str) -> Option<&'static Product> {
    bundled().ok()?.get(slug)
}
