use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub slug: String,         // Unique key within the catalog
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn href(&self) -> String {
        format!("/products/{}", self.slug)
    }
}
