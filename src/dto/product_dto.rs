use serde::{Deserialize, Serialize};

use crate::model::product::Product;

/// Wire representation of a catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub price: f64,
    pub stock: i32,
    pub stock_type: String,
    pub description: String,
}

impl ProductDto {
    pub fn into_model(self) -> Product {
        Product {
            id: None,
            name: self.name,
            code: self.code,
            price: self.price,
            stock: self.stock,
            stock_type: self.stock_type,
            description: self.description,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            id: product.id.map(|id| id.to_hex()),
            name: product.name,
            code: product.code,
            price: product.price,
            stock: product.stock,
            stock_type: product.stock_type,
            description: product.description,
        }
    }
}

/// Admin patch for a product. `stockType` is deliberately absent: the update
/// allow-list is {name, description, price, stock, code}.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub code: String,
}
