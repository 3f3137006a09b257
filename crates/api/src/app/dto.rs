use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use catalog_core::Entity;
use catalog_products::{Product, ProductDraft, ProductId};

use crate::app::errors;

/// Base path of the products resource.
pub const PRODUCTS_PATH: &str = "/api/products";

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
///
/// Fields are optional so that an absent or `null` field reaches validation
/// instead of failing deserialization. A client-sent `id` is ignored.
///
/// Only a JSON object is accepted, and `price` must be a JSON number.
#[derive(Debug, Default)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Deserialize)]
struct ProductRequestFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "number_only")]
    price: Option<Decimal>,
}

impl<'de> Deserialize<'de> for ProductRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A derived struct impl would also take a positional array.
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        let fields: ProductRequestFields =
            serde_json::from_value(serde_json::Value::Object(map)).map_err(de::Error::custom)?;

        Ok(Self {
            name: fields.name,
            description: fields.description,
            price: fields.price,
        })
    }
}

fn number_only<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Some)
        .map_err(|_| de::Error::custom(format!("price {text} is out of range")))
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        ProductDraft {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl From<&Product> for ProductResponse {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id(),
            name: p.name().to_string(),
            description: p.description().to_string(),
            price: p.price().amount(),
        }
    }
}

pub fn product_to_json(p: &Product) -> ProductResponse {
    ProductResponse::from(p)
}

/// URL of the get-by-id endpoint for `id`, used as the `Location` of a create.
///
/// Absolute when the request named a host, otherwise the bare path.
pub fn product_location(host: Option<&str>, id: ProductId) -> String {
    match host.map(str::trim).filter(|h| !h.is_empty()) {
        Some(host) => format!("http://{host}{PRODUCTS_PATH}/{id}"),
        None => format!("{PRODUCTS_PATH}/{id}"),
    }
}

// -------------------------
// Helpers
// -------------------------

pub fn parse_product_id(s: &str) -> Result<ProductId, axum::response::Response> {
    s.parse::<ProductId>()
        .map_err(|_| errors::json_error(
            axum::http::StatusCode::BAD_REQUEST,
            "invalid_id",
            "invalid product id",
        ))
}
