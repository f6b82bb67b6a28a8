//! Root URL Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Service descriptor returned from the root URL.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IndexResponse {
    /// Service name.
    pub name: String,

    /// Service version.
    pub version: String,

    /// Paths to the resource operations.
    pub paths: PathsResponse,
}

/// Paths to the resource operations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PathsResponse {
    pub create_carts: String,
    pub list_carts: String,
    pub read_carts: String,
    pub update_carts: String,
    pub delete_carts: String,
    pub create_cart_items: String,
    pub list_cart_items: String,
    pub read_cart_items: String,
    pub update_cart_items: String,
    pub delete_cart_items: String,
}

/// Root URL handler
///
/// Returns the service descriptor.
#[endpoint(tags("index"), summary = "Service descriptor")]
pub(crate) async fn handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: "Shopcarts REST API Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        paths: PathsResponse {
            create_carts: "/carts".to_string(),
            list_carts: "/carts".to_string(),
            read_carts: "/carts/{id}".to_string(),
            update_carts: "/carts/{id}".to_string(),
            delete_carts: "/carts/{id}".to_string(),
            create_cart_items: "/carts/{id}/items".to_string(),
            list_cart_items: "/carts/{id}/items".to_string(),
            read_cart_items: "/carts/{id}/items/{item_id}".to_string(),
            update_cart_items: "/carts/{id}/items/{item_id}".to_string(),
            delete_cart_items: "/carts/{id}/items/{item_id}".to_string(),
        },
    })
}
