//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopcarts_app::domain::carts::models::{Cart, Item};

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The system-assigned identifier of the cart
    pub id: i32,

    /// The cart name
    pub name: String,

    /// The items in the cart, in creation order
    pub items: Vec<ItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            name: cart.name,
            items: cart.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// The system-assigned identifier of the item
    pub id: i32,

    /// The owning cart
    pub cart_id: i32,

    /// The client-supplied external identifier
    pub item_id: String,

    /// The item description
    pub description: String,

    /// The item quantity
    pub quantity: i32,

    /// The unit price in minor currency units
    pub price: i64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            cart_id: item.cart_id,
            item_id: item.item_id,
            description: item.description,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Get Cart Handler
///
/// Returns a cart with its items.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "The cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart(cart.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopcarts_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{
        errors::ErrorBody,
        test_helpers::{carts_service, make_cart, make_item},
    };

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts/{cart}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_cart_with_items() -> TestResult {
        let mut cart = make_cart(5, "groceries");

        cart.items.push(make_item(1, 5, "sku-1", 2, 100));

        let mut repo = MockCartsService::new();

        repo.expect_get_cart()
            .once()
            .withf(|cart| *cart == 5)
            .return_once(move |_| Ok(cart));

        let mut res = TestClient::get("http://example.com/carts/5")
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 5);
        assert_eq!(body.name, "groceries");
        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items[0].item_id, "sku-1");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_get_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/carts/99")
            .send(&make_service(repo))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Not Found");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_get_cart().never();

        let res = TestClient::get("http://example.com/carts/abc")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
