//! Create Cart Item Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};

use shopcarts_app::domain::carts::data::NewItem;

use crate::{
    carts::{
        errors::{into_api_error, into_validation_error},
        handlers::get::ItemResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Cart Item Handler
///
/// Appends an item to the cart from a body of
/// `{item_id, description, quantity, price}`.
#[endpoint(
    tags("items"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Item created"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "items.create", skip_all)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();

    let body = req.json_body().await?;
    let new_item = NewItem::from_json(&body).map_err(into_validation_error)?;

    let item = state
        .app
        .carts
        .add_item(cart, new_item)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/carts/{cart}/items/{}", item.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(cart_id = cart, item_id = item.id, "created item");

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopcarts_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{
        errors::ErrorBody,
        test_helpers::{carts_service, make_item},
    };

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts/{cart}/items").post(handler))
    }

    #[tokio::test]
    async fn test_create_item_success() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .withf(|cart, item| {
                *cart == 5
                    && *item
                        == NewItem {
                            item_id: "sku-1".to_string(),
                            description: "eggs".to_string(),
                            quantity: 2,
                            price: 100,
                        }
            })
            .return_once(|_, _| Ok(make_item(9, 5, "sku-1", 2, 100)));

        let mut res = TestClient::post("http://example.com/carts/5/items")
            .json(&json!({
                "item_id": "sku-1",
                "description": "eggs",
                "quantity": 2,
                "price": 100,
            }))
            .send(&make_service(repo))
            .await;

        let body: ItemResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/carts/5/items/9"));
        assert_eq!(body.id, 9);
        assert_eq!(body.cart_id, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_on_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::post("http://example.com/carts/99/items")
            .json(&json!({
                "item_id": "sku-1",
                "description": "eggs",
                "quantity": 2,
                "price": 100,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_invalid_quantity_returns_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_add_item().never();

        let mut res = TestClient::post("http://example.com/carts/5/items")
            .json(&json!({
                "item_id": "sku-1",
                "description": "eggs",
                "quantity": "ten",
                "price": 100,
            }))
            .send(&make_service(repo))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            body.message.contains("quantity"),
            "unexpected message: {}",
            body.message
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_without_json_content_type_returns_415() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_add_item().never();

        let res = TestClient::post("http://example.com/carts/5/items")
            .text("item_id=sku-1")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }
}
