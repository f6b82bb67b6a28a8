//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcarts_app::domain::carts::data::ItemUpdate;

use crate::{
    carts::{
        errors::{into_api_error, into_validation_error},
        handlers::get::ItemResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Cart Item Handler
///
/// Applies a partial update. `quantity` is required and must be greater
/// than zero; `item_id`, `description` and `price` keep their stored
/// values when absent from the body.
#[endpoint(
    tags("items"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "The updated item"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "items.update", skip_all)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    item: PathParam<i32>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req.json_body().await?;
    let update = ItemUpdate::from_json(&body).map_err(into_validation_error)?;

    let item = state
        .app
        .carts
        .update_item(cart.into_inner(), item.into_inner(), update)
        .await
        .map_err(into_api_error)?;

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
        carts_service(repo, Router::with_path("carts/{cart}/items/{item}").put(handler))
    }

    #[tokio::test]
    async fn test_update_item_success() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_item()
            .once()
            .withf(|cart, item, update| {
                *cart == 5
                    && *item == 9
                    && *update
                        == ItemUpdate {
                            item_id: None,
                            description: None,
                            quantity: 4,
                            price: None,
                        }
            })
            .return_once(|_, _, _| Ok(make_item(9, 5, "sku-1", 4, 100)));

        let mut res = TestClient::put("http://example.com/carts/5/items/9")
            .json(&json!({ "quantity": 4 }))
            .send(&make_service(repo))
            .await;

        let body: ItemResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.quantity, 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_zero_quantity_returns_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_item().never();

        let mut res = TestClient::put("http://example.com/carts/5/items/9")
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(repo))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            body.message.contains("greater than zero"),
            "unexpected message: {}",
            body.message
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_missing_quantity_returns_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_item().never();

        let mut res = TestClient::put("http://example.com/carts/5/items/9")
            .json(&json!({ "description": "eggs" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            body.message.contains("must contain 'quantity'"),
            "unexpected message: {}",
            body.message
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_item_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::put("http://example.com/carts/5/items/99")
            .json(&json!({ "quantity": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_without_json_content_type_returns_415() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_item().never();

        let res = TestClient::put("http://example.com/carts/5/items/9")
            .text("quantity=4")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }
}
