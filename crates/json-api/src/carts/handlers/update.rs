//! Update Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use shopcarts_app::domain::carts::data::NewCart;

use crate::{
    carts::{
        errors::{into_api_error, into_validation_error},
        handlers::get::CartResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Cart Handler
///
/// Replaces a cart's name and item collection from a body of
/// `{name, items?}`.
#[endpoint(
    tags("carts"),
    summary = "Update Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "carts.update", skip_all)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req.json_body().await?;
    let update = NewCart::from_json(&body).map_err(into_validation_error)?;

    let cart = state
        .app
        .carts
        .update_cart(cart.into_inner(), update)
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopcarts_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts/{cart}").put(handler))
    }

    #[tokio::test]
    async fn test_update_cart_success() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_cart()
            .once()
            .withf(|cart, update| *cart == 5 && update.name == "renamed")
            .return_once(|_, _| Ok(make_cart(5, "renamed")));

        let mut res = TestClient::put("http://example.com/carts/5")
            .json(&json!({ "name": "renamed" }))
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "renamed");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::put("http://example.com/carts/99")
            .json(&json!({ "name": "renamed" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_cart_missing_name_returns_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_cart().never();

        let res = TestClient::put("http://example.com/carts/5")
            .json(&json!({ "items": [] }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_cart_without_json_content_type_returns_415() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_update_cart().never();

        let res = TestClient::put("http://example.com/carts/5")
            .text("name=renamed")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }
}
