//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_api_error, handlers::get::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Clear Cart Handler
///
/// Deletes every item under the cart, leaving the cart itself.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "carts.clear", skip_all)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .clear_cart(cart.into_inner())
        .await
        .map_err(into_api_error)?;

    tracing::info!(cart_id = cart.id, "cleared cart");

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopcarts_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("carts/{cart}/clear").put(handler))
    }

    #[tokio::test]
    async fn test_clear_cart_returns_the_emptied_cart() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_clear_cart()
            .once()
            .withf(|cart| *cart == 5)
            .return_once(|_| Ok(make_cart(5, "groceries")));

        let mut res = TestClient::put("http://example.com/carts/5/clear")
            .send(&make_service(repo))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 5);
        assert!(body.items.is_empty(), "cleared cart should have no items");

        Ok(())
    }

    #[tokio::test]
    async fn test_clear_missing_cart_returns_404() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_clear_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        let res = TestClient::put("http://example.com/carts/99/clear")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
