//! App Router

use salvo::{Router, prelude::*};

use crate::{carts, errors::ApiError, healthcheck, index};

/// Goal handler appended under each path so that a request matching a
/// known path with an unsupported verb gets a 405 instead of a 404.
#[handler]
async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("The method is not allowed for the requested URL")
}

fn fallback() -> Router {
    Router::new().goal(method_not_allowed)
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::new().get(index::handler).push(fallback()))
        .push(
            Router::with_path("health")
                .get(healthcheck::handler)
                .push(fallback()),
        )
        .push(
            Router::with_path("carts")
                .get(carts::index::handler)
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .put(carts::update::handler)
                        .delete(carts::delete::handler)
                        .push(
                            Router::with_path("clear")
                                .put(carts::clear::handler)
                                .push(fallback()),
                        )
                        .push(
                            Router::with_path("calculate_total_price")
                                .get(carts::total_price::handler)
                                .post(carts::selected_price::handler)
                                .push(fallback()),
                        )
                        .push(
                            Router::with_path("items")
                                .get(carts::items::index::handler)
                                .post(carts::items::create::handler)
                                .push(
                                    Router::with_path("{item}")
                                        .get(carts::items::get::handler)
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler)
                                        .push(fallback()),
                                )
                                .push(fallback()),
                        )
                        .push(fallback()),
                )
                .push(fallback()),
        )
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopcarts_app::domain::carts::MockCartsService;

    use crate::{errors::ErrorBody, test_helpers::carts_service};

    use super::*;

    fn make_service() -> Service {
        carts_service(MockCartsService::new(), app_router())
    }

    #[tokio::test]
    async fn test_unknown_path_returns_404_error_body() -> TestResult {
        let mut res = TestClient::get("http://example.com/no-such-path")
            .send(&make_service())
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Not Found");

        Ok(())
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_405() -> TestResult {
        let mut res = TestClient::patch("http://example.com/carts/5")
            .send(&make_service())
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));
        assert_eq!(body.status, 405);
        assert_eq!(body.error, "Method Not Allowed");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_on_collection_returns_405() -> TestResult {
        let res = TestClient::delete("http://example.com/carts")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));

        Ok(())
    }
}
