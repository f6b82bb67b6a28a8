//! Create Cart Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

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

/// Create Cart Handler
///
/// Creates a cart from a body of `{name, items?}`.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "carts.create", skip_all)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req.json_body().await?;
    let new_cart = NewCart::from_json(&body).map_err(into_validation_error)?;

    let cart = state
        .app
        .carts
        .create_cart(new_cart)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/carts/{}", cart.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(cart_id = cart.id, "created cart");

    Ok(Json(cart.into()))
}
