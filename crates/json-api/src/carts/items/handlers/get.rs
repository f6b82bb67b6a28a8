//! Get Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_api_error, handlers::get::ItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Cart Item Handler
#[endpoint(
    tags("items"),
    summary = "Get Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "The item"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    item: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .carts
        .get_item(cart.into_inner(), item.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(item.into()))
}
