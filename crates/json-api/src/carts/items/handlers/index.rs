//! List Cart Items Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use shopcarts_app::domain::carts::data::ItemFilter;

use crate::{
    carts::{errors::into_api_error, handlers::get::ItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// List Cart Items Handler
///
/// Lists the items of a cart. Matching filters (`item_id`, `quantity`,
/// `price`) are combined with AND.
#[endpoint(
    tags("items"),
    summary = "List Cart Items",
    responses(
        (status_code = StatusCode::OK, description = "The cart items"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    item_id: QueryParam<String, false>,
    quantity: QueryParam<i32, false>,
    price: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ItemFilter {
        item_id: item_id.into_inner(),
        quantity: quantity.into_inner(),
        price: price.into_inner(),
    };

    let items = state
        .app
        .carts
        .list_items(cart.into_inner(), filter)
        .await
        .map_err(into_api_error)?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}
