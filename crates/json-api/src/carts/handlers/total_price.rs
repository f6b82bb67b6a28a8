//! Total Price Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Total Price Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TotalPriceResponse {
    /// Sum of quantity times price over the cart's items, in minor
    /// currency units.
    pub total_price: i64,
}

/// Total Price Handler
///
/// Returns the aggregate price of the cart's contents.
#[endpoint(
    tags("carts"),
    summary = "Calculate Total Price",
    responses(
        (status_code = StatusCode::OK, description = "The total price"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    depot: &mut Depot,
) -> Result<Json<TotalPriceResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let total_price = state
        .app
        .carts
        .total_price(cart.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(TotalPriceResponse { total_price }))
}
