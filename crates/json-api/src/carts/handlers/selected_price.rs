//! Selected Items Price Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde_json::Value;

use crate::{
    carts::{errors::into_api_error, handlers::total_price::TotalPriceResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Selected Items Price Handler
///
/// Returns the aggregate price of the items whose numeric `item_id` appears
/// in the body's `selected_items` list.
#[endpoint(
    tags("carts"),
    summary = "Calculate Selected Items Price",
    responses(
        (status_code = StatusCode::OK, description = "The total price of the selection"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Unsupported Media Type"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<TotalPriceResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = req.json_body().await?;
    let selected = parse_selected_items(&body)?;

    let total_price = state
        .app
        .carts
        .selected_items_price(cart.into_inner(), &selected)
        .await
        .map_err(into_api_error)?;

    Ok(Json(TotalPriceResponse { total_price }))
}

/// An absent `selected_items` key selects nothing.
fn parse_selected_items(body: &Value) -> Result<Vec<i64>, ApiError> {
    let invalid =
        || ApiError::bad_request("selected_items must be a list of integer item identifiers");

    match body.get("selected_items") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| entry.as_i64().ok_or_else(invalid))
            .collect(),
        Some(_) => Err(invalid()),
    }
}
