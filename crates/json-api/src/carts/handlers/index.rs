//! Cart Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    carts::{errors::into_api_error, handlers::get::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Cart Index Handler
///
/// Returns all carts, optionally filtered by exact name match.
#[endpoint(
    tags("carts"),
    summary = "List Carts",
    responses(
        (status_code = StatusCode::OK, description = "The carts"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<CartResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let name = name.into_inner();

    let carts = state
        .app
        .carts
        .list_carts(name.as_deref())
        .await
        .map_err(into_api_error)?;

    Ok(Json(carts.into_iter().map(Into::into).collect()))
}
