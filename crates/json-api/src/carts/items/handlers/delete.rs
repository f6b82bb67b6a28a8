//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Delete Cart Item Handler
///
/// Removes an item from a cart. The cart must exist; deleting an item
/// that is already gone is a successful no-op.
#[endpoint(
    tags("items"),
    summary = "Delete Cart Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Item deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "items.delete", skip_all)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    item: PathParam<i32>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .delete_item(cart.into_inner(), item.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
