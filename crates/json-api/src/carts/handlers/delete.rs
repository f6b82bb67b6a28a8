//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{carts::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Delete Cart Handler
///
/// Deletes a cart and, by cascade, its items. Deleting a cart that does not
/// exist is a success.
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart deleted"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "carts.delete", skip_all)]
pub(crate) async fn handler(
    cart: PathParam<i32>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();

    state
        .app
        .carts
        .delete_cart(cart)
        .await
        .map_err(into_api_error)?;

    tracing::info!(cart_id = cart, "deleted cart");

    Ok(StatusCode::NO_CONTENT)
}
