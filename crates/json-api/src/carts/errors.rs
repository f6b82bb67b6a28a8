//! Errors

use tracing::error;

use shopcarts_app::domain::carts::{CartsServiceError, ValidationError};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::NotFound => ApiError::not_found("Cart or item was not found"),
        CartsServiceError::AlreadyExists => ApiError::conflict("Cart already exists"),
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => ApiError::bad_request("Invalid cart payload"),
        CartsServiceError::Sql(source) => {
            error!("storage failure: {source}");

            ApiError::internal_server_error()
        }
    }
}

pub(crate) fn into_validation_error(error: ValidationError) -> ApiError {
    ApiError::bad_request(error.to_string())
}
