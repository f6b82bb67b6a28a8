//! HTTP error handling.
//!
//! Every user-visible failure renders the same body shape:
//! `{"status": <int>, "error": <reason phrase>, "message": <detail>}`.
//! Handler errors carry their own message; responses the router produces on
//! its own (unmatched paths, panics) are shaped by [`catcher`].

use salvo::{
    async_trait,
    catcher::Catcher,
    http::StatusCode,
    oapi::{self, EndpointOutRegister, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Uniform error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// HTTP status code.
    pub status: u16,

    /// Short reason phrase.
    pub error: String,

    /// Human-readable detail.
    pub message: String,
}

/// Error returned by handlers, rendered as an [`ErrorBody`].
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub(crate) fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    pub(crate) fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
    }

    pub(crate) fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

#[async_trait]
impl Writer for ApiError {
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorBody {
            status: self.status.as_u16(),
            error: reason_phrase(self.status),
            message: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        <StatusError as EndpointOutRegister>::register(components, operation);
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

/// Catcher shaping router-generated errors (404, 405, panics) into the
/// uniform body. Handler errors have already written a body and are left
/// untouched.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(uniform_error_body)
}

#[handler]
async fn uniform_error_body(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);
    let error = reason_phrase(status);

    res.render(Json(ErrorBody {
        status: status.as_u16(),
        message: error.clone(),
        error,
    }));

    ctrl.skip_rest();
}
