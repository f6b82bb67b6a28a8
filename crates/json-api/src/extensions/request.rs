//! Request body extraction honoring the content-type contract.

use salvo::Request;
use serde_json::Value;

use crate::errors::ApiError;

/// Extract a JSON body from a mutating request.
pub(crate) trait RequestExt {
    /// Rejects the request with 415 unless `Content-Type` is
    /// `application/json`, then parses the payload, mapping unparseable
    /// bodies to 400.
    async fn json_body(&mut self) -> Result<Value, ApiError>;
}

impl RequestExt for Request {
    async fn json_body(&mut self) -> Result<Value, ApiError> {
        let is_json = self
            .content_type()
            .is_some_and(|mime| mime.essence_str() == "application/json");

        if !is_json {
            return Err(ApiError::unsupported_media_type(
                "Content-Type must be application/json",
            ));
        }

        let payload = self.payload().await.map_err(|error| {
            ApiError::bad_request(format!(
                "body of request contained bad or no data: {error}"
            ))
        })?;

        serde_json::from_slice(payload).map_err(|error| {
            ApiError::bad_request(format!(
                "body of request contained bad or no data: {error}"
            ))
        })
    }
}
