//! JSON body extractor answering malformed bodies in the API envelope.
//!
//! Axum's own `Json` rejects with a plain-text body. `CatalogJson<T>`
//! deserializes the same way but reports failures as 400 `INVALID_JSON`
//! wrapped in an [`ApiResponse`](crate::responses::ApiResponse), like every
//! other error of the API.
//! Field rules are not checked here; they run in the mediator pipeline.

use crate::responses::error_response;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::ErrorResponse;
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON extractor with enveloped rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogJson<T>(pub T);

/// Rejection for [`CatalogJson`].
#[derive(Debug)]
pub struct InvalidJson(JsonRejection);

impl IntoResponse for InvalidJson {
    fn into_response(self) -> Response {
        debug!("Rejected request body: {}", self.0.body_text());

        error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse {
                code: "INVALID_JSON".to_string(),
                message: format!("Invalid JSON: {}", self.0.body_text()),
                details: None,
                trace_id: None,
            },
        )
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for CatalogJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = InvalidJson;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(InvalidJson)?;
        Ok(Self(value))
    }
}
