//! Stamps error envelopes with the request id.

use crate::responses::ApiResponse;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::ErrorResponse;

/// Fills `error.trace_id` from the `x-request-id` header.
///
/// Error responses leave their [`ErrorResponse`] in the response extensions;
/// when one is present the body is rebuilt with the trace id set. Other
/// responses pass through untouched.
pub async fn trace_id_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let mut response = next.run(request).await;

    let Some(request_id) = request_id else {
        return response;
    };
    let Some(error) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    let (parts, _) = response.into_parts();
    let body = Json(ApiResponse::<()>::error(error.with_trace_id(request_id)))
        .into_response()
        .into_body();
    Response::from_parts(parts, body)
}
