//! API Gateway responses with fixed cross-origin headers.
//!
//! Bodies are plain text, not JSON. Every response carries the same CORS
//! header set regardless of outcome; only the handler decides which
//! constructor to call.

use std::fmt::Display;

use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use lambda_http::http::{HeaderValue, StatusCode};
use lambda_http::{Body, Response};

/// Headers the gateway is allowed to forward on cross-origin calls.
pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Methods advertised to cross-origin callers.
pub const ALLOWED_METHODS: &str = "OPTIONS,POST";

/// Origins accepted by this endpoint.
pub const ALLOWED_ORIGIN: &str = "*";

fn with_cors(status: StatusCode, body: String) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOWED_ORIGIN),
    );

    response
}

/// 400 response for malformed or invalid input.
pub fn bad_request(detail: impl Display) -> Response<Body> {
    with_cors(StatusCode::BAD_REQUEST, format!("BadRequest: {detail}"))
}

/// 500 response for persistence failures.
pub fn internal_error(detail: impl Display) -> Response<Body> {
    with_cors(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("InternalError: {detail}"),
    )
}

/// 200 response confirming the record was written.
pub fn ok() -> Response<Body> {
    with_cors(StatusCode::OK, "Record Posted".to_string())
}
