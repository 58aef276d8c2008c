use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure of the demo → localhostprovider call.
///
/// Nothing is recovered locally: every variant is logged once and surfaces
/// as a bare 500. Upstream details stay in the log.
#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("request to localhostprovider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("localhostprovider returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        tracing::error!("Forwarding to localhostprovider failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
