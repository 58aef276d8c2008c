pub mod client;
pub mod error;

pub use client::ProviderClient;
pub use error::ForwardError;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use service_runtime::{required_param, MissingParam};

pub const MY_PARAM: &str = "myParam";

#[derive(Clone)]
pub struct AppState {
    pub provider: ProviderClient,
}

/// Routes under `/demo`, with the provider client injected as state.
pub fn router(provider: ProviderClient) -> Router {
    Router::new()
        .route(
            "/demo",
            get(get_demo)
                .post(post_demo)
                .put(put_demo)
                .delete(delete_demo),
        )
        .route("/demo/feign", get(get_feign_response))
        .route("/health", get(service_runtime::health))
        .with_state(AppState { provider })
}

pub async fn get_demo(Query(query): Query<Vec<(String, String)>>) -> Result<String, MissingParam> {
    let my_param = required_param(&query, MY_PARAM)?;
    Ok(format!("Get Response from demo with param: {}", my_param))
}

pub async fn get_feign_response(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<String, Response> {
    let my_param = required_param(&query, MY_PARAM).map_err(IntoResponse::into_response)?;
    state
        .provider
        .get_my_value(&my_param)
        .await
        .map_err(IntoResponse::into_response)
}

/// Length is reported in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts as two.
pub async fn post_demo(body: String) -> String {
    format!("Post Body was {} characters long", body.encode_utf16().count())
}

pub async fn put_demo() -> &'static str {
    "Put was succesful"
}

pub async fn delete_demo() -> &'static str {
    "Delete was succesful"
}
