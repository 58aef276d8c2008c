use axum::{extract::Query, routing::get, Router};
use service_runtime::{required_param, MissingParam};

pub const RECEIVER_PATH: &str = "/myfeignreceiver";
pub const MY_VALUE: &str = "myValue";

const DELIVERED_PREFIX: &str = "This was actually delivered by localhostprovider running locally: ";

pub fn router() -> Router {
    Router::new()
        .route(RECEIVER_PATH, get(receive))
        .route("/health", get(service_runtime::health))
}

pub fn delivered_message(my_value: &str) -> String {
    format!("{}{}", DELIVERED_PREFIX, my_value)
}

pub async fn receive(Query(query): Query<Vec<(String, String)>>) -> Result<String, MissingParam> {
    let my_value = required_param(&query, MY_VALUE)?;
    tracing::debug!("delivering value of {} bytes", my_value.len());
    Ok(delivered_message(&my_value))
}
