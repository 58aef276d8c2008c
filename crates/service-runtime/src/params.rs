use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A required query parameter was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParam(pub &'static str);

impl IntoResponse for MissingParam {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            format!("Required request parameter '{}' is not present", self.0),
        )
            .into_response()
    }
}

/// Look up `name` in decoded query pairs. Repeated keys are joined with `,`
/// in the order they appear.
pub fn required_param(
    pairs: &[(String, String)],
    name: &'static str,
) -> Result<String, MissingParam> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        return Err(MissingParam(name));
    }

    Ok(values.join(","))
}
