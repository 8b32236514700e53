use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// `302 Found` redirect to `location`.
///
/// axum's `Redirect` only offers 303, 307 and 308.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
