use serde::Deserialize;

/// `GET /indices` body.
#[derive(Debug, Deserialize)]
pub struct IndicesResponse {
    pub indices: Vec<String>,
}

/// FastAPI error body shape; `detail` is what we surface to the user.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Pull the `detail` string out of an error response body, if the body is
/// JSON and carries one.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok()?.detail
}
