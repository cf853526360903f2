use crate::analyze::AnalyzeError;
use astra::{Body, Response, ResponseBuilder};
use serde_json::{json, Value};

pub fn json_response(status: u16, value: &Value) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(value.to_string()))
        .unwrap()
}

/// A successful listing. `no-store` because the result is tied to one
/// upload and one model call; nothing about it should be cached.
pub fn listing_response(listing: &Value) -> Response {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-store")
        .body(Body::from(listing.to_string()))
        .unwrap()
}

/// The JSON error envelope:
/// `{ error, detail?, missing?, rawPreview?, gotKeys? }`.
pub fn analyze_error_response(err: &AnalyzeError) -> Response {
    let body = match err {
        AnalyzeError::MethodNotAllowed => json!({ "error": "Method not allowed" }),
        AnalyzeError::BadBody(detail) => json!({
            "error": "Invalid request body",
            "detail": detail,
        }),
        AnalyzeError::MissingImage { got_keys } => json!({
            "error": "imageDataUrl is required",
            "gotKeys": got_keys,
        }),
        AnalyzeError::MissingApiKey => json!({ "error": "Missing OPENAI_API_KEY" }),
        AnalyzeError::BadDataUrl(detail) => json!({
            "error": "Invalid image data URL",
            "detail": detail,
        }),
        AnalyzeError::ImageDecode(detail) => json!({
            "error": "Could not decode image",
            "detail": detail,
        }),
        AnalyzeError::Upstream(detail) => json!({
            "error": "Analyze failed",
            "detail": detail,
        }),
        AnalyzeError::NotJson { preview } => json!({
            "error": "Model did not return JSON",
            "rawPreview": preview,
        }),
        AnalyzeError::MissingKeys(missing) => json!({
            "error": "Model response missing required keys",
            "missing": missing,
        }),
        AnalyzeError::Internal(detail) => json!({
            "error": "Analyze failed",
            "detail": detail,
        }),
    };

    json_response(err.status(), &body)
}
