use crate::analyze::data_url::EmbeddedImage;
use crate::analyze::extract::{extract_sources, extract_text};
use crate::analyze::fence::strip_code_fences;
use crate::analyze::model::VisionModel;
use crate::analyze::{prompt, AnalyzeError, ListingRecord};
use crate::config::AppConfig;
use crate::images;
use crate::responses::{analyze_error_response, listing_response};
use astra::{Request, Response};
use serde_json::Value;
use std::io::Read;

/// Field names accepted for the embedded image. `imageDataUrl` is
/// canonical; the rest are deprecated aliases kept for old clients,
/// tried in this order. First present wins, wrong type included.
const IMAGE_FIELDS: [&str; 5] = ["imageDataUrl", "image", "imageData", "dataUrl", "base64"];

/// Everything a request needs. Built once in `main`, shared read-only
/// across worker threads; the handler itself keeps no state between
/// requests.
pub struct AppState {
    pub cfg: AppConfig,
    /// `None` when no API credential is configured; analyze requests
    /// then fail fast without touching the network.
    pub model: Option<Box<dyn VisionModel + Send + Sync>>,
}

/// POST /api/analyze: image in, listing out. All failures become the
/// JSON error envelope; nothing escapes the boundary.
pub fn analyze_route(req: Request, state: &AppState) -> Response {
    match run(req, state) {
        Ok(listing) => {
            eprintln!("✅ analyze ok");
            listing_response(&listing)
        }
        Err(err) => {
            eprintln!("⚠️ analyze failed: {err}");
            analyze_error_response(&err)
        }
    }
}

fn run(mut req: Request, state: &AppState) -> Result<Value, AnalyzeError> {
    // 1. Method check before touching the body.
    if req.method().as_str() != "POST" {
        return Err(AnalyzeError::MethodNotAllowed);
    }

    // 2. Read (capped) and parse the body.
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(state.cfg.max_body_bytes as u64 + 1)
        .read_to_end(&mut raw)
        .map_err(|e| AnalyzeError::BadBody(format!("could not read request body: {e}")))?;
    if raw.len() > state.cfg.max_body_bytes {
        return Err(AnalyzeError::BadBody("request body too large".into()));
    }
    let body: Value = serde_json::from_slice(&raw)
        .map_err(|e| AnalyzeError::BadBody(format!("request body is not JSON: {e}")))?;

    // 3. Locate the embedded image string.
    let data_url = image_field(&body)?;

    // 4. Fail fast when no credential is configured; the missing-secret
    // condition never reaches the external API.
    let model = state.model.as_deref().ok_or(AnalyzeError::MissingApiKey)?;

    // 5. Strict payload decomposition, then re-normalize so whatever the
    // client sent goes upstream bounded and JPEG-encoded.
    let image = EmbeddedImage::parse(data_url)?;
    let image = images::normalize(&image, state.cfg.max_image_dim, state.cfg.jpeg_quality)?;

    // 6. The one external call.
    let response = model.generate(&prompt::instruction(), &image)?;

    // 7-9. Extract text (shape-tolerant), strip fences, parse strictly.
    let text = extract_text(&response);
    let cleaned = strip_code_fences(&text);
    let mut parsed: Value = serde_json::from_str(cleaned).map_err(|_| AnalyzeError::NotJson {
        preview: cleaned.chars().take(state.cfg.preview_chars).collect(),
    })?;

    // 10. Presence of the ten keys, nothing more. Values pass through
    // untouched.
    let missing = ListingRecord::missing_keys(&parsed);
    if !missing.is_empty() {
        return Err(AnalyzeError::MissingKeys(missing));
    }

    // 11. Attach grounding citations when the backend supplied them and
    // the model did not already include a sources key.
    if parsed.get("sources").is_none() {
        let sources = extract_sources(&response);
        if !sources.is_empty() {
            if let Some(obj) = parsed.as_object_mut() {
                obj.insert(
                    "sources".to_string(),
                    serde_json::to_value(sources)
                        .map_err(|e| AnalyzeError::Internal(e.to_string()))?,
                );
            }
        }
    }

    Ok(parsed)
}

fn image_field(body: &Value) -> Result<&str, AnalyzeError> {
    let got_keys = || -> Vec<String> {
        match body.as_object() {
            Some(map) => map.keys().cloned().collect(),
            None => Vec::new(),
        }
    };

    for field in IMAGE_FIELDS {
        match body.get(field) {
            Some(Value::String(s)) => return Ok(s),
            // Present but not a string: report rather than fall through,
            // so clients sending the right key with the wrong type get a
            // precise diagnostic.
            Some(_) => return Err(AnalyzeError::MissingImage { got_keys: got_keys() }),
            None => continue,
        }
    }

    Err(AnalyzeError::MissingImage { got_keys: got_keys() })
}
