use crate::analyze::{AnalyzeError, AppState, EmbeddedImage, VisionModel};
use crate::config::AppConfig;
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::{json, Value};
use std::io::Read;

/// Deterministic stand-in for the hosted model: always returns the same
/// canned response JSON.
pub struct StubModel {
    pub response: Value,
}

impl VisionModel for StubModel {
    fn generate(&self, _instruction: &str, _image: &EmbeddedImage) -> Result<Value, AnalyzeError> {
        Ok(self.response.clone())
    }
}

/// App state wired to a stub model returning `response`.
pub fn stub_state(response: Value) -> AppState {
    AppState {
        cfg: AppConfig {
            api_key: Some("test-key".into()),
            ..AppConfig::default()
        },
        model: Some(Box::new(StubModel { response })),
    }
}

/// App state with no credential configured (and therefore no model).
pub fn keyless_state() -> AppState {
    AppState {
        cfg: AppConfig::default(),
        model: None,
    }
}

/// A stub response in the `output_text` shape, the first one the
/// extractor tries.
pub fn output_text_response(text: &str) -> Value {
    json!({ "output_text": text })
}

/// A complete, valid listing object with all ten required keys.
pub fn valid_listing() -> Value {
    json!({
        "title": "Boho Sunset Landscape Printable Digital Download Warm Terracotta Arch",
        "description": "Warm terracotta sun over layered hills. Digital download; you print at home or at a local shop.",
        "firstMainColor": "Orange",
        "secondMainColor": "Beige",
        "homeStyle": "Bohemian & eclectic",
        "celebration": "",
        "occasion": "Housewarming",
        "subject": "Landscape & scenery, Abstract & geometric",
        "room": "Bedroom, Living room, Office, Entryway, Dorm",
        "tags": "boho wall art,sunset decor,terracotta art,arch shape,warm tones,hill landscape,minimal boho,digital art,neutral decor,desert sun,abstract hills,earthy palette,instant file"
    })
}

/// A tiny real PNG, base64-embedded, so the server-side normalizer can
/// decode it.
pub fn tiny_image_data_url() -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use image::{ImageBuffer, ImageOutputFormat, Rgb};
    use std::io::Cursor;

    let img = ImageBuffer::from_pixel(8, 8, Rgb::<u8>([200, 120, 40]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .unwrap();
    format!("data:image/png;base64,{}", STANDARD.encode(&bytes))
}

/// Build a POST /api/analyze request with a JSON body.
pub fn analyze_request(body: &Value) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body to a string.
pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Read a response body as JSON.
pub fn body_json(resp: Response) -> Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}
