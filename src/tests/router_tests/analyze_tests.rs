use crate::analyze::ListingRecord;
use crate::router::handle;
use crate::tests::utils::{
    analyze_request, body_json, body_string, keyless_state, output_text_response, stub_state,
    tiny_image_data_url, valid_listing,
};
use serde_json::{json, Value};

fn listing_request_body() -> Value {
    json!({ "imageDataUrl": tiny_image_data_url() })
}

#[test]
fn valid_listing_comes_back_unmodified() {
    let listing = valid_listing();
    let state = stub_state(output_text_response(&listing.to_string()));

    let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("Cache-Control")
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );

    assert_eq!(body_json(resp), listing);
}

#[test]
fn same_image_twice_yields_identical_records() {
    let state = stub_state(output_text_response(&valid_listing().to_string()));

    let first = handle(analyze_request(&listing_request_body()), &state).unwrap();
    let second = handle(analyze_request(&listing_request_body()), &state).unwrap();

    assert_eq!(body_string(first), body_string(second));
}

#[test]
fn fenced_output_with_language_tag_still_parses() {
    let listing = valid_listing();
    let fenced = format!("```json\n{}\n```", listing);
    let state = stub_state(output_text_response(&fenced));

    let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), listing);
}

#[test]
fn fenced_output_with_tag_jammed_against_the_json_still_parses() {
    let listing = valid_listing();
    let fenced = format!("```json{}```", listing);
    let state = stub_state(output_text_response(&fenced));

    let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), listing);
}

#[test]
fn fenced_output_without_language_tag_still_parses() {
    let listing = valid_listing();
    let fenced = format!("```\n{}\n```", listing);
    let state = stub_state(output_text_response(&fenced));

    let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), listing);
}

#[test]
fn each_required_key_is_reported_when_absent() {
    for key in ListingRecord::REQUIRED_KEYS {
        let mut listing = valid_listing();
        listing.as_object_mut().unwrap().remove(key);

        let state = stub_state(output_text_response(&listing.to_string()));
        let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
        assert_eq!(resp.status(), 500, "expected failure for missing {key}");

        let body = body_json(resp);
        assert_eq!(
            body["missing"],
            json!([key]),
            "missing list wrong for {key}"
        );
    }
}

#[test]
fn non_json_output_is_reported_with_bounded_preview() {
    let rambling = "not json ".repeat(200);
    let state = stub_state(output_text_response(&rambling));

    let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
    assert_eq!(resp.status(), 500);

    let body = body_json(resp);
    assert_eq!(body["error"], "Model did not return JSON");
    let preview = body["rawPreview"].as_str().unwrap();
    assert_eq!(preview.chars().count(), 300);
    assert!(rambling.starts_with(preview));
}

#[test]
fn empty_model_output_is_not_json() {
    // A response shape we cannot read extracts to the empty string,
    // which then fails the strict parse.
    let state = stub_state(json!({ "unexpected": true }));

    let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(body_json(resp)["error"], "Model did not return JSON");
}

#[test]
fn missing_image_field_reports_the_keys_it_got() {
    let state = stub_state(valid_listing());

    let resp = handle(
        analyze_request(&json!({ "foo": 1, "bar": "x" })),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_json(resp);
    assert_eq!(body["error"], "imageDataUrl is required");
    let mut got: Vec<&str> = body["gotKeys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    got.sort_unstable();
    assert_eq!(got, vec!["bar", "foo"]);
}

#[test]
fn wrong_typed_image_field_is_rejected() {
    let state = stub_state(valid_listing());

    let resp = handle(analyze_request(&json!({ "imageDataUrl": 42 })), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["error"], "imageDataUrl is required");
}

#[test]
fn non_post_is_405_before_any_validation() {
    use astra::Body;
    use http::{Method, Request};

    let state = stub_state(valid_listing());

    // Deliberately broken body; the method check must fire first.
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/analyze")
        .body(Body::from("this is not json".to_string()))
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 405);
    assert_eq!(body_json(resp)["error"], "Method not allowed");
}

#[test]
fn deprecated_image_aliases_are_accepted() {
    let listing = valid_listing();

    for alias in ["image", "imageData", "dataUrl", "base64"] {
        let state = stub_state(output_text_response(&listing.to_string()));
        let body = json!({ alias: tiny_image_data_url() });

        let resp = handle(analyze_request(&body), &state).unwrap();
        assert_eq!(resp.status(), 200, "alias {alias} was not accepted");
    }
}

#[test]
fn canonical_field_wins_over_aliases() {
    let state = stub_state(output_text_response(&valid_listing().to_string()));

    // The alias carries garbage; only the canonical field is usable.
    let body = json!({
        "imageDataUrl": tiny_image_data_url(),
        "image": "data:image/png;base64,garbage!!!",
    });

    let resp = handle(analyze_request(&body), &state).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn missing_api_key_is_500_before_payload_decode() {
    let state = keyless_state();

    // Even an undecodable payload reports the missing credential; nothing
    // upstream-related runs without one.
    let resp = handle(analyze_request(&json!({ "imageDataUrl": "data:image/png;base64,!!!" })), &state)
        .unwrap();
    assert_eq!(resp.status(), 500);
    assert_eq!(body_json(resp)["error"], "Missing OPENAI_API_KEY");
}

#[test]
fn malformed_data_url_is_400() {
    let state = stub_state(valid_listing());

    let resp = handle(
        analyze_request(&json!({ "imageDataUrl": "http://example.com/cat.png" })),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["error"], "Invalid image data URL");
}

#[test]
fn undecodable_image_bytes_are_400() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let state = stub_state(valid_listing());
    let data_url = format!("data:image/png;base64,{}", STANDARD.encode(b"not a png"));

    let resp = handle(analyze_request(&json!({ "imageDataUrl": data_url })), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["error"], "Could not decode image");
}

#[test]
fn non_object_body_is_400() {
    let state = stub_state(valid_listing());

    let resp = handle(analyze_request(&json!([1, 2, 3])), &state).unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_json(resp);
    assert_eq!(body["error"], "imageDataUrl is required");
    assert_eq!(body["gotKeys"], json!([]));
}

#[test]
fn grounded_backend_sources_are_attached() {
    let listing = valid_listing();
    let response = json!({
        "candidates": [{
            "content": { "parts": [{ "text": listing.to_string() }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "title": "Boho trends", "uri": "https://example.com/trends" } }
                ]
            }
        }]
    });
    let state = stub_state(response);

    let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["title"], listing["title"]);
    assert_eq!(body["sources"][0]["title"], "Boho trends");
    assert_eq!(body["sources"][0]["uri"], "https://example.com/trends");
}

#[test]
fn listing_response_deserializes_into_a_record() {
    let state = stub_state(output_text_response(&valid_listing().to_string()));

    let resp = handle(analyze_request(&listing_request_body()), &state).unwrap();
    let record: ListingRecord = serde_json::from_str(&body_string(resp)).unwrap();

    assert_eq!(record.first_main_color, "Orange");
    assert_eq!(record.room.split(", ").count(), 5);
    assert_eq!(record.tags.split(',').count(), 13);
    assert!(record.sources.is_none());
}
