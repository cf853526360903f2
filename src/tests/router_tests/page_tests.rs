use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, stub_state, valid_listing};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_serves_the_client() {
    let state = stub_state(valid_listing());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Etsy Mode"));
    assert!(body.contains("Click to upload or drag image here"));
    // the generate workflow script ships with the page
    assert!(body.contains("/api/analyze"));
    // one copy field per listing key
    for field in ["firstMainColor", "secondMainColor", "homeStyle", "room", "tags"] {
        assert!(body.contains(field), "page is missing field {field}");
    }
}

#[test]
fn unknown_paths_are_not_found() {
    let state = stub_state(valid_listing());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn post_to_home_is_not_found() {
    let state = stub_state(valid_listing());

    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
