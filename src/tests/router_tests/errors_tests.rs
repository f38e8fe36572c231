// src/tests/router_tests/errors_tests.rs

use crate::catalog::Catalog;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_catalog};
use astra::{Body, Request};
use http::Method;

#[test]
fn unknown_path_is_not_found() {
    let catalog = sample_catalog();

    let err = handle(get("/admin"), &catalog).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));
}

#[test]
fn post_is_not_routed() {
    let catalog = sample_catalog();

    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::POST;
    *req.uri_mut() = "/".parse().unwrap();

    assert!(matches!(handle(req, &catalog), Err(ServerError::NotFound)));
}

#[test]
fn internal_error_renders_as_500() {
    let mut resp = error_to_response(ServerError::InternalError);
    assert_eq!(resp.status(), 500);
    assert!(body_string(&mut resp).contains("Internal Server Error"));
}

#[test]
fn empty_catalog_renders_message_not_error() {
    let catalog = Catalog::new(vec![]);

    let mut resp = handle(get("/?filter=Pool&q=miami"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("No properties match your filters."));
}
