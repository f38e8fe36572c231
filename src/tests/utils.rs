use crate::catalog::Catalog;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// The bundled catalog, as the server loads it.
pub fn sample_catalog() -> Catalog {
    Catalog::sample().unwrap_or_else(|e| panic!("Catalog failed to load: {e}"))
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

/// Number of property cards in a rendered page or fragment.
pub fn card_count(html: &str) -> usize {
    html.matches("data-key=").count()
}
