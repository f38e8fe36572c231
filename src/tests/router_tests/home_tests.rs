// src/tests/router_tests/home_tests.rs

use crate::router::handle;
use crate::templates::pages::home::NO_RESULTS;
use crate::tests::utils::{body_string, card_count, get, sample_catalog};

#[test]
fn home_lists_every_property_by_default() {
    let catalog = sample_catalog();

    let mut resp = handle(get("/"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(&mut resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Find your favorite place here!"));
    assert_eq!(card_count(&body), catalog.properties().len());
    assert!(!body.contains(NO_RESULTS));
}

#[test]
fn pill_narrows_the_grid() {
    let catalog = sample_catalog();

    let mut resp = handle(get("/?filter=Safari"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Safari Lodge"));
    // The Safari pill is the pressed one.
    assert!(body.contains(r#"aria-pressed="true" hx-get="/?filter=Safari""#));
}

#[test]
fn query_and_pill_combine() {
    let catalog = sample_catalog();

    let mut resp = handle(get("/?filter=Self+Checkin&q=+USA+"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_count(&body), 2);
    assert!(body.contains("Mountain Escape Chalet"));
    assert!(body.contains("City Lights Penthouse"));
}

#[test]
fn results_keep_catalog_order() {
    let catalog = sample_catalog();

    let mut resp = handle(get("/?filter=Pool"), &catalog).unwrap();
    let body = body_string(&mut resp);

    let positions: Vec<usize> = [
        "Villa Ocean Breeze",
        "Beachfront Paradise",
        "Tropical Island Villa",
        "Desert Oasis",
    ]
    .iter()
    .map(|name| body.find(&format!("data-key=\"{name}")).unwrap())
    .collect();

    assert_eq!(card_count(&body), 4);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn no_match_is_an_ok_page_with_message() {
    let catalog = sample_catalog();

    let mut resp = handle(get("/?q=zzz-nomatch"), &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert_eq!(card_count(&body), 0);
    assert!(body.contains(NO_RESULTS));
}

#[test]
fn unknown_pill_shows_everything() {
    let catalog = sample_catalog();

    let mut resp = handle(get("/?filter=Igloo"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_count(&body), catalog.properties().len());
}

#[test]
fn pill_request_with_live_query_keeps_it() {
    let catalog = sample_catalog();

    // What a pill sends once the typed query is included.
    let mut resp = handle(get("/?filter=Pool&q=bali"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Villa Ocean Breeze"));
    assert!(body.contains(r#"name="q" value="bali""#));
    assert!(body.contains(r#"href="/?filter=Safari&amp;q=bali""#));
}
