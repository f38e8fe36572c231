use crate::catalog::Catalog;
use crate::domain::filter::FilterState;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::templates::pages::{home_page, listings_grid, HomeVm};
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    tracing::info!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => {
            let state = filter_state(&req, catalog);
            let vm = HomeVm {
                filters: catalog.filters(),
                listings: state.apply(catalog.properties()),
                state: &state,
            };
            html_response(home_page(&vm))
        }
        // Grid only, swapped in while the visitor types.
        ("GET", "/listings") => {
            let state = filter_state(&req, catalog);
            html_response(listings_grid(&state.apply(catalog.properties())))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Reads `filter` and `q` from the query string.
fn filter_state(req: &Request, catalog: &Catalog) -> FilterState {
    let params = parse_query(req);

    let label = catalog.resolve_label(params.get("filter").map(String::as_str));
    let query = params.get("q").cloned().unwrap_or_default();

    FilterState::new(label, query)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
