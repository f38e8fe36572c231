// templates/pages/home.rs

use crate::catalog::{ALL_LABEL, HERO_BG};
use crate::domain::filter::{normalize_query, FilterState};
use crate::domain::property::PropertyRecord;
use crate::templates::{desktop_layout, pill, property_card};
use maud::{html, Markup};

pub const NO_RESULTS: &str = "No properties match your filters.";

pub struct HomeVm<'a> {
    pub filters: &'a [&'a str],
    pub state: &'a FilterState,
    pub listings: Vec<&'a PropertyRecord>,
}

/// Link that reproduces a given pill/query combination.
/// The default pill and an empty query are left out of the URL.
pub fn filter_href(path: &str, label: &str, query: &str) -> String {
    let mut params = url::form_urlencoded::Serializer::new(String::new());

    if label != ALL_LABEL {
        params.append_pair("filter", label);
    }
    if !normalize_query(query).is_empty() {
        params.append_pair("q", query);
    }

    let params = params.finish();
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{params}")
    }
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Find your favorite place",
        html! {
            (hero())
            div id="browse" {
                (filter_bar(vm.filters, vm.state))
                section id="listings" class="max-w-7xl mx-auto px-4 pb-12" {
                    (listings_grid(&vm.listings))
                }
            }
        },
    )
}

fn hero() -> Markup {
    html! {
        section class="relative bg-gray-800 text-white" aria-label="Hero" {
            div
                class="absolute inset-0 bg-cover bg-center opacity-75"
                style=(format!("background-image: url({HERO_BG})"))
                role="img"
                aria-hidden="true"
            {}
            div class="relative max-w-7xl mx-auto px-4 py-20 sm:py-28 lg:py-32" {
                div class="max-w-2xl" {
                    h1 class="text-3xl sm:text-4xl md:text-5xl font-extrabold" {
                        "Find your favorite place here!"
                    }
                    p class="mt-4 text-lg sm:text-xl text-indigo-100" {
                        "The best prices for over 2 million properties worldwide."
                    }
                    div class="mt-6 flex gap-3" {
                        a href="#listings" class="bg-indigo-600 hover:bg-indigo-700 inline-block px-5 py-3 rounded-md font-medium shadow-sm" {
                            "Browse listings"
                        }
                        a href="#filters" class="inline-block px-5 py-3 rounded-md bg-white text-indigo-700 font-medium hover:bg-gray-100" {
                            "Explore filters"
                        }
                    }
                }
            }
        }
    }
}

fn filter_bar(filters: &[&str], state: &FilterState) -> Markup {
    html! {
        section id="filters" class="max-w-7xl mx-auto px-4 py-6 sm:py-8" {
            div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4" {
                div class="flex items-center gap-3 flex-wrap" {
                    @for label in filters {
                        (pill(
                            label,
                            *label == state.label,
                            &filter_href("/", label, &state.query),
                            &filter_href("/", label, ""),
                        ))
                    }
                    @if !state.is_unfiltered() {
                        a href="/" class="text-sm text-indigo-600 hover:underline" { "Clear filters" }
                    }
                }

                form
                    class="w-full sm:w-auto"
                    method="get"
                    action="/"
                    role="search"
                    hx-get="/listings"
                    hx-target="#listings-grid"
                    hx-swap="outerHTML"
                    hx-trigger="input changed delay:250ms from:#searchTop, search from:#searchTop, submit"
                {
                    @if state.label != ALL_LABEL {
                        input type="hidden" name="filter" value=(state.label);
                    }
                    label for="searchTop" class="sr-only" { "Search" }
                    input
                        id="searchTop"
                        type="search"
                        name="q"
                        value=(state.query)
                        placeholder="Search by property, city, country..."
                        class="w-full sm:w-64 border rounded-full px-4 py-2 text-sm placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-300";
                }
            }
        }
    }
}

/// The card grid, or the empty-state message. Served alone for in-page updates.
pub fn listings_grid(listings: &[&PropertyRecord]) -> Markup {
    html! {
        div id="listings-grid" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6" {
            @if listings.is_empty() {
                div class="col-span-full text-center py-20 text-gray-500" { (NO_RESULTS) }
            } @else {
                @for property in listings {
                    (property_card(property))
                }
            }
        }
    }
}
