use maud::{html, Markup};

/// A filter pill. `href` is a plain link (label plus the query at render time)
/// so it works without JavaScript. With htmx, `hx_href` carries the label only
/// and the live search box value is sent alongside it, then the `#browse`
/// block of the response replaces the current one.
pub fn pill(label: &str, active: bool, href: &str, hx_href: &str) -> Markup {
    let class = if active {
        "px-4 py-2 rounded-full text-sm font-medium bg-indigo-600 text-white"
    } else {
        "px-4 py-2 rounded-full text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200"
    };

    html! {
        a
            href=(href)
            class=(class)
            aria-pressed=(if active { "true" } else { "false" })
            hx-get=(hx_href)
            hx-include="#searchTop"
            hx-select="#browse"
            hx-target="#browse"
            hx-swap="outerHTML"
            hx-push-url="true"
        { (label) }
    }
}
