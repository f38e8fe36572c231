use crate::domain::property::PropertyRecord;
use maud::{html, Markup};

// Tags beyond this are left off the card.
const MAX_TAGS: usize = 3;

pub fn property_card(property: &PropertyRecord) -> Markup {
    html! {
        article
            class="rounded-xl overflow-hidden shadow-sm border border-gray-100 bg-white"
            data-key=(property.key())
        {
            div class="relative" {
                img
                    src=(property.image)
                    alt=(property.name)
                    class="w-full h-48 object-cover"
                    loading="lazy";
                @if property.has_discount() {
                    span class="absolute top-3 left-3 bg-rose-500 text-white text-xs font-semibold px-2 py-1 rounded-full" {
                        (property.discount.trim()) "% off"
                    }
                }
            }

            div class="p-4 space-y-2" {
                ul class="flex flex-wrap gap-1" {
                    @for tag in property.category.iter().take(MAX_TAGS) {
                        li class="text-xs bg-gray-100 text-gray-600 px-2 py-0.5 rounded-full" { (tag) }
                    }
                }

                div class="flex items-start justify-between gap-2" {
                    h3 class="font-semibold text-gray-900" { (property.name) }
                    span class="text-sm text-gray-700 whitespace-nowrap" {
                        "★ " (format!("{:.2}", property.rating))
                    }
                }

                p class="text-sm text-gray-500" { (property.address.display()) }

                p class="text-xs text-gray-500" {
                    (property.offers.bed) " beds · "
                    (property.offers.shower) " baths · "
                    (property.offers.occupants) " guests"
                }

                p class="text-gray-900" {
                    strong { "$" (property.price) } span class="text-gray-500" { "/n" }
                }
            }
        }
    }
}
