use leptos::prelude::*;

use crate::{
    components::{
        flash_deals::FlashDeals,
        product_card::{ProductGrid, owned},
    },
    shop::use_shop,
};

const WEEKEND_OFFERS: [(&str, &str); 3] = [
    ("Extra 10% OFF", "On all orders"),
    ("Free Delivery", "On orders over $25"),
    ("Buy 1 Get 1", "On select items"),
];

/// Flash deals, weekend offers and every on-sale product.
#[component]
pub fn DealsPage() -> impl IntoView {
    let data = use_shop().data;

    view! {
        <div class="py-8">
            <h1 class="page-title">"Deals & Offers"</h1>
            <FlashDeals deals=data.flash_deals.clone() />
            <section class="weekend-offers">
                <h2 class="relative mb-2 text-2xl font-bold">"Weekend Special Offers"</h2>
                <p class="relative mb-4 text-muted">"Limited time deals that you don't want to miss!"</p>
                <div class="flex flex-wrap items-center gap-4">
                    {WEEKEND_OFFERS
                        .into_iter()
                        .map(|(title, detail)| {
                            view! {
                                <div class="weekend-offer">
                                    <p class="text-sm font-semibold">{title}</p>
                                    <p class="text-xs text-muted">{detail}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <ProductGrid title="On Sale Products" products=owned(data.catalog.on_sale()) />
        </div>
    }
}
