use std::sync::Arc;

use leptos::prelude::*;

use crate::{
    components::{
        category_list::CategoryList,
        flash_deals::FlashDeals,
        hero_banner::HeroBanner,
        order_tracking::OrderTracking,
        product_card::{ProductGrid, owned},
    },
    shop::use_shop,
};

fn products_title(filtered: bool) -> &'static str {
    if filtered { "Products" } else { "All Products" }
}

/// Landing page: banners, categories, deals, product grids and the live order.
#[component]
pub fn HomePage() -> impl IntoView {
    let shop = use_shop();
    let data = Arc::clone(&shop.data);
    let session = shop.session;

    let selected = Signal::derive(move || {
        session.with(|session| session.categories().selected().map(str::to_string))
    });

    let on_select = Callback::new({
        let shop = shop.clone();

        move |category_id: String| shop.toggle_category(&category_id)
    });

    let bestsellers = owned(data.catalog.bestsellers());
    let on_sale = owned(data.catalog.on_sale());

    let filtered = {
        let data = Arc::clone(&data);

        move || {
            let category = selected.get();
            let products = owned(data.catalog.filter_by_category(category.as_deref()));

            view! { <ProductGrid title=products_title(category.is_some()) products=products /> }
        }
    };

    view! {
        <HeroBanner banners=data.banners.clone() />
        <CategoryList
            categories=data.catalog.categories().to_vec()
            selected=selected
            on_select=on_select
        />
        <FlashDeals deals=data.flash_deals.clone() />
        {(!bestsellers.is_empty()).then(|| view! { <ProductGrid title="Bestsellers" products=bestsellers /> })}
        {filtered}
        {(!on_sale.is_empty()).then(|| view! { <ProductGrid title="On Sale" products=on_sale /> })}
        {data.current_order.clone().map(|order| view! { <OrderTracking order=order /> })}
    }
}
