use leptos::prelude::*;
use leptos_router::components::A;

use groceryglide::products::{Product, ProductKey};

use crate::{
    format::price_pair,
    icons::{Icon, LucideIcon},
    shop::use_shop,
};

/// Badges shown on a card, top to bottom.
fn badges(product: &Product) -> Vec<(&'static str, &'static str)> {
    [
        (product.flags.on_sale, "Sale", "badge badge-sale"),
        (product.flags.new, "New", "badge badge-new"),
        (product.flags.bestseller, "Bestseller", "badge badge-bestseller"),
    ]
    .into_iter()
    .filter_map(|(shown, label, class)| shown.then_some((label, class)))
    .collect()
}

/// Product tile with an add-to-cart button.
#[component]
pub fn ProductCard(product_key: ProductKey, product: Product) -> impl IntoView {
    let shop = use_shop();
    let adding = RwSignal::new(false);
    let (price, shelf_price) = price_pair(&product);
    let href = format!("/product/{}", product.id);
    let add_label = format!("Add {} to cart", product.name);

    let image_src = product.image_url.clone();
    let image_alt = product.name.clone();

    let add = move |_: leptos::ev::MouseEvent| shop.add_from_card(product_key, adding);

    view! {
        <article class="product-card group">
            <div class="product-card-media">
                <A href=href.clone()>
                    <img src=image_src.clone() alt=image_alt.clone() class="product-card-image" />
                </A>
                <div class="product-card-badges">
                    {badges(&product)
                        .into_iter()
                        .map(|(label, class)| view! { <span class=class>{label}</span> })
                        .collect_view()}
                </div>
                <button
                    type="button"
                    class="icon-button icon-button-primary product-card-quick-add"
                    class:product-card-adding=move || adding.get()
                    aria-label=add_label.clone()
                    on:click=add.clone()
                >
                    <LucideIcon icon=Icon::ShoppingCart class="h-4 w-4" />
                </button>
            </div>
            <div class="p-3">
                <div class="mb-1 flex items-center gap-1">
                    <LucideIcon icon=Icon::Star class="star-filled h-3 w-3" />
                    <span class="text-xs text-muted">{product.rating.to_string()}</span>
                </div>
                <A href=href attr:class="product-card-name">{product.name.clone()}</A>
                <div class="flex items-baseline gap-2">
                    <span class="product-card-price">{price}</span>
                    {shelf_price.map(|value| {
                        view! {
                            <span class="product-card-shelf-price">
                                <span class="sr-only">"Was "</span>
                                <del>{value}</del>
                            </span>
                        }
                    })}
                    <span class="text-xs text-muted">{format!("/ {}", product.unit)}</span>
                </div>
                <button
                    type="button"
                    class="button button-small mt-3 w-full sm:hidden"
                    aria-label=add_label
                    on:click=add
                >
                    "Add to Cart"
                </button>
            </div>
        </article>
    }
}

/// Titled grid of product cards.
#[component]
pub fn ProductGrid(
    /// Heading above the grid.
    #[prop(into)]
    title: String,
    /// Products in display order.
    products: Vec<(ProductKey, Product)>,
) -> impl IntoView {
    view! {
        <section class="my-8">
            <h2 class="section-title">{title}</h2>
            <div class="product-grid">
                {products
                    .into_iter()
                    .map(|(key, product)| view! { <ProductCard product_key=key product=product /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Clone catalog views into owned rows for a grid.
pub fn owned(rows: Vec<(ProductKey, &Product)>) -> Vec<(ProductKey, Product)> {
    rows.into_iter()
        .map(|(key, product)| (key, product.clone()))
        .collect()
}
