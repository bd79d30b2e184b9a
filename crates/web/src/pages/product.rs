use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};

use groceryglide::{
    products::{Product, ProductKey},
    session::QuantityPicker,
};

use crate::{
    components::product_card::owned,
    format::{price_pair, star_fills},
    icons::{Icon, LucideIcon},
    shop::use_shop,
};

#[component]
fn Stars(product: Product) -> impl IntoView {
    view! {
        <div class="flex items-center" aria-label=format!("Rated {} out of 5", product.rating)>
            {star_fills(product.rating)
                .into_iter()
                .map(|filled| {
                    let class = if filled { "star-filled h-4 w-4" } else { "star-empty h-4 w-4" };

                    view! { <LucideIcon icon=Icon::Star class=class /> }
                })
                .collect_view()}
            <span class="ml-2 text-sm text-muted">{format!("({})", product.rating)}</span>
        </div>
    }
}

#[component]
fn SimilarProducts(products: Vec<(ProductKey, Product)>) -> impl IntoView {
    (!products.is_empty()).then(|| {
        view! {
            <section class="mt-16">
                <h2 class="section-title">"You might also like"</h2>
                <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
                    {products
                        .into_iter()
                        .map(|(_, product)| {
                            let (price, _) = price_pair(&product);

                            view! {
                                <A href=format!("/product/{}", product.id) attr:class="similar-card">
                                    <div class="similar-card-media">
                                        <img src=product.image_url alt=product.name.clone() class="h-full w-full object-cover" />
                                    </div>
                                    <h3 class="font-medium">{product.name}</h3>
                                    <span class="font-bold">{price}</span>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        }
    })
}

#[component]
fn ProductDetails(product_key: ProductKey, product: Product) -> impl IntoView {
    let shop = use_shop();
    let picker = RwSignal::new(QuantityPicker::default());
    let (price, shelf_price) = price_pair(&product);
    let similar = owned(shop.data.catalog.similar_to(product_key));

    let badge = if product.flags.on_sale {
        Some(("Sale", "badge badge-sale"))
    } else if product.flags.new {
        Some(("New", "badge badge-new"))
    } else {
        None
    };

    let add_to_cart = move |_| shop.add_from_detail(product_key, picker.get_untracked().quantity());

    view! {
        <div class="py-8">
            <A href="/" attr:class="link-muted mb-6 inline-flex items-center">
                <LucideIcon icon=Icon::ChevronLeft class="mr-1 h-4 w-4" />
                "Back to Products"
            </A>
            <div class="grid grid-cols-1 gap-8 md:grid-cols-2">
                <div class="product-detail-media">
                    <img src=product.image_url.clone() alt=product.name.clone() class="h-full w-full object-cover" />
                    {badge.map(|(label, class)| view! { <span class=format!("{class} absolute left-4 top-4")>{label}</span> })}
                </div>
                <div>
                    <h1 class="page-title mb-2">{product.name.clone()}</h1>
                    <div class="mb-4">
                        <Stars product=product.clone() />
                    </div>
                    <div class="mb-6 flex items-baseline gap-2">
                        <span class="text-2xl font-bold">{price}</span>
                        {shelf_price.map(|value| view! { <del class="text-lg text-muted">{value}</del> })}
                        <span class="text-muted">{format!("/ {}", product.unit)}</span>
                    </div>
                    <p class="mb-6 text-muted">{product.description.clone()}</p>
                    <div class="mb-6">
                        <span class="mb-2 block text-sm font-medium">"Quantity"</span>
                        <div class="stepper stepper-large">
                            <button
                                type="button"
                                class="stepper-button"
                                aria-label="Decrease quantity"
                                on:click=move |_| picker.update(|picker| *picker = picker.change(-1))
                            >
                                <LucideIcon icon=Icon::Minus class="h-4 w-4" />
                            </button>
                            <span class="stepper-value">{move || picker.get().quantity().get()}</span>
                            <button
                                type="button"
                                class="stepper-button"
                                aria-label="Increase quantity"
                                on:click=move |_| picker.update(|picker| *picker = picker.change(1))
                            >
                                <LucideIcon icon=Icon::Plus class="h-4 w-4" />
                            </button>
                        </div>
                    </div>
                    <div class="flex flex-col gap-4 sm:flex-row">
                        <button type="button" class="button button-large flex-1" on:click=add_to_cart>
                            <LucideIcon icon=Icon::ShoppingCart class="mr-2 h-4 w-4" />
                            "Add to Cart"
                        </button>
                        <button type="button" class="button button-outline button-large" aria-label="Save to favourites">
                            <LucideIcon icon=Icon::Heart class="h-4 w-4" />
                        </button>
                        <button type="button" class="button button-outline button-large" aria-label="Share product">
                            <LucideIcon icon=Icon::Share class="h-4 w-4" />
                        </button>
                    </div>
                    <div class="delivery-note mt-8">
                        <LucideIcon icon=Icon::Truck class="mr-2 h-4 w-4" />
                        "Estimated delivery within 30-60 minutes if ordered now"
                    </div>
                </div>
            </div>
            <SimilarProducts products=similar />
        </div>
    }
}

/// Product detail page for `/product/:productId`.
#[component]
pub fn ProductPage() -> impl IntoView {
    let shop = use_shop();
    let params = use_params_map();

    move || {
        let product_id = params.read().get("productId").unwrap_or_default();

        match shop.data.catalog.find(&product_id) {
            Some((key, product)) => view! { <ProductDetails product_key=key product=product.clone() /> }.into_any(),
            None => view! {
                <div class="py-16 text-center">
                    <h2 class="mb-4 text-2xl font-bold">"Product Not Found"</h2>
                    <p class="mb-6 text-muted">"The product you're looking for doesn't exist or has been removed."</p>
                    <A href="/" attr:class="button">"Back to Home"</A>
                </div>
            }
            .into_any(),
        }
    }
}
