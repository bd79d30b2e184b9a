use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::components::A;

use groceryglide::{cart::CartError, session::Session};

use crate::{
    cart_view::{CartLineView, CartView},
    icons::{Icon, LucideIcon},
    shop::use_shop,
};

/// Quantity after the cart page's minus button, which stops at one.
fn decreased(quantity: u32) -> u32 {
    quantity.saturating_sub(1).max(1)
}

#[component]
fn CartRow(line: CartLineView) -> impl IntoView {
    let shop = use_shop();
    let key = line.key;
    let quantity = line.quantity;
    let href = format!("/product/{}", line.product_id);
    let image_src = line.image_url.clone();
    let image_alt = line.name.clone();
    let remove_label = format!("Remove {} from cart", line.name);

    let on_decrease = {
        let shop = shop.clone();

        move |_: MouseEvent| shop.edit_cart(|cart| cart.update_quantity(key, decreased(quantity)))
    };

    let on_increase = {
        let shop = shop.clone();

        move |_: MouseEvent| shop.edit_cart(|cart| cart.increment(key))
    };

    let on_remove = move |_: MouseEvent| {
        shop.edit_cart(|cart| cart.remove_item(key).ok_or(CartError::NotInCart(key)));
    };

    view! {
        <li class="cart-row">
            <div class="col-span-2 flex items-center gap-3">
                <A href=href.clone() attr:class="cart-row-thumb">
                    <img src=image_src.clone() alt=image_alt.clone() class="h-full w-full object-cover" />
                </A>
                <div>
                    <A href=href attr:class="cart-row-name">{line.name.clone()}</A>
                    <p class="text-sm text-muted">{line.unit}</p>
                </div>
            </div>
            <div class="flex items-center justify-center">
                <div class="stepper">
                    <button type="button" class="stepper-button" aria-label="Decrease quantity" on:click=on_decrease>
                        <LucideIcon icon=Icon::Minus class="h-3 w-3" />
                    </button>
                    <span class="stepper-value">{quantity}</span>
                    <button type="button" class="stepper-button" aria-label="Increase quantity" on:click=on_increase>
                        <LucideIcon icon=Icon::Plus class="h-3 w-3" />
                    </button>
                </div>
            </div>
            <div class="text-center">
                <span class="font-medium">{line.unit_price}</span>
                {line.unit_shelf_price.map(|value| view! {
                    <span class="ml-1 text-xs text-muted line-through">{value}</span>
                })}
            </div>
            <div class="flex items-center justify-end text-right">
                <span class="mr-3 font-medium">{line.line_total}</span>
                <button
                    type="button"
                    class="icon-button icon-button-danger"
                    aria-label=remove_label
                    on:click=on_remove
                >
                    <LucideIcon icon=Icon::Trash class="h-4 w-4" />
                </button>
            </div>
        </li>
    }
}

#[component]
fn OrderSummary(view_model: CartView) -> impl IntoView {
    let shop = use_shop();
    let coupon_code = RwSignal::new(String::new());
    let coupon_shop = shop.clone();

    view! {
        <div class="order-summary">
            <h2 class="mb-4 text-lg font-bold">"Order Summary"</h2>
            <dl class="mb-6 space-y-3">
                <div class="summary-row">
                    <dt class="text-muted">"Subtotal"</dt>
                    <dd>{view_model.subtotal}</dd>
                </div>
                <div class="summary-row">
                    <dt class="text-muted">"Delivery Fee"</dt>
                    <dd>{view_model.delivery_fee}</dd>
                </div>
                {view_model.savings.map(|value| view! {
                    <div class="summary-row summary-row-savings">
                        <dt>"You save"</dt>
                        <dd>{value}</dd>
                    </div>
                })}
                <div class="summary-row summary-row-total">
                    <dt>"Total"</dt>
                    <dd class="text-lg">{view_model.total}</dd>
                </div>
            </dl>
            <form
                class="mb-6 flex gap-2"
                on:submit=move |event| {
                    event.prevent_default();
                    coupon_shop.notify(Session::apply_coupon(&coupon_code.get_untracked()));
                }
            >
                <input
                    type="text"
                    class="input"
                    placeholder="Coupon Code"
                    aria-label="Coupon Code"
                    prop:value=move || coupon_code.get()
                    on:input=move |event| coupon_code.set(event_target_value(&event))
                />
                <button type="submit" class="button button-outline">"Apply"</button>
            </form>
            <button
                type="button"
                class="button button-large w-full"
                on:click=move |_| {
                    let notice = shop.session.with_untracked(|session| session.checkout());
                    shop.notify(notice);
                }
            >
                "Checkout"
                <LucideIcon icon=Icon::ArrowRight class="ml-2 h-4 w-4" />
            </button>
            <p class="mt-5 text-center text-xs text-muted">
                "By proceeding to checkout, you agree to our "
                <a href="#" class="underline">"Terms of Service"</a>
            </p>
        </div>
    }
}

/// Full-page cart with coupon entry.
#[component]
pub fn CartPage() -> impl IntoView {
    let shop = use_shop();

    let body = move || {
        let built = shop
            .session
            .with(|session| CartView::build(session.cart(), &shop.data));

        match built {
            Ok(view_model) if view_model.is_empty() => view! {
                <div class="py-16 text-center">
                    <div class="cart-empty-icon mx-auto">
                        <LucideIcon icon=Icon::ShoppingCart class="h-8 w-8 text-muted" />
                    </div>
                    <h2 class="mb-2 text-xl font-bold">"Your cart is empty"</h2>
                    <p class="mb-6 text-muted">"Looks like you haven't added any products to your cart yet."</p>
                    <A href="/" attr:class="button">"Start Shopping"</A>
                </div>
            }
            .into_any(),
            Ok(view_model) => view! {
                <div class="grid grid-cols-1 gap-8 lg:grid-cols-3">
                    <div class="lg:col-span-2">
                        <div class="cart-table">
                            <div class="cart-table-head">
                                <div class="col-span-2">"Product"</div>
                                <div class="text-center">"Quantity"</div>
                                <div class="text-center">"Price"</div>
                                <div class="text-right">"Total"</div>
                            </div>
                            <ul class="divide-y">
                                {view_model
                                    .lines
                                    .iter()
                                    .map(|line| view! { <CartRow line=line.clone() /> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                    <div class="lg:col-span-1">
                        <OrderSummary view_model=view_model />
                    </div>
                </div>
            }
            .into_any(),
            Err(error) => view! {
                <p class="text-sm text-red-700">{format!("Cart unavailable: {error}")}</p>
            }
            .into_any(),
        }
    };

    view! {
        <div class="mx-auto max-w-6xl py-8">
            <div class="mb-8 flex items-center justify-between">
                <h1 class="page-title flex items-center">
                    <LucideIcon icon=Icon::ShoppingCart class="mr-2 h-6 w-6" />
                    "Shopping Cart"
                </h1>
                <A href="/" attr:class="link-muted flex items-center">
                    <LucideIcon icon=Icon::ChevronLeft class="mr-1 h-4 w-4" />
                    "Continue Shopping"
                </A>
            </div>
            {body}
        </div>
    }
}
