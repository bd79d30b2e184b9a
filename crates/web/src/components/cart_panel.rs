use std::time::Duration;

use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::components::A;

use groceryglide::cart::CartError;

use crate::{
    cart_view::{CartLineView, CartView},
    icons::{Icon, LucideIcon},
    shop::{Shop, use_shop},
    timers,
};

/// How long a removed line takes to slide out.
const REMOVE_ANIMATION: Duration = Duration::from_millis(300);

fn remove_line(shop: &Shop, line: &CartLineView, removing: RwSignal<bool>) {
    removing.set(true);

    let shop = shop.clone();
    let key = line.key;

    timers::after(REMOVE_ANIMATION, move || {
        shop.edit_cart(|cart| cart.remove_item(key).ok_or(CartError::NotInCart(key)));
    });
}

#[component]
fn PanelLine(line: CartLineView) -> impl IntoView {
    let shop = use_shop();
    let removing = RwSignal::new(false);
    let key = line.key;

    let on_remove = {
        let shop = shop.clone();
        let line = line.clone();

        move |_: MouseEvent| remove_line(&shop, &line, removing)
    };

    let on_decrease = {
        let shop = shop.clone();
        let line = line.clone();

        move |_: MouseEvent| {
            if line.quantity > 1 {
                shop.edit_cart(|cart| cart.decrement(key));
            } else {
                remove_line(&shop, &line, removing);
            }
        }
    };

    let on_increase = move |_: MouseEvent| shop.edit_cart(|cart| cart.increment(key));

    view! {
        <li class="cart-line" class:cart-line-removing=move || removing.get()>
            <div class="cart-line-thumb">
                <img src=line.image_url alt=line.name.clone() class="h-full w-full object-cover" />
            </div>
            <div class="flex-grow">
                <div class="flex justify-between">
                    <h4 class="text-sm font-medium">{line.name.clone()}</h4>
                    <button
                        type="button"
                        class="icon-button icon-button-danger"
                        aria-label=format!("Remove {} from cart", line.name)
                        on:click=on_remove
                    >
                        <LucideIcon icon=Icon::Trash class="h-4 w-4" />
                    </button>
                </div>
                <p class="mb-2 text-xs text-muted">{line.unit}</p>
                <div class="flex items-center justify-between">
                    <div class="stepper">
                        <button type="button" class="stepper-button" aria-label="Decrease quantity" on:click=on_decrease>
                            <LucideIcon icon=Icon::Minus class="h-3 w-3" />
                        </button>
                        <span class="stepper-value">{line.quantity}</span>
                        <button type="button" class="stepper-button" aria-label="Increase quantity" on:click=on_increase>
                            <LucideIcon icon=Icon::Plus class="h-3 w-3" />
                        </button>
                    </div>
                    <div class="text-right">
                        <span class="font-medium">{line.line_total}</span>
                        {line.original_total.map(|value| view! {
                            <span class="ml-1 text-xs text-muted line-through">
                                <span class="sr-only">"Was "</span>
                                {value}
                            </span>
                        })}
                    </div>
                </div>
            </div>
        </li>
    }
}

#[component]
fn PanelSummary(view_model: CartView) -> impl IntoView {
    let shop = use_shop();
    let close_shop = shop.clone();

    view! {
        <div class="border-t p-4">
            <dl class="mb-4 space-y-2">
                <div class="summary-row">
                    <dt class="text-muted">"Subtotal"</dt>
                    <dd>{view_model.subtotal}</dd>
                </div>
                <div class="summary-row">
                    <dt class="text-muted">"Delivery Fee"</dt>
                    <dd>{view_model.delivery_fee}</dd>
                </div>
                <div class="summary-row summary-row-total">
                    <dt>"Total"</dt>
                    <dd>{view_model.total}</dd>
                </div>
            </dl>
            <div class="flex flex-col gap-2">
                <button
                    type="button"
                    class="button button-large w-full animate-pulse-gentle"
                    on:click=move |_| {
                        let notice = shop.session.with_untracked(|session| session.checkout());
                        shop.notify(notice);
                    }
                >
                    "Checkout"
                </button>
                <A href="/cart" attr:class="button button-outline button-large w-full">
                    "View Cart"
                </A>
                <button
                    type="button"
                    class="button button-ghost w-full"
                    on:click=move |_| close_shop.set_cart_open(false)
                >
                    "Continue Shopping"
                </button>
            </div>
        </div>
    }
}

/// Slide-over cart shown from the navbar.
#[component]
pub fn CartPanel() -> impl IntoView {
    let shop = use_shop();
    let is_open = {
        let shop = shop.clone();

        move || shop.session.with(|session| session.is_cart_open())
    };

    let close = {
        let shop = shop.clone();

        move |_: MouseEvent| shop.set_cart_open(false)
    };

    let body = move || {
        let built = shop
            .session
            .with(|session| CartView::build(session.cart(), &shop.data));

        match built {
            Ok(view_model) if view_model.is_empty() => {
                let shop = shop.clone();

                view! {
                    <div class="cart-empty">
                        <div class="cart-empty-icon">
                            <LucideIcon icon=Icon::ShoppingBag class="h-8 w-8" />
                        </div>
                        <h3 class="mb-2 text-lg font-medium">"Your cart is empty"</h3>
                        <p class="mb-6 max-w-xs text-muted">
                            "Looks like you haven't added any products to your cart yet."
                        </p>
                        <button type="button" class="button" on:click=move |_| shop.set_cart_open(false)>
                            "Continue Shopping"
                        </button>
                    </div>
                }
                .into_any()
            }
            Ok(view_model) => view! {
                <ul class="flex-grow overflow-auto p-4">
                    {view_model
                        .lines
                        .iter()
                        .map(|line| view! { <PanelLine line=line.clone() /> })
                        .collect_view()}
                </ul>
                <PanelSummary view_model=view_model />
            }
            .into_any(),
            Err(error) => view! {
                <p class="p-4 text-sm text-red-700">{format!("Cart unavailable: {error}")}</p>
            }
            .into_any(),
        }
    };

    view! {
        <div class="sheet" class:sheet-open=is_open.clone() aria-hidden=move || (!is_open()).to_string()>
            <div class="sheet-backdrop" on:click=close.clone()></div>
            <aside class="sheet-panel" role="dialog" aria-label="Your cart">
                <header class="flex items-center justify-between border-b px-4 py-3">
                    <h2 class="flex items-center font-semibold">
                        <LucideIcon icon=Icon::ShoppingBag class="mr-2 h-5 w-5" />
                        "Your Cart"
                    </h2>
                    <button type="button" class="icon-button" aria-label="Close cart" on:click=close>
                        <LucideIcon icon=Icon::X class="h-4 w-4" />
                    </button>
                </header>
                {body}
            </aside>
        </div>
    }
}
