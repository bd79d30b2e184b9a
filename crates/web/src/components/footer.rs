use leptos::prelude::*;
use leptos_router::components::A;

use crate::{
    format::copyright,
    icons::{Icon, LucideIcon},
    shop::use_shop,
};

const FEATURES: [(Icon, &str, &str); 3] = [
    (Icon::Truck, "Fast Delivery", "Deliver in 10-15 mins"),
    (Icon::Clock, "24/7 Service", "Shop anytime"),
    (Icon::CreditCard, "Secure Payment", "100% secure checkout"),
];

const QUICK_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/categories", "Categories"),
    ("/deals", "Deals"),
    ("/my-orders", "My Orders"),
];

const SERVICE_LINKS: [&str; 4] = ["Contact Us", "FAQs", "Return Policy", "Shipping Info"];

#[cfg(target_arch = "wasm32")]
#[expect(clippy::unnecessary_wraps, reason = "native builds have no browser clock")]
fn current_year() -> Option<u32> {
    Some(js_sys::Date::new_0().get_full_year())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> Option<u32> {
    None
}

#[component]
pub fn Footer() -> impl IntoView {
    let shop = use_shop();
    let store_name = shop.data.settings.name.clone();

    view! {
        <footer class="footer">
            <div class="container mx-auto px-4">
                <div class="footer-features">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, detail)| {
                            view! {
                                <div class="footer-feature">
                                    <div class="footer-feature-icon">
                                        <LucideIcon icon=icon class="h-5 w-5 text-primary" />
                                    </div>
                                    <div>
                                        <h3 class="font-medium">{title}</h3>
                                        <p class="text-sm text-muted">{detail}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-columns">
                    <div>
                        <h3 class="mb-4 text-lg font-bold">{store_name.clone()}</h3>
                        <p class="mb-4 text-sm text-muted">
                            "Making grocery shopping faster, easier, and more delightful with lightning-fast delivery."
                        </p>
                        <div class="flex gap-4">
                            <a href="#" class="footer-social" aria-label="Instagram">
                                <LucideIcon icon=Icon::Instagram class="h-5 w-5" />
                            </a>
                            <a href="#" class="footer-social" aria-label="Twitter">
                                <LucideIcon icon=Icon::Twitter class="h-5 w-5" />
                            </a>
                            <a href="#" class="footer-social" aria-label="Facebook">
                                <LucideIcon icon=Icon::Facebook class="h-5 w-5" />
                            </a>
                        </div>
                    </div>
                    <div>
                        <h3 class="mb-4 font-medium">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|(href, label)| {
                                    view! { <li><A href=href attr:class="footer-link">{label}</A></li> }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="mb-4 font-medium">"Customer Service"</h3>
                        <ul class="space-y-2">
                            {SERVICE_LINKS
                                .into_iter()
                                .map(|label| view! { <li><a href="#" class="footer-link">{label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="mb-4 font-medium">"Download Our App"</h3>
                        <p class="mb-4 text-sm text-muted">"Get the full experience with our mobile app."</p>
                        <div class="flex flex-col gap-2">
                            <a href="#" class="footer-store-button">"App Store"</a>
                            <a href="#" class="footer-store-button">"Google Play"</a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright(current_year(), &store_name)}</p>
                </div>
            </div>
        </footer>
    }
}
