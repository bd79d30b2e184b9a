//! `GroceryGlide` storefront, rendered client-side with Leptos.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use groceryglide::fixtures::StoreData;

mod cart_view;
mod components;
mod format;
mod icons;
mod pages;
mod shop;
mod timers;

use shop::Shop;

const STORE_FIXTURE_YAML: &str = include_str!("../../../fixtures/store/demo.yml");

/// Parsed store fixture used by every route.
#[derive(Debug)]
struct AppData {
    store: StoreData,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let store = StoreData::from_yaml(STORE_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load store fixture: {error}"))?;

        Ok(Self { store })
    }
}

/// Storefront shell: navigation, routes, cart panel and toasts.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let shop = Shop::new(app_data.store);
            let live_message = shop.live_message;

            provide_context(shop);

            view! {
                <Router>
                    <div class="flex min-h-screen flex-col">
                        <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                            {move || live_message.get().1}
                        </p>
                        <components::navbar::Navbar />
                        <main class="container mx-auto flex-grow px-4">
                            <Routes fallback=pages::not_found::NotFoundPage>
                                <Route path=path!("/") view=pages::home::HomePage />
                                <Route path=path!("/categories") view=pages::categories::CategoriesPage />
                                <Route path=path!("/deals") view=pages::deals::DealsPage />
                                <Route path=path!("/cart") view=pages::cart::CartPage />
                                <Route path=path!("/product/:productId") view=pages::product::ProductPage />
                                <Route path=path!("/my-orders") view=pages::orders::OrdersPage />
                                <Route path=path!("/profile") view=pages::profile::ProfilePage />
                            </Routes>
                        </main>
                        <components::footer::Footer />
                        <components::cart_panel::CartPanel />
                        <components::toasts::ToastHost />
                    </div>
                </Router>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"GroceryGlide"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
