use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use groceryglide::session::Session;

use crate::{
    icons::{Icon, LucideIcon},
    shop::use_shop,
};

const NAV_LINKS: [(&str, &str, Option<Icon>); 4] = [
    ("/", "Home", None),
    ("/categories", "Categories", None),
    ("/deals", "Deals", Some(Icon::Tag)),
    ("/my-orders", "My Orders", Some(Icon::Package)),
];

const MENU_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/categories", "Categories"),
    ("/deals", "Deals"),
    ("/my-orders", "My Orders"),
    ("/profile", "Profile"),
];

fn badge_text(count: u64) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

#[component]
fn SearchField(autofocus: bool) -> impl IntoView {
    let shop = use_shop();

    view! {
        <div class="relative w-full">
            <input
                type="search"
                placeholder="Search for groceries..."
                aria-label="Search for groceries"
                class="w-full rounded-full border py-2 pl-10 pr-10"
                autofocus=autofocus
            />
            <LucideIcon icon=Icon::Search class="absolute left-3 top-1/2 h-4 w-4 -translate-y-1/2 text-muted" />
            <button
                type="button"
                class="icon-button absolute right-1 top-1/2 -translate-y-1/2"
                aria-label="Voice search"
                on:click=move |_| shop.notify(Session::voice_search())
            >
                <LucideIcon icon=Icon::Mic class="h-4 w-4" />
            </button>
        </div>
    }
}

/// Sticky header with navigation, search and the cart badge.
#[component]
pub fn Navbar() -> impl IntoView {
    let shop = use_shop();
    let pathname = use_location().pathname;
    let store_name = shop.data.settings.name.clone();
    let menu_open = RwSignal::new(false);
    let search_open = RwSignal::new(false);

    let count_shop = shop.clone();
    let item_count = Signal::derive(move || count_shop.item_count());

    view! {
        <header class="navbar">
            <div class="container mx-auto px-4 py-3">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <button
                            type="button"
                            class="icon-button md:hidden"
                            aria-label="Open menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            <LucideIcon icon=Icon::Menu class="h-5 w-5" />
                        </button>
                        <A href="/" attr:class="navbar-brand">
                            {store_name}
                        </A>
                    </div>

                    <div class="mx-4 hidden max-w-md flex-1 md:flex">
                        <SearchField autofocus=false />
                    </div>

                    {move || {
                        search_open
                            .get()
                            .then(|| {
                                view! {
                                    <div class="navbar-mobile-search">
                                        <button
                                            type="button"
                                            class="icon-button mr-2"
                                            aria-label="Close search"
                                            on:click=move |_| search_open.set(false)
                                        >
                                            <LucideIcon icon=Icon::X class="h-5 w-5" />
                                        </button>
                                        <SearchField autofocus=true />
                                    </div>
                                }
                            })
                    }}

                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="icon-button md:hidden"
                            aria-label="Search"
                            on:click=move |_| search_open.set(true)
                        >
                            <LucideIcon icon=Icon::Search class="h-5 w-5" />
                        </button>
                        <button
                            type="button"
                            class="icon-button relative"
                            aria-label=move || format!("Open cart ({} items)", item_count.get())
                            on:click=move |_| shop.set_cart_open(true)
                        >
                            <LucideIcon icon=Icon::ShoppingCart class="h-5 w-5" />
                            {move || {
                                badge_text(item_count.get())
                                    .map(|text| view! { <span class="navbar-badge">{text}</span> })
                            }}
                        </button>
                        <A href="/profile" attr:class="navbar-avatar" attr:aria-label="Profile">
                            <LucideIcon icon=Icon::User class="h-4 w-4" />
                        </A>
                    </div>
                </div>

                <nav class="mt-1 hidden items-center gap-6 md:flex">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label, icon)| {
                            let class = move || {
                                if pathname.get() == href {
                                    "navbar-link navbar-link-active"
                                } else {
                                    "navbar-link"
                                }
                            };

                            view! {
                                <A href=href attr:class=class>
                                    {icon.map(|icon| view! { <LucideIcon icon=icon class="mr-1 h-3 w-3" /> })}
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <nav class="navbar-menu md:hidden" on:click=move |_| menu_open.set(false)>
                                    {MENU_LINKS
                                        .into_iter()
                                        .map(|(href, label)| {
                                            view! { <A href=href attr:class="navbar-menu-link">{label}</A> }
                                        })
                                        .collect_view()}
                                </nav>
                            }
                        })
                }}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_has_no_badge() {
        assert_eq!(badge_text(0), None);
    }

    #[test]
    fn badge_shows_unit_count() {
        assert_eq!(badge_text(12).as_deref(), Some("12"));
    }
}
