//! Storefront state shared by every route.

use std::{num::NonZeroU32, sync::Arc, time::Duration};

use leptos::prelude::*;

use groceryglide::prelude::*;

use crate::timers;

/// Delay between pressing a card's add button and the cart changing.
const CARD_ADD_DELAY: Duration = Duration::from_millis(300);

/// Seed data plus the reactive session, provided as context by the app shell.
#[derive(Debug, Clone)]
pub struct Shop {
    /// Parsed store fixture.
    pub data: Arc<StoreData>,

    /// Cart, category filter and cart panel state for this visit.
    pub session: RwSignal<Session>,

    /// Toast currently on screen, tagged so stale dismissals are ignored.
    pub notice: RwSignal<Option<(u64, Notice)>>,

    /// Screen reader announcements.
    pub live_message: RwSignal<(u64, String)>,
}

impl Shop {
    /// Wrap loaded store data with a fresh session.
    pub fn new(data: StoreData) -> Self {
        Self {
            data: Arc::new(data),
            session: RwSignal::new(Session::new()),
            notice: RwSignal::new(None),
            live_message: RwSignal::new((0, String::new())),
        }
    }

    /// Show a toast and read it out.
    pub fn notify(&self, notice: Notice) {
        announce(
            self.live_message,
            format!("{}: {}", notice.title, notice.description),
        );

        let id = self.live_message.with_untracked(|(id, _)| *id);

        self.notice.set(Some((id, notice)));
    }

    /// Clear the toast tagged `id`, leaving newer ones alone.
    pub fn dismiss(&self, id: u64) {
        self.notice.update(|current| {
            if current.as_ref().is_some_and(|(shown, _)| *shown == id) {
                *current = None;
            }
        });
    }

    /// Add one unit from a product card after the button animation.
    pub fn add_from_card(&self, key: ProductKey, adding: RwSignal<bool>) {
        adding.set(true);

        let shop = self.clone();

        timers::after(CARD_ADD_DELAY, move || {
            adding.set(false);

            let Some(product) = shop.data.catalog.get(key) else {
                return;
            };

            let result = shop
                .session
                .try_update(|session| session.add_from_card(key, product));

            shop.report(result);
        });
    }

    /// Add the picked quantity from the product detail page.
    pub fn add_from_detail(&self, key: ProductKey, quantity: NonZeroU32) {
        let Some(product) = self.data.catalog.get(key) else {
            return;
        };

        let result = self
            .session
            .try_update(|session| session.add_from_detail(key, product, quantity));

        self.report(result);
    }

    /// Toggle the home page category filter.
    pub fn toggle_category(&self, category_id: &str) {
        let notice = self
            .session
            .try_update(|session| session.select_category(category_id))
            .flatten();

        if let Some(notice) = notice {
            self.notify(notice);
        }
    }

    /// Apply a cart mutation from the panel or cart page controls.
    pub fn edit_cart<T>(&self, edit: impl FnOnce(&mut Cart) -> Result<T, CartError>) {
        let result = self.session.try_update(|session| edit(session.cart_mut()));

        if let Some(Err(error)) = result {
            leptos::logging::warn!("cart update rejected: {error}");
        }
    }

    /// Units across all cart lines.
    pub fn item_count(&self) -> u64 {
        self.session.with(|session| session.cart().item_count())
    }

    /// Show or hide the slide-over cart.
    pub fn set_cart_open(&self, open: bool) {
        self.session.update(|session| session.set_cart_open(open));
    }

    fn report(&self, result: Option<Result<Notice, CartError>>) {
        match result {
            Some(Ok(notice)) => self.notify(notice),
            Some(Err(error)) => self.notify(Notice::destructive("Cart", error.to_string())),
            None => {}
        }
    }
}

/// Fetch the shop provided by the app shell.
pub fn use_shop() -> Shop {
    expect_context::<Shop>()
}

/// Replace the live region text, bumping its id so repeats are re-read.
pub fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
