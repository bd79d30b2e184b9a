use std::time::Duration;

use leptos::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use rustc_hash::FxHashMap;

use groceryglide::deals::{COUNTDOWN_TICK_MS, Countdown, DealTheme, ExpiryHint, FlashDeal};

use crate::{
    icons::{Icon, LucideIcon},
    timers,
};

fn theme_class(theme: DealTheme) -> &'static str {
    match theme {
        DealTheme::Violet => "deal-tile deal-tile-violet",
        DealTheme::Emerald => "deal-tile deal-tile-emerald",
        DealTheme::Amber => "deal-tile deal-tile-amber",
    }
}

#[cfg(target_arch = "wasm32")]
fn countdown_rng() -> StdRng {
    StdRng::seed_from_u64(js_sys::Date::now().to_bits())
}

#[cfg(not(target_arch = "wasm32"))]
fn countdown_rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

fn initial_countdowns(deals: &[FlashDeal], rng: &mut StdRng) -> FxHashMap<String, Countdown> {
    deals
        .iter()
        .map(|deal| {
            let hint = ExpiryHint::parse(&deal.expires_in);

            (deal.id.clone(), Countdown::initial(hint, rng))
        })
        .collect()
}

/// Flash deal tiles with per-deal minute countdowns.
#[component]
pub fn FlashDeals(deals: Vec<FlashDeal>) -> impl IntoView {
    let mut rng = countdown_rng();
    let countdowns = RwSignal::new(initial_countdowns(&deals, &mut rng));
    let rng = StoredValue::new(rng);

    timers::every(
        Duration::from_millis(u64::from(COUNTDOWN_TICK_MS)),
        move || {
            countdowns.update(|all| {
                rng.update_value(|rng| {
                    for countdown in all.values_mut() {
                        countdown.tick(rng);
                    }
                });
            });

            true
        },
    );

    view! {
        <section class="my-8">
            <div class="mb-4 flex items-center justify-between">
                <h2 class="section-title">"Flash Deals"</h2>
                <a href="/deals" class="link-arrow">
                    "View All"
                    <LucideIcon icon=Icon::ArrowRight class="ml-1 h-4 w-4" />
                </a>
            </div>
            <div class="deal-grid">
                {deals
                    .into_iter()
                    .map(|deal| {
                        let id = deal.id.clone();
                        let time_left = move || {
                            countdowns.with(|all| {
                                all.get(&id)
                                    .map_or_else(|| "00:00".to_string(), ToString::to_string)
                            })
                        };

                        view! {
                            <article class=theme_class(deal.theme)>
                                <div class="mb-2 flex items-center gap-2">
                                    <LucideIcon icon=Icon::Timer class="h-5 w-5 animate-pulse" />
                                    <span class="deal-countdown" aria-label="Time left">{time_left}</span>
                                </div>
                                <h3 class="deal-title">{deal.title}</h3>
                                <p class="deal-description">{deal.description}</p>
                                <a href="/deals" class="deal-button">"Shop Now"</a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
