//! Display helpers shared by the product and cart views.

use groceryglide::{
    orders::StageState,
    products::{Product, RATING_STARS, Rating},
};

/// Price to show and, for discounted products, the struck-through shelf price.
pub fn price_pair(product: &Product) -> (String, Option<String>) {
    match product.discounted_price {
        Some(discounted) => (discounted.to_string(), Some(product.price.to_string())),
        None => (product.price.to_string(), None),
    }
}

/// Fill state of each rating star, left to right.
pub fn star_fills(rating: Rating) -> Vec<bool> {
    let filled = rating.filled_stars();

    (0..RATING_STARS).map(|star| star < filled).collect()
}

/// Step styling on the order tracker.
pub fn stage_classes(state: StageState) -> (&'static str, &'static str) {
    match state {
        StageState::Current => (
            "tracker-step tracker-step-current",
            "tracker-dot tracker-dot-current",
        ),
        StageState::Completed => (
            "tracker-step tracker-step-completed",
            "tracker-dot tracker-dot-completed",
        ),
        StageState::Upcoming => ("tracker-step", "tracker-dot"),
    }
}

/// CSS width for a progress bar.
pub fn percent_width(percent: f64) -> String {
    format!("width: {:.2}%", percent.clamp(0.0, 100.0))
}

/// Footer copyright line.
pub fn copyright(year: Option<u32>, store_name: &str) -> String {
    match year {
        Some(year) => format!("© {year} {store_name}. All rights reserved."),
        None => format!("© {store_name}. All rights reserved."),
    }
}
