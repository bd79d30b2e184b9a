use leptos::{html, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use groceryglide::categories::Category;

use crate::icons::{Icon, LucideIcon};

const SCROLL_STEP: f64 = 200.0;

/// Image tile for one category, highlighted when selected.
#[component]
pub fn CategoryTile(
    category: Category,
    /// Currently selected category id.
    selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let id = category.id.clone();
    let is_selected =
        Signal::derive(move || selected.with(|current| current.as_deref() == Some(id.as_str())));
    let icon = Icon::for_category(&category.icon);
    let category_id = category.id.clone();

    view! {
        <button
            type="button"
            class="category-tile"
            class:category-tile-selected=move || is_selected.get()
            aria-pressed=move || is_selected.get().to_string()
            on:click=move |_| on_select.run(category_id.clone())
        >
            <div class="category-tile-media">
                <img src=category.image_url alt="" class="category-tile-image" />
                <div class="category-tile-overlay">
                    <div class="category-tile-icon">
                        <LucideIcon icon=icon class="h-5 w-5" />
                    </div>
                </div>
            </div>
            <p class="category-tile-name">{category.name}</p>
        </button>
    }
}

fn scroll_by(scroller: NodeRef<html::Div>, left: f64) {
    let Some(element) = scroller.get() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);

    element.scroll_by_with_scroll_to_options(&options);
}

/// Horizontally scrolling category strip on the home page.
#[component]
pub fn CategoryList(
    categories: Vec<Category>,
    selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let scroller = NodeRef::<html::Div>::new();

    view! {
        <section class="relative my-8">
            <h2 class="section-title">"Categories"</h2>
            <div class="relative">
                <button
                    type="button"
                    class="scroll-button scroll-button-left"
                    aria-label="Scroll categories left"
                    on:click=move |_| scroll_by(scroller, -SCROLL_STEP)
                >
                    <LucideIcon icon=Icon::ChevronLeft class="h-4 w-4" />
                </button>
                <div node_ref=scroller class="category-strip">
                    {categories
                        .into_iter()
                        .map(|category| {
                            view! { <CategoryTile category=category selected=selected on_select=on_select /> }
                        })
                        .collect_view()}
                </div>
                <button
                    type="button"
                    class="scroll-button scroll-button-right"
                    aria-label="Scroll categories right"
                    on:click=move |_| scroll_by(scroller, SCROLL_STEP)
                >
                    <LucideIcon icon=Icon::ChevronRight class="h-4 w-4" />
                </button>
            </div>
        </section>
    }
}
