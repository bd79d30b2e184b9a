use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

/// Fallback for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        leptos::logging::warn!("404: no route for {}", pathname.get());
    });

    view! {
        <div class="flex min-h-[50vh] items-center justify-center">
            <div class="text-center">
                <h1 class="mb-4 text-4xl font-bold">"404"</h1>
                <p class="mb-4 text-xl text-muted">"Oops! Page not found"</p>
                <A href="/" attr:class="link">"Return to Home"</A>
            </div>
        </div>
    }
}
