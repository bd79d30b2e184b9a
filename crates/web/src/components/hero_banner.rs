use leptos::prelude::*;
use leptos_router::components::A;

use groceryglide::banners::{AUTO_ADVANCE, Banner, Carousel, SlidePosition, TRANSITION};

use crate::{
    icons::{Icon, LucideIcon},
    timers::Restartable,
};

fn slide_class(position: SlidePosition) -> &'static str {
    match position {
        SlidePosition::Current => "hero-slide hero-slide-current",
        SlidePosition::Before => "hero-slide hero-slide-before",
        SlidePosition::After => "hero-slide hero-slide-after",
    }
}

/// Rotating promotional banners.
#[component]
pub fn HeroBanner(banners: Vec<Banner>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(banners.len()));
    let auto_advance = Restartable::new();
    let transition = Restartable::new();

    let navigate = move |step: fn(&mut Carousel) -> bool| {
        let moved = carousel.try_update(step).unwrap_or(false);

        if moved {
            transition.start(TRANSITION, move || {
                carousel.update(Carousel::finish_transition);
            });
        }
    };

    let current = Memo::new(move |_| carousel.with(Carousel::current));

    Effect::new(move |_| {
        current.track();

        auto_advance.start(AUTO_ADVANCE, move || navigate(Carousel::next_slide));
    });

    let count = banners.len();

    view! {
        <section class="hero" aria-roledescription="carousel">
            {banners
                .into_iter()
                .enumerate()
                .map(|(index, banner)| {
                    view! {
                        <div
                            class=move || carousel.with(|state| slide_class(state.slide_position(index)))
                            aria-hidden=move || (current.get() != index).to_string()
                        >
                            <div
                                class="hero-slide-image"
                                style=format!("background-image: url({})", banner.image_url)
                            ></div>
                            <div class="hero-slide-shade"></div>
                            <div class="hero-slide-content">
                                <div class="max-w-lg" class:hero-copy-hidden=move || carousel.with(Carousel::is_animating)>
                                    <h2 class="hero-title">{banner.title}</h2>
                                    <p class="hero-description">{banner.description}</p>
                                    <A href=banner.link attr:class="button">{banner.button_text}</A>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}

            <button
                type="button"
                class="hero-arrow hero-arrow-left"
                aria-label="Previous banner"
                on:click=move |_| navigate(Carousel::previous_slide)
            >
                <LucideIcon icon=Icon::ChevronLeft class="h-6 w-6" />
            </button>
            <button
                type="button"
                class="hero-arrow hero-arrow-right"
                aria-label="Next banner"
                on:click=move |_| navigate(Carousel::next_slide)
            >
                <LucideIcon icon=Icon::ChevronRight class="h-6 w-6" />
            </button>

            <div class="hero-indicators">
                {(0..count)
                    .map(|index| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if current.get() == index {
                                        "hero-indicator hero-indicator-current"
                                    } else {
                                        "hero-indicator"
                                    }
                                }
                                aria-label=format!("Show banner {}", index + 1)
                                on:click=move |_| {
                                    carousel.update(|state| {
                                        state.select(index);
                                    });
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_classes_follow_position() {
        let carousel = Carousel::new(3);

        assert_eq!(
            slide_class(carousel.slide_position(0)),
            "hero-slide hero-slide-current"
        );
        assert_eq!(
            slide_class(carousel.slide_position(2)),
            "hero-slide hero-slide-before"
        );
        assert_eq!(
            slide_class(carousel.slide_position(1)),
            "hero-slide hero-slide-after"
        );
    }

    #[test]
    fn navigation_reports_through_signal() {
        let carousel = RwSignal::new(Carousel::new(3));

        assert_eq!(carousel.try_update(Carousel::next_slide), Some(true));
        assert_eq!(carousel.try_update(Carousel::next_slide), Some(false));

        carousel.update(Carousel::finish_transition);

        assert_eq!(carousel.try_update(Carousel::previous_slide), Some(true));
        assert_eq!(carousel.get_untracked().current(), 0);
    }
}
