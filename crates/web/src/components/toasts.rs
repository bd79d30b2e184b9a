use leptos::prelude::*;

use groceryglide::session::NoticeKind;

use crate::{
    icons::{Icon, LucideIcon},
    shop::use_shop,
    timers::Restartable,
};

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "toast",
        NoticeKind::Destructive => "toast toast-destructive",
    }
}

/// Renders the current notice and dismisses it once its time is up.
#[component]
pub fn ToastHost() -> impl IntoView {
    let shop = use_shop();
    let notice = shop.notice;
    let timer = Restartable::new();

    Effect::new({
        let shop = shop.clone();

        move |_| {
            let Some((id, shown)) = notice.get() else {
                timer.cancel();
                return;
            };

            let shop = shop.clone();

            timer.start(shown.duration, move || shop.dismiss(id));
        }
    });

    view! {
        <div class="toast-viewport">
            {move || {
                notice
                    .get()
                    .map(|(id, shown)| {
                        let shop = shop.clone();

                        view! {
                            <div class=toast_class(shown.kind) role="alert">
                                <div>
                                    <p class="toast-title">{shown.title}</p>
                                    <p class="toast-description">{shown.description}</p>
                                </div>
                                <button
                                    type="button"
                                    class="icon-button"
                                    aria-label="Dismiss"
                                    on:click=move |_| shop.dismiss(id)
                                >
                                    <LucideIcon icon=Icon::X class="h-4 w-4" />
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructive_toasts_are_styled_apart() {
        assert_eq!(toast_class(NoticeKind::Info), "toast");
        assert_eq!(
            toast_class(NoticeKind::Destructive),
            "toast toast-destructive"
        );
    }
}
