use std::time::Duration;

use leptos::prelude::*;

use groceryglide::orders::{OrderStage, OrderStatus, PROGRESS_TICK_MS, ProgressAnimation};

use crate::{
    format::{percent_width, stage_classes},
    icons::{Icon, LucideIcon},
    timers,
};

fn stage_icon(stage: OrderStage) -> Icon {
    match stage {
        OrderStage::Ordered => Icon::CircleCheck,
        OrderStage::Packed => Icon::Package,
        OrderStage::Shipped => Icon::Clock,
        OrderStage::OutForDelivery => Icon::Truck,
        OrderStage::Delivered => Icon::House,
    }
}

/// Animated progress tracker for the in-flight order.
#[component]
pub fn OrderTracking(order: OrderStatus) -> impl IntoView {
    let stage = order.stage;
    let animation = RwSignal::new(ProgressAnimation::new(stage));

    timers::every(
        Duration::from_millis(u64::from(PROGRESS_TICK_MS)),
        move || {
            animation
                .try_update(|progress| progress.tick() && !progress.is_finished())
                .unwrap_or(false)
        },
    );

    let width = move || animation.with(|progress| percent_width(progress.percent()));

    view! {
        <section class="tracker">
            <div class="mb-4 flex items-center justify-between">
                <h2 class="text-xl font-bold">"Current Order"</h2>
                <span class="badge badge-outline">{order.estimated_delivery}</span>
            </div>

            <div
                class="tracker-bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || format!("{:.0}", animation.with(ProgressAnimation::percent))
            >
                <div class="tracker-bar-fill" style=width></div>
            </div>

            <ol class="tracker-steps">
                {OrderStage::ALL
                    .into_iter()
                    .map(|step| {
                        let (step_class, dot_class) = stage_classes(stage.state_of(step));

                        view! {
                            <li class=step_class>
                                <div class=dot_class>
                                    <LucideIcon icon=stage_icon(step) class="h-4 w-4" />
                                </div>
                                <span class="text-xs font-medium">{step.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="tracker-map">
                <LucideIcon icon=Icon::MapPin class="mx-auto mb-2 h-6 w-6 text-primary" />
                <p class="text-sm font-medium">"Delivery tracking map coming soon"</p>
            </div>
        </section>
    }
}
