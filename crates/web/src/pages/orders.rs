use leptos::prelude::*;

use groceryglide::{catalog::Catalog, orders::PastOrder};

use crate::{
    components::order_tracking::OrderTracking,
    icons::{Icon, LucideIcon},
    shop::use_shop,
};

/// Display row for one product in a past order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderedItem {
    name: String,
    unit: String,
    image_url: String,
    price: String,
}

/// Resolve an order's product ids, skipping products no longer sold.
fn ordered_items(order: &PastOrder, catalog: &Catalog) -> Vec<OrderedItem> {
    order
        .items
        .iter()
        .filter_map(|product_id| catalog.find(product_id))
        .map(|(_, product)| OrderedItem {
            name: product.name.clone(),
            unit: product.unit.clone(),
            image_url: product.image_url.clone(),
            price: product.effective_price().to_string(),
        })
        .collect()
}

#[component]
fn PastOrderCard(order: PastOrder, items: Vec<OrderedItem>) -> impl IntoView {
    view! {
        <article class="panel">
            <header class="panel-header">
                <div class="flex items-center gap-2">
                    <LucideIcon icon=Icon::ShoppingBag class="text-primary h-5 w-5" />
                    <h3 class="font-semibold">{format!("Order #{}", order.order_number())}</h3>
                </div>
                <div class="flex items-center gap-2 text-sm text-muted">
                    <LucideIcon icon=Icon::Clock class="h-4 w-4" />
                    <span>{order.date.clone()}</span>
                </div>
            </header>
            <div class="p-5">
                <dl class="mb-4 space-y-2">
                    <div class="summary-row">
                        <dt class="text-sm text-muted">"Status"</dt>
                        <dd class="status-pill">{order.stage.label()}</dd>
                    </div>
                    <div class="summary-row">
                        <dt class="text-sm text-muted">"Total"</dt>
                        <dd class="font-medium">{order.total.to_string()}</dd>
                    </div>
                </dl>
                <div class="border-t pt-4">
                    <h4 class="mb-2 font-medium">"Items"</h4>
                    <ul class="space-y-2">
                        {items
                            .into_iter()
                            .map(|item| view! {
                                <li class="flex items-center gap-3">
                                    <div class="order-item-thumb">
                                        <img src=item.image_url alt=item.name.clone() class="h-full w-full object-cover" />
                                    </div>
                                    <div class="flex-grow">
                                        <p class="text-sm font-medium">{item.name}</p>
                                        <p class="text-xs text-muted">{item.unit}</p>
                                    </div>
                                    <span class="text-sm font-medium">{item.price}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="mt-4 flex justify-end gap-2">
                    <button type="button" class="button button-outline button-small">"Order Details"</button>
                    <button type="button" class="button button-small">"Reorder"</button>
                </div>
            </div>
        </article>
    }
}

/// Current order tracker and order history.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let data = use_shop().data;

    let current = data.current_order.clone().map(|order| {
        view! {
            <section class="panel">
                <header class="panel-header">
                    <div class="flex items-center gap-2">
                        <LucideIcon icon=Icon::Package class="text-primary h-5 w-5" />
                        <h2 class="font-semibold">"Current Order"</h2>
                    </div>
                    <span class="text-sm text-muted">{format!("Order #{}", order.order_number())}</span>
                </header>
                <OrderTracking order=order />
            </section>
        }
    });

    let history = data
        .past_orders
        .iter()
        .map(|order| {
            let items = ordered_items(order, &data.catalog);

            view! { <PastOrderCard order=order.clone() items=items /> }
        })
        .collect_view();

    view! {
        <div class="py-8">
            <h1 class="page-title mb-8">"My Orders"</h1>
            <div class="space-y-8">
                {current}
                <h2 class="mt-10 mb-4 text-xl font-bold">"Order History"</h2>
                {history}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use groceryglide::fixtures::StoreData;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn history_items_resolve_with_sale_prices() -> TestResult {
        let store = StoreData::from_yaml(include_str!("../../../../fixtures/store/demo.yml"))?;
        let order = store.past_orders.first().ok_or("no past orders")?;

        let items = ordered_items(order, &store.catalog);

        assert_eq!(items.len(), order.items.len());
        assert_eq!(items.first().map(|item| item.name.as_str()), Some("Organic Bananas"));
        assert_eq!(items.first().map(|item| item.price.as_str()), Some("$1.99"));

        Ok(())
    }

    #[test]
    fn unknown_products_are_skipped() -> TestResult {
        let store = StoreData::from_yaml(include_str!("../../../../fixtures/store/demo.yml"))?;
        let mut order = store.past_orders.first().cloned().ok_or("no past orders")?;

        order.items.push("prod-missing".to_string());

        assert_eq!(
            ordered_items(&order, &store.catalog).len(),
            order.items.len() - 1
        );

        Ok(())
    }
}
