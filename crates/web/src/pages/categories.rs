use std::sync::Arc;

use leptos::prelude::*;

use groceryglide::categories::CategorySelection;

use crate::{
    components::{
        category_list::CategoryTile,
        product_card::{ProductGrid, owned},
    },
    shop::use_shop,
};

/// Category browser with its own selection, separate from the home page.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let data = Arc::clone(&use_shop().data);
    let selection = RwSignal::new(CategorySelection::default());

    let selected =
        Signal::derive(move || selection.with(|current| current.selected().map(str::to_string)));

    let on_select = Callback::new(move |category_id: String| {
        selection.update(|current| {
            current.toggle(&category_id);
        });
    });

    let products = {
        let data = Arc::clone(&data);

        move || {
            let Some(category_id) = selected.get() else {
                return view! {
                    <div class="rounded-lg bg-muted p-8 text-center">
                        <p class="text-lg">"Please select a category to view products"</p>
                    </div>
                }
                .into_any();
            };

            let name = data
                .catalog
                .category(&category_id)
                .map(|category| category.name.clone())
                .unwrap_or_default();

            let products = owned(data.catalog.filter_by_category(Some(&category_id)));

            view! { <ProductGrid title=format!("{name} Products") products=products /> }.into_any()
        }
    };

    view! {
        <div class="py-8">
            <h1 class="page-title">"Categories"</h1>
            <div class="category-grid">
                {data
                    .catalog
                    .categories()
                    .iter()
                    .map(|category| {
                        view! { <CategoryTile category=category.clone() selected=selected on_select=on_select /> }
                    })
                    .collect_view()}
            </div>
            {products}
        </div>
    }
}
