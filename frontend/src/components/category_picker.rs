use leptos::*;

use crate::feedback::{Category, FeedbackForm};

/// One pill per category; the selected one is highlighted.
#[component]
pub fn CategoryPicker(form: RwSignal<FeedbackForm>) -> impl IntoView {
    view! {
        <div class="categories">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    view! {
                        <button
                            type="button"
                            class="category"
                            class:selected=move || form.with(|f| f.is_selected(category))
                            on:click=move |_| form.update(|f| f.select_category(category))
                        >
                            {category.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
