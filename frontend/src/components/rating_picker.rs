use leptos::*;

use crate::feedback::{FeedbackForm, RATING_OPTIONS};

#[component]
pub fn RatingPicker(form: RwSignal<FeedbackForm>) -> impl IntoView {
    let progress = move || format!("{}%", form.with(|f| f.rating.progress_percent()));
    let text = move || form.with(|f| f.rating.option().text);

    view! {
        <div class="rating">
            <h2 class="rating-heading">"We Want Your Feedback"</h2>
            <div class="rating-options">
                {RATING_OPTIONS
                    .iter()
                    .map(|option| {
                        let rating = option.rating();
                        view! {
                            <div
                                class=format!("rating-bubble {}", option.color)
                                class:active=move || form.with(|f| f.rating == rating)
                                on:click=move |_| form.update(|f| f.select_rating(rating))
                            >
                                {option.emoji}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="progress">
                <div class="progress-fill" style:width=progress></div>
            </div>
            <p class="rating-text">{text}</p>
        </div>
    }
}
