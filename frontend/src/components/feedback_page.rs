use leptos::*;
use tracing::debug;

use super::{category_picker::CategoryPicker, rating_picker::RatingPicker, success_toast::SuccessToast};
use crate::api::HttpTransport;
use crate::config::Config;
use crate::error::FormError;
use crate::feedback::{submit_feedback, FeedbackForm, Notice, Toast};
use crate::notify;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let form = create_rw_signal(FeedbackForm::default());
    let toast = create_rw_signal(Toast::default());

    let on_submit = move |_: ev::MouseEvent| {
        let payload = match form.with_untracked(FeedbackForm::validate) {
            Ok(p) => p,
            Err(e) => {
                if let FormError::MissingFields(fields) = &e {
                    debug!(missing = ?fields, "submission blocked");
                }
                notify::alert(&e.to_string());
                return;
            }
        };

        let transport = HttpTransport::new(config.endpoint.clone());
        let notice_duration = config.notice_duration;
        spawn_local(async move {
            let outcome = submit_feedback(&transport, &payload).await;
            match form.try_update(|f| f.apply(outcome)).flatten() {
                Some(Notice::Toast(message)) => {
                    if let Some(ticket) = toast.try_update(|t| t.show(message)) {
                        set_timeout(
                            move || {
                                toast.try_update(|t| t.expire(ticket));
                            },
                            notice_duration,
                        );
                    }
                }
                Some(Notice::Alert(message)) => notify::alert(&message),
                None => {}
            }
        });
    };

    view! {
        <div class="page">
            <SuccessToast toast=toast />
            <div class="card">
                <h2 class="title">"Feedback"</h2>
                <p class="subtitle">"We value your feedback to improve our platform."</p>

                <input
                    type="text"
                    placeholder="Your Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |e| form.update(|f| f.name = event_target_value(&e))
                />
                <input
                    type="email"
                    placeholder="Your Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |e| form.update(|f| f.email = event_target_value(&e))
                />

                <CategoryPicker form=form />

                <textarea
                    placeholder="Describe your issue or request..."
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |e| form.update(|f| f.description = event_target_value(&e))
                />

                <RatingPicker form=form />

                <button type="button" class="submit" on:click=on_submit>
                    "Submit Feedback"
                </button>
            </div>
        </div>
    }
}
