use leptos::*;

mod api;
mod components;
mod config;
mod error;
mod feedback;
mod notify;

use components::feedback_page::FeedbackPage;
use config::Config;

#[component]
fn App() -> impl IntoView {
    let config = Config::from_build_env();
    tracing::info!(endpoint = %config.endpoint, "feedback page ready");
    provide_context(config);

    view! {
        <div>
            <FeedbackPage />
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // native builds only exist to run the model tests
}
