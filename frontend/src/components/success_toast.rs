use leptos::*;

use crate::feedback::Toast;

#[component]
pub fn SuccessToast(toast: RwSignal<Toast>) -> impl IntoView {
    view! {
        {move || {
            toast.with(|t| {
                t.message().map(|m| view! { <div class="toast">{m.to_string()}</div> })
            })
        }}
    }
}
