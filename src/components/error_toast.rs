//! Error Toast Component
//!
//! Shows the most recent action error until it expires or is dismissed.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ErrorToast() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.error.get().map(|message| {
            view! {
                <div class="error-toast" role="alert">
                    <span>{message}</span>
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>"×"</button>
                </div>
            }
        })
    }
}
