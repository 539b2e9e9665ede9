//! Delete control for one todo row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::TodoId;

/// Asks before removing; the first click arms, the second removes.
///
/// `label` is the todo text, echoed in the prompt so it is clear which row
/// goes away.
#[component]
pub fn DeleteTodoButton(id: TodoId, #[prop(into)] label: String) -> impl IntoView {
    let ctx = use_app_context();
    let (armed, set_armed) = signal(false);

    let remove = move |_: web_sys::MouseEvent| {
        set_armed.set(false);
        spawn_local(async move {
            ctx.report(ctx.todos.remove(id).await);
        });
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button class="delete-btn" title="Delete todo" on:click=move |_| set_armed.set(true)>
                    "×"
                </button>
            }
        >
            <span class="delete-confirm" title=label.clone()>
                "Remove this todo?"
                <button class="confirm-btn" on:click=remove>"Yes"</button>
                <button class="cancel-btn" on:click=move |_| set_armed.set(false)>"No"</button>
            </span>
        </Show>
    }
}
