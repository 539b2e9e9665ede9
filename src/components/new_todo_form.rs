//! New Todo Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

/// Form for creating new todos.
///
/// The input is cleared only once the core process has stored the todo.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let text = new_text.get_untracked();
        set_pending.set(true);

        spawn_local(async move {
            if ctx.report(ctx.todos.create(&text).await).is_some() {
                set_new_text.set(String::new());
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Add new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || pending.get()>"Add"</button>
        </form>
    }
}
