//! Todo Row Component
//!
//! A single todo: checkbox, text (double-click to edit) and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteTodoButton;
use crate::context::use_app_context;
use crate::models::Item;

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let done = item.done;
    let text = item.text.clone();
    let label = item.text.clone();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(item.text);

    let save = move || {
        set_editing.set(false);
        let new_text = draft.get_untracked();
        spawn_local(async move {
            ctx.report(ctx.todos.edit(id, &new_text).await);
        });
    };

    let text_for_cancel = text.clone();
    let cancel = move || {
        set_draft.set(text_for_cancel.clone());
        set_editing.set(false);
    };

    view! {
        <li class=move || if done { "todo-row done" } else { "todo-row" }>
            <input
                type="checkbox"
                checked=done
                on:change=move |_| {
                    spawn_local(async move {
                        ctx.report(ctx.todos.toggle(id).await);
                    });
                }
            />

            <Show
                when=move || editing.get()
                fallback=move || {
                    let text = text.clone();
                    view! {
                        <span class="todo-text" on:dblclick=move |_| set_editing.set(true)>
                            {text}
                        </span>
                    }
                }
            >
                <input
                    class="todo-edit"
                    type="text"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown={
                        let cancel = cancel.clone();
                        move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => save(),
                            "Escape" => cancel(),
                            _ => {}
                        }
                    }
                    on:blur=move |_| {
                        if editing.get_untracked() {
                            save();
                        }
                    }
                />
            </Show>

            <DeleteTodoButton id=id label=label />
        </li>
    }
}
