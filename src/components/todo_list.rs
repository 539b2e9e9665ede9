//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{todos, use_app_store};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let items = move || todos(&store);

    view! {
        <ul class="todo-list">
            <For
                each=items
                key=|item| (item.id, item.text.clone(), item.done)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </ul>
        <p class="item-count">
            {move || {
                let all = todos(&store);
                let open = all.iter().filter(|item| !item.done).count();
                format!("{} todos, {} open", all.len(), open)
            }}
        </p>
    }
}
