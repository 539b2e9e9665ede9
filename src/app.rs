//! Todo Frontend App
//!
//! Main application component.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ErrorToast, NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store);

    // Provide state to all children
    provide_context(store);
    provide_context(ctx);

    // Seed the collection once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", loaded.len()).into());
                    ctx.todos.seed(loaded);
                }
                Err(e) => ctx.show_error(e),
            }
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <TodoList />

            <ErrorToast />
        </main>
    }
}
