//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_shared::ItemCollection;

use crate::models::Item;

/// Todo collection held by one mounted app
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos in insertion order
    pub todos: Vec<Item>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Tracked read of the todo collection, for views
pub fn todos(store: &AppStore) -> Vec<Item> {
    store.todos().get()
}

/// The store's todo field as the optimistic controller's collection cell
#[derive(Clone, Copy)]
pub struct StoreTodos(pub AppStore);

impl ItemCollection for StoreTodos {
    fn snapshot(&self) -> Vec<Item> {
        self.0.todos().get_untracked()
    }

    fn replace(&self, items: Vec<Item>) {
        *self.0.todos().write() = items;
    }

    fn push(&self, item: Item) {
        self.0.todos().write().push(item);
    }
}
