//! Application Context
//!
//! Shared state provided via Leptos Context API, one instance per mounted
//! app.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_shared::OptimisticTodos;

use crate::commands::TauriTodoActions;
use crate::models::ActionResult;
use crate::store::{AppStore, StoreTodos};

/// How long an error stays on screen
pub const ERROR_DISPLAY_MS: u32 = 3000;

pub type TodoController = OptimisticTodos<StoreTodos, TauriTodoActions>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Optimistic controller over the store's todos
    pub todos: TodoController,
    /// Most recent error, cleared after [`ERROR_DISPLAY_MS`] - read
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
    /// Bumped on each error so only the latest one's timer clears it
    error_generation: RwSignal<u32>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        let (error, set_error) = signal(None);
        Self {
            todos: OptimisticTodos::new(StoreTodos(store), TauriTodoActions),
            error,
            set_error,
            error_generation: RwSignal::new(0),
        }
    }

    /// Show `message` for a while
    pub fn show_error(&self, message: String) {
        web_sys::console::warn_1(&format!("[APP] {}", message).into());
        self.error_generation.update(|g| *g = g.wrapping_add(1));
        let generation = self.error_generation.get_untracked();
        self.set_error.set(Some(message));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ERROR_DISPLAY_MS).await;
            if ctx.error_generation.get_untracked() == generation {
                ctx.set_error.set(None);
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.set_error.set(None);
    }

    /// Unwrap an action outcome, showing the failure message if any
    pub fn report<T>(&self, outcome: ActionResult<T>) -> Option<T> {
        match outcome {
            ActionResult::Success(value) => Some(value),
            ActionResult::Failure(message) => {
                self.show_error(message);
                None
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
