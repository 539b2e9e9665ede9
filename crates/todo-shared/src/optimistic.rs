//! Optimistic Todo State
//!
//! Holds the client-side copy of the todo collection. Edits, toggles and
//! deletes are applied locally before the remote action resolves and are
//! reverted if it fails. Creates wait for the server-assigned identifier.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;

use crate::{ActionResult, Item, TodoId};

/// Remote CRUD actions the controller depends on.
///
/// Futures are not required to be `Send` so web-view implementations can
/// hold JS values across awaits.
#[async_trait(?Send)]
pub trait TodoActions {
    async fn create(&self, text: &str) -> ActionResult<Item>;
    async fn edit(&self, id: &TodoId, text: &str) -> ActionResult<()>;
    async fn toggle(&self, id: &TodoId) -> ActionResult<()>;
    async fn delete(&self, id: &TodoId) -> ActionResult<()>;
}

/// Cell holding the ordered collection.
pub trait ItemCollection {
    /// Copy of the current collection
    fn snapshot(&self) -> Vec<Item>;

    /// Replace the whole collection
    fn replace(&self, items: Vec<Item>);

    fn push(&self, item: Item) {
        let mut items = self.snapshot();
        items.push(item);
        self.replace(items);
    }
}

impl ItemCollection for Rc<RefCell<Vec<Item>>> {
    fn snapshot(&self) -> Vec<Item> {
        self.borrow().clone()
    }

    fn replace(&self, items: Vec<Item>) {
        *self.borrow_mut() = items;
    }

    fn push(&self, item: Item) {
        self.borrow_mut().push(item);
    }
}

/// Replace the text of the item with `id`
pub fn set_text(items: &mut [Item], id: &TodoId, text: &str) {
    if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
        item.text = text.to_string();
    }
}

/// Flip the `done` flag of the item with `id`
pub fn flip_done(items: &mut [Item], id: &TodoId) {
    if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
        item.done = !item.done;
    }
}

/// Drop the item with `id`, keeping the order of the rest
pub fn remove_item(items: &mut Vec<Item>, id: &TodoId) {
    items.retain(|item| item.id != *id);
}

/// Merge a freshly loaded collection with what is already held.
///
/// Loaded items come first in stored order. Held items the load did not
/// include (created while it was in flight) are kept after them.
pub fn merge_loaded(loaded: Vec<Item>, held: Vec<Item>) -> Vec<Item> {
    let mut merged = loaded;
    for item in held {
        if !merged.iter().any(|known| known.id == item.id) {
            merged.push(item);
        }
    }
    merged
}

/// Optimistic controller over a collection cell and a set of remote actions.
///
/// One instance per mounted view; it owns no global state.
#[derive(Debug, Clone, Copy)]
pub struct OptimisticTodos<C, A> {
    items: C,
    actions: A,
}

impl<C: ItemCollection, A: TodoActions> OptimisticTodos<C, A> {
    pub fn new(items: C, actions: A) -> Self {
        Self { items, actions }
    }

    /// Current collection
    pub fn items(&self) -> Vec<Item> {
        self.items.snapshot()
    }

    /// Adopt a freshly loaded collection, keeping items created meanwhile
    pub fn seed(&self, loaded: Vec<Item>) {
        let held = self.items.snapshot();
        self.items.replace(merge_loaded(loaded, held));
    }

    /// Create on the server, then append the stored item.
    pub async fn create(&self, text: &str) -> ActionResult<Item> {
        let outcome = self.actions.create(text).await;
        if let ActionResult::Success(item) = &outcome {
            self.items.push(item.clone());
        }
        outcome
    }

    pub async fn edit(&self, id: TodoId, text: &str) -> ActionResult<()> {
        let local = text.trim();
        self.speculate(|items| set_text(items, &id, local), || self.actions.edit(&id, text))
            .await
    }

    pub async fn toggle(&self, id: TodoId) -> ActionResult<()> {
        self.speculate(|items| flip_done(items, &id), || self.actions.toggle(&id))
            .await
    }

    pub async fn remove(&self, id: TodoId) -> ActionResult<()> {
        self.speculate(|items| remove_item(items, &id), || self.actions.delete(&id))
            .await
    }

    /// Apply `apply` locally, run `call`, restore the snapshot on failure.
    async fn speculate<F, Fut>(&self, apply: impl FnOnce(&mut Vec<Item>), call: F) -> ActionResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ActionResult<()>>,
    {
        let snapshot = self.items.snapshot();
        let mut next = snapshot.clone();
        apply(&mut next);
        self.items.replace(next);

        let outcome = call().await;
        if outcome.is_failure() {
            self.items.replace(snapshot);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use uuid::Uuid;

    /// In-memory stand-in for the core process
    #[derive(Default)]
    struct FakeActions {
        rows: RefCell<Vec<Item>>,
        next: Cell<u128>,
        fail: Cell<bool>,
    }

    impl FakeActions {
        fn find(&self, id: &TodoId) -> bool {
            self.rows.borrow().iter().any(|item| item.id == *id)
        }
    }

    #[async_trait(?Send)]
    impl TodoActions for FakeActions {
        async fn create(&self, text: &str) -> ActionResult<Item> {
            let text = text.trim();
            if self.fail.get() {
                return ActionResult::failure("Failed to create todo");
            }
            if text.is_empty() {
                return ActionResult::failure("Todo text cannot be empty");
            }
            self.next.set(self.next.get() + 1);
            let item = Item::new(TodoId::from(Uuid::from_u128(self.next.get())), text.to_string());
            self.rows.borrow_mut().push(item.clone());
            ActionResult::success(item)
        }

        async fn edit(&self, id: &TodoId, text: &str) -> ActionResult<()> {
            if self.fail.get() {
                return ActionResult::failure("Failed to update todo");
            }
            if !self.find(id) {
                return ActionResult::failure("Todo not found");
            }
            set_text(&mut self.rows.borrow_mut(), id, text.trim());
            ActionResult::success(())
        }

        async fn toggle(&self, id: &TodoId) -> ActionResult<()> {
            if self.fail.get() {
                return ActionResult::failure("Failed to toggle todo");
            }
            if !self.find(id) {
                return ActionResult::failure("Todo not found");
            }
            flip_done(&mut self.rows.borrow_mut(), id);
            ActionResult::success(())
        }

        async fn delete(&self, id: &TodoId) -> ActionResult<()> {
            if self.fail.get() {
                return ActionResult::failure("Failed to delete todo");
            }
            if !self.find(id) {
                return ActionResult::failure("Todo not found");
            }
            remove_item(&mut self.rows.borrow_mut(), id);
            ActionResult::success(())
        }
    }

    fn controller() -> OptimisticTodos<Rc<RefCell<Vec<Item>>>, Rc<FakeActions>> {
        OptimisticTodos::new(Rc::new(RefCell::new(Vec::new())), Rc::new(FakeActions::default()))
    }

    #[async_trait(?Send)]
    impl TodoActions for Rc<FakeActions> {
        async fn create(&self, text: &str) -> ActionResult<Item> {
            (**self).create(text).await
        }
        async fn edit(&self, id: &TodoId, text: &str) -> ActionResult<()> {
            (**self).edit(id, text).await
        }
        async fn toggle(&self, id: &TodoId) -> ActionResult<()> {
            (**self).toggle(id).await
        }
        async fn delete(&self, id: &TodoId) -> ActionResult<()> {
            (**self).delete(id).await
        }
    }

    #[tokio::test]
    async fn test_create_appends_stored_item() {
        let todos = controller();
        let created = todos.create("  Buy milk  ").await.into_result().unwrap();

        assert_eq!(created.text, "Buy milk");
        assert!(!created.done);
        assert_eq!(todos.items(), vec![created]);
    }

    #[tokio::test]
    async fn test_create_failure_leaves_collection() {
        let todos = controller();
        todos.create("first").await;
        let before = todos.items();

        let outcome = todos.create("").await;
        assert_eq!(outcome.error(), Some("Todo text cannot be empty"));
        assert_eq!(todos.items(), before);
    }

    #[tokio::test]
    async fn test_edit_applies_trimmed_text() {
        let todos = controller();
        let item = todos.create("draft").await.into_result().unwrap();

        assert!(todos.edit(item.id, "  final ").await.is_success());
        assert_eq!(todos.items()[0].text, "final");
    }

    #[tokio::test]
    async fn test_edit_unknown_id_rolls_back() {
        let todos = controller();
        todos.create("keep").await;
        let before = todos.items();

        let unknown = TodoId::from(Uuid::from_u128(999));
        let outcome = todos.edit(unknown, "x").await;
        assert_eq!(outcome.error(), Some("Todo not found"));
        assert_eq!(todos.items(), before);
    }

    #[tokio::test]
    async fn test_failed_actions_restore_snapshot() {
        let todos = controller();
        let a = todos.create("a").await.into_result().unwrap();
        let b = todos.create("b").await.into_result().unwrap();
        todos.toggle(b.id).await;
        let before = todos.items();

        todos.actions.fail.set(true);
        assert!(todos.edit(a.id, "changed").await.is_failure());
        assert_eq!(todos.items(), before);
        assert!(todos.toggle(a.id).await.is_failure());
        assert_eq!(todos.items(), before);
        assert!(todos.remove(b.id).await.is_failure());
        assert_eq!(todos.items(), before);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_done() {
        let todos = controller();
        let item = todos.create("flip").await.into_result().unwrap();

        todos.toggle(item.id).await;
        assert!(todos.items()[0].done);
        todos.toggle(item.id).await;
        assert!(!todos.items()[0].done);
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let todos = controller();
        let item = todos.create("gone").await.into_result().unwrap();
        let other = todos.create("stays").await.into_result().unwrap();

        assert!(todos.remove(item.id).await.is_success());
        assert_eq!(todos.items(), vec![other.clone()]);

        let again = todos.remove(item.id).await;
        assert_eq!(again.error(), Some("Todo not found"));
        assert_eq!(todos.items(), vec![other]);
    }

    #[tokio::test]
    async fn test_seed_keeps_items_created_before_load() {
        let todos = controller();
        let stored = Item::new(TodoId::from(Uuid::from_u128(500)), "from disk".to_string());
        let early = todos.create("typed fast").await.into_result().unwrap();

        todos.seed(vec![stored.clone()]);
        assert_eq!(todos.items(), vec![stored.clone(), early.clone()]);

        // A later load that already has the item does not duplicate it
        todos.seed(vec![stored.clone(), early.clone()]);
        assert_eq!(todos.items(), vec![stored, early]);
    }

    #[test]
    fn test_local_transforms_keep_order() {
        let ids: Vec<TodoId> = (1..=3).map(|n| TodoId::from(Uuid::from_u128(n))).collect();
        let mut items: Vec<Item> = ids.iter().map(|id| Item::new(*id, id.to_string())).collect();

        set_text(&mut items, &ids[1], "middle");
        flip_done(&mut items, &ids[2]);
        remove_item(&mut items, &ids[0]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "middle");
        assert!(items[1].done);
    }
}
