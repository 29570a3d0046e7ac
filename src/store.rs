//! List Store
//!
//! Wraps `TodoState` in a reactive_stores `Store` so views can subscribe to
//! individual fields, and funnels every mutation through `dispatch`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ItemId;
use crate::state::{TodoAction, TodoState};

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the list store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Apply an action against the latest state and log it
pub fn dispatch(store: &TodoStore, action: TodoAction) {
    let line = serde_json::to_string(&action).unwrap_or_else(|_| format!("{:?}", action));
    store.update(|state| state.apply(action));
    let len = store.with_untracked(|state| state.len());
    web_sys::console::log_1(&format!("[STORE] {} -> {} items", line, len).into());
}

// ========================
// Store Helper Functions
// ========================

/// Commit a title as a new item
pub fn store_add_item(store: &TodoStore, title: String) {
    dispatch(store, TodoAction::Add { title });
}

/// Set the completion flag of an item
pub fn store_toggle_item(store: &TodoStore, id: ItemId, completed: bool) {
    dispatch(store, TodoAction::Toggle { id, completed });
}

/// Remove an item by ID
pub fn store_delete_item(store: &TodoStore, id: ItemId) {
    dispatch(store, TodoAction::Delete { id });
}

/// Mirror the add field's text
pub fn store_set_pending_input(store: &TodoStore, text: String) {
    dispatch(store, TodoAction::SetPendingInput { text });
}
