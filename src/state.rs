//! List State
//!
//! The to-do list state container and its transitions. Pure Rust, no DOM,
//! so everything here runs under `cargo test` on the host.

use reactive_stores::Store;
use serde::Serialize;

use crate::models::{Item, ItemId};

/// Text shown in place of the list when there is nothing to render
pub const EMPTY_PLACEHOLDER: &str = "No items";

/// Everything the list owns
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// Items in insertion order (also the rendering order)
    pub items: Vec<Item>,
    /// Uncommitted text of the add field
    pub pending_input: String,
    /// Next id to hand out; only grows, so deleted ids are never reused
    pub next_id: ItemId,
}

/// A single state transition
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TodoAction {
    Add { title: String },
    Toggle { id: ItemId, completed: bool },
    Delete { id: ItemId },
    SetPendingInput { text: String },
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action in place
    pub fn apply(&mut self, action: TodoAction) {
        match action {
            TodoAction::Add { title } => {
                self.add_item(title);
            }
            TodoAction::Toggle { id, completed } => self.toggle_item(id, completed),
            TodoAction::Delete { id } => self.delete_item(id),
            TodoAction::SetPendingInput { text } => self.set_pending_input(text),
        }
    }

    /// Append a new item and clear the pending input. Empty titles are kept.
    pub fn add_item(&mut self, title: impl Into<String>) -> ItemId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Item::new(id, title));
        self.pending_input.clear();
        id
    }

    /// Set `completed` on the matching item; unknown ids are ignored
    pub fn toggle_item(&mut self, id: ItemId, completed: bool) {
        self.items
            .iter_mut()
            .filter(|item| item.id == id)
            .for_each(|item| item.completed = completed);
    }

    /// Remove every item with this id; unknown ids are ignored
    pub fn delete_item(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }
}

/// What the list area shows for a given set of items
#[derive(Debug, PartialEq)]
pub enum ListBody<'a> {
    Placeholder(&'static str),
    Rows(&'a [Item]),
}

impl<'a> ListBody<'a> {
    pub fn of(items: &'a [Item]) -> Self {
        if items.is_empty() {
            ListBody::Placeholder(EMPTY_PLACEHOLDER)
        } else {
            ListBody::Rows(items)
        }
    }
}
