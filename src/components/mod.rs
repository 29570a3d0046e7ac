//! UI Components
//!
//! Leptos components for the list page.

mod new_item_form;
mod todo_list;
mod todo_row;

pub use new_item_form::NewItemForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
