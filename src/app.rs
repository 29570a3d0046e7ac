//! ToDo List App
//!
//! Page layout: add form, heading, list, remaining count.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewItemForm, TodoList};
use crate::state::TodoState;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    // State lives only as long as the page
    let store: TodoStore = Store::new(TodoState::new());
    provide_context(store);

    let summary = move || {
        store.with(|state| {
            (!state.is_empty()).then(|| {
                format!("{} of {} remaining", state.remaining_count(), state.len())
            })
        })
    };

    view! {
        <NewItemForm />

        <h1 class="header">"ToDo List"</h1>

        <TodoList />

        {move || summary().map(|text| view! { <p class="item-count">{text}</p> })}
    }
}
