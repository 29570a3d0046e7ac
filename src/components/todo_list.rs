//! Todo List Component
//!
//! Shows the placeholder when empty, otherwise one row per item.

use leptos::prelude::*;

use crate::models::Item;
use crate::state::{ListBody, TodoStateStoreFields, EMPTY_PLACEHOLDER};
use crate::store::use_todo_store;
use crate::components::TodoRow;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();
    let items = move || store.items().get();
    let is_empty = move || store.items().with(|items| matches!(ListBody::of(items), ListBody::Placeholder(_)));

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! { <p class="empty">{EMPTY_PLACEHOLDER}</p> }
        >
            <ul class="list">
                <For
                    each=items
                    // completed is part of the key so a toggle re-renders its row
                    key=|item: &Item| (item.id, item.completed)
                    children=move |item: Item| view! { <TodoRow item=item /> }
                />
            </ul>
        </Show>
    }
}
